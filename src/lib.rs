//! Core library for generating randomized bingo cards as LaTeX documents.

mod batch;
mod card;
mod compile;
mod config;
mod labels;
mod manifest;

pub use batch::{
    ArtifactOptions, BatchItem, BatchOptions, BatchReport, CardOutput, generate_batch,
    indexed_source, write_card,
};
pub use card::CardGenerator;
pub use compile::{CompileError, CompiledArtifact, Compiler, PdfLatex};
pub use config::{CardConfig, ConfigError, FontSize};
pub use labels::{LineEndings, parse_labels, read_labels};
pub use manifest::{Manifest, ManifestEntry};

/// Labels used by the built-in demo card.
pub const DEMO_LABELS: [&str; 16] = [
    "fortran", "vim", "emacs", "a", "bingo", "DFT", "LAMMPS", "b", "c++", "python", "asdajdiawd",
    "c", "c++", "python", "asoiwjdiawd", "c",
];
