//! Shared clap helper types for CLI commands.

use std::path::PathBuf;

use bingocard::{ArtifactOptions, CardConfig, FontSize};
use clap::{Args, ValueEnum};

/// Font sizes accepted by `--font`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FontSizeArg {
    Footnote,
    Large,
    Normal,
    Huge,
}

impl From<FontSizeArg> for FontSize {
    fn from(value: FontSizeArg) -> FontSize {
        match value {
            FontSizeArg::Footnote => FontSize::Footnote,
            FontSizeArg::Large => FontSize::Large,
            FontSizeArg::Normal => FontSize::Normal,
            FontSizeArg::Huge => FontSize::Huge,
        }
    }
}

/// Grid and styling flags. Unset flags fall back to `--config`, then to
/// the CLI defaults.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// JSON file with a card configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Grid size in x [default: 3].
    #[arg(short = 'x')]
    pub x: Option<usize>,
    /// Grid size in y [default: 3].
    #[arg(short = 'y')]
    pub y: Option<usize>,
    /// Cell size in cm [default: 3.3].
    #[arg(long = "cellsize", visible_alias = "cs")]
    pub cell_size: Option<f64>,
    /// Vertical space above the grid in mm [default: 20].
    #[arg(long = "vspace", visible_alias = "vs")]
    pub vspace: Option<f64>,
    /// Cell text padding in cm [default: 0].
    #[arg(short = 'p', long)]
    pub padding: Option<f64>,
    /// Title text.
    #[arg(short = 't', long, num_args = 1..)]
    pub title: Vec<String>,
    /// Font size of the labels [default: large].
    #[arg(long, value_enum)]
    pub font: Option<FontSizeArg>,
    /// Apply rounded corners.
    #[arg(short = 'r', long)]
    pub rounded: bool,
    /// Apply bold font.
    #[arg(short = 'b', long)]
    pub bold: bool,
    /// Turn off centering.
    #[arg(short = 'c', long = "no-centering")]
    pub no_centering: bool,
    /// TikZ border style [default: thick].
    #[arg(short = 's', long)]
    pub style: Option<String>,
    /// Filler text for empty squares.
    #[arg(short = 'f', long)]
    pub filler: Option<String>,
    /// Drop the trailing newline from every label read from the file.
    #[arg(long)]
    pub strip_newlines: bool,
}

impl LayoutArgs {
    /// Layer explicit flags on top of `base`.
    pub fn apply(&self, mut base: CardConfig) -> CardConfig {
        if let Some(x) = self.x {
            base.x = x;
        }
        if let Some(y) = self.y {
            base.y = y;
        }
        if let Some(cell_size) = self.cell_size {
            base.cell_size = cell_size;
        }
        if let Some(vspace) = self.vspace {
            base.vspace = vspace;
        }
        if let Some(padding) = self.padding {
            base.padding = padding;
        }
        if !self.title.is_empty() {
            base.title = Some(self.title.join(" "));
        }
        if let Some(font) = self.font {
            base.font_size = FontSize::from(font).key().to_string();
        }
        if let Some(style) = &self.style {
            base.style = style.clone();
        }
        if let Some(filler) = &self.filler {
            base.filler = filler.clone();
        }
        base.rounded |= self.rounded;
        base.bold |= self.bold;
        if self.no_centering {
            base.centering = false;
        }
        base
    }
}

/// Output naming and artifact retention flags.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// File name of the .tex output (batches number it as NAME-0.tex, NAME-1.tex, ...).
    #[arg(short = 'o', long = "output", visible_alias = "fn", default_value = "bingo.tex")]
    pub output: PathBuf,
    /// Don't keep the .tex and .log files.
    #[arg(long)]
    pub nosave: bool,
    /// Don't compile PDF files.
    #[arg(long)]
    pub nopdf: bool,
    /// LaTeX compiler to invoke.
    #[arg(long, default_value = "pdflatex")]
    pub pdflatex: String,
}

impl OutputArgs {
    pub fn artifacts(&self) -> ArtifactOptions {
        ArtifactOptions {
            compile: !self.nopdf,
            keep_source: !self.nosave,
            keep_log: !self.nosave,
        }
    }
}

/// Defaults used by the command line when no `--config` is given.
pub fn cli_defaults() -> CardConfig {
    CardConfig {
        cell_size: 3.3,
        bold: false,
        ..CardConfig::default()
    }
}
