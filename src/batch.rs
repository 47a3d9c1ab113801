//! Writing cards to disk, compiling them and cleaning up intermediate files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::card::CardGenerator;
use crate::compile::Compiler;

/// `<dir>/<base><index>.tex`, the source path of one card in a batch.
pub fn indexed_source(dir: &Path, base: &str, index: usize) -> PathBuf {
    dir.join(format!("{base}{index}.tex"))
}

/// Which artifacts to produce and which to keep afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactOptions {
    pub compile: bool,
    pub keep_source: bool,
    pub keep_log: bool,
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self {
            compile: true,
            keep_source: true,
            keep_log: false,
        }
    }
}

/// Naming and cleanup policy for [`generate_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub dir: PathBuf,
    pub base: String,
    pub artifacts: ArtifactOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            base: "bingo-".to_string(),
            artifacts: ArtifactOptions::default(),
        }
    }
}

impl BatchOptions {
    /// Derive directory and base name from a single-card output path:
    /// `out/bingo.tex` numbers cards as `out/bingo-0.tex`, `out/bingo-1.tex`, ...
    pub fn from_output(output: &Path, artifacts: ArtifactOptions) -> Self {
        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bingo".to_string());
        Self {
            dir,
            base: format!("{stem}-"),
            artifacts,
        }
    }
}

/// What one card left behind on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOutput {
    pub source: PathBuf,
    pub source_kept: bool,
    /// Compiled document, as reported by the compiler.
    pub pdf: Option<PathBuf>,
    /// Compiler log, when one was produced and kept.
    pub log: Option<PathBuf>,
    /// SHA-256 of the rendered document.
    pub digest: String,
}

impl CardOutput {
    pub fn pdf(&self) -> Option<&Path> {
        self.pdf.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub index: usize,
    pub output: CardOutput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Pairs of card indices whose documents came out identical.
    pub fn duplicates(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (pos, a) in self.items.iter().enumerate() {
            for b in &self.items[pos + 1..] {
                if a.output.digest == b.output.digest {
                    pairs.push((a.index, b.index));
                }
            }
        }
        pairs
    }
}

/// Render the current label order to `source` without shuffling.
pub fn write_card(
    generator: &CardGenerator,
    source: &Path,
    options: ArtifactOptions,
    compiler: &dyn Compiler,
) -> Result<CardOutput> {
    emit(generator, source, options, compiler)
}

/// Produce `count` cards, reshuffling the label pool before each one.
///
/// The first failure aborts the batch; files written by earlier
/// iterations are left in place.
pub fn generate_batch<R: Rng + ?Sized>(
    generator: &mut CardGenerator,
    count: usize,
    options: &BatchOptions,
    compiler: &dyn Compiler,
    rng: &mut R,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for index in 0..count {
        generator.shuffle_labels(rng);
        let source = indexed_source(&options.dir, &options.base, index);
        let output = emit(generator, &source, options.artifacts, compiler)
            .with_context(|| format!("card {index} of {count} failed"))?;
        report.items.push(BatchItem { index, output });
    }
    Ok(report)
}

fn emit(
    generator: &CardGenerator,
    source: &Path,
    options: ArtifactOptions,
    compiler: &dyn Compiler,
) -> Result<CardOutput> {
    let document = generator.render_document();
    let digest = format!("{:02x}", Sha256::digest(document.as_bytes()));
    fs::write(source, &document)
        .with_context(|| format!("failed to write {}", source.display()))?;

    let mut pdf = None;
    let mut log = None;
    if options.compile {
        let artifact = compiler
            .compile(source)
            .with_context(|| format!("{} failed on {}", compiler.name(), source.display()))?;
        if options.keep_log {
            log = Some(artifact.log);
        } else {
            remove_log(&artifact.log)?;
        }
        pdf = Some(artifact.pdf);
    }
    if !options.keep_source {
        fs::remove_file(source)
            .with_context(|| format!("failed to remove {}", source.display()))?;
    }

    Ok(CardOutput {
        source: source.to_path_buf(),
        source_kept: options.keep_source,
        pdf,
        log,
        digest,
    })
}

// Not every compiler leaves a log behind, so a missing one is fine.
fn remove_log(log: &Path) -> Result<()> {
    match fs::remove_file(log) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => {
            Err(err).with_context(|| format!("failed to remove {}", log.display()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_becomes_numbered_base() {
        let opts = BatchOptions::from_output(Path::new("out/cards.tex"), ArtifactOptions::default());
        assert_eq!(opts.dir, PathBuf::from("out"));
        assert_eq!(opts.base, "cards-");
        assert_eq!(
            indexed_source(&opts.dir, &opts.base, 2),
            PathBuf::from("out/cards-2.tex")
        );
    }

    #[test]
    fn bare_file_name_numbers_in_current_dir() {
        let opts = BatchOptions::from_output(Path::new("bingo.tex"), ArtifactOptions::default());
        assert_eq!(opts.dir, PathBuf::from("."));
        assert_eq!(opts.base, "bingo-");
    }
}
