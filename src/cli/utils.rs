//! Convenience helpers shared across command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use bingocard::{BatchReport, CardConfig, CardGenerator, LineEndings, read_labels};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::common::{LayoutArgs, cli_defaults};

/// Resolve the effective card configuration: defaults, then `--config`, then flags.
pub fn resolve_config(layout: &LayoutArgs) -> Result<CardConfig> {
    let base = match &layout.config {
        Some(path) => CardConfig::load(path)?,
        None => cli_defaults(),
    };
    Ok(layout.apply(base))
}

/// Read the label file and build a validated generator from it.
pub fn load_generator(labels: &Path, layout: &LayoutArgs) -> Result<(CardGenerator, CardConfig)> {
    let endings = if layout.strip_newlines {
        LineEndings::Strip
    } else {
        LineEndings::Keep
    };
    let labels = read_labels(labels, endings)?;
    let config = resolve_config(layout)?;
    let generator = CardGenerator::new(labels, &config).context("invalid card configuration")?;
    Ok((generator, config))
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Print one line per card plus a summary.
pub fn print_report(report: &BatchReport) {
    for item in &report.items {
        let out = &item.output;
        let mut line = format!("card {:>3}: ", item.index);
        if out.source_kept {
            line.push_str(&out.source.display().to_string());
        } else {
            line.push_str("(source removed)");
        }
        if let Some(pdf) = out.pdf() {
            line.push_str(&format!(" -> {}", pdf.display()));
        }
        println!("{}", line);
    }
    println!("Generated {} card(s)", report.items.len());
    for (a, b) in report.duplicates() {
        println!("warning: cards {} and {} are identical", a, b);
    }
}
