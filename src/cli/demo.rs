//! Built-in sample batch (`bingo demo`).

use anyhow::{Context, Result};
use bingocard::{BatchOptions, CardConfig, CardGenerator, DEMO_LABELS, PdfLatex, generate_batch};
use clap::Args;

use crate::cli::common::OutputArgs;
use crate::cli::utils::{make_rng, print_report};

/// Arguments for `bingo demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Seed for reproducible shuffles.
    #[arg(long)]
    pub seed: Option<u64>,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Two shuffled 4x4 cards from the sample labels.
pub fn handle(args: DemoArgs) -> Result<()> {
    let config = CardConfig {
        x: 4,
        y: 4,
        title: Some("TEST TITLE".to_string()),
        ..CardConfig::default()
    };
    let mut generator =
        CardGenerator::new(DEMO_LABELS, &config).context("invalid demo configuration")?;
    let mut artifacts = args.output.artifacts();
    artifacts.keep_log = false;
    let options = BatchOptions::from_output(&args.output.output, artifacts);
    let compiler = PdfLatex::with_program(args.output.pdflatex.as_str());
    let mut rng = make_rng(args.seed);

    let report = generate_batch(&mut generator, 2, &options, &compiler, &mut rng)?;
    print_report(&report);
    Ok(())
}
