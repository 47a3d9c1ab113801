//! Randomized batch generation (`bingo batch ...`).

use std::path::PathBuf;

use anyhow::Result;
use bingocard::{BatchOptions, Manifest, PdfLatex, generate_batch};
use clap::Args;

use crate::cli::common::{LayoutArgs, OutputArgs};
use crate::cli::utils::{load_generator, make_rng, print_report};

/// Arguments for `bingo batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Label file, one label per line.
    pub labels: PathBuf,
    /// Number of random cards to make.
    #[arg(short = 'n', default_value_t = 3)]
    pub count: usize,
    /// Seed for reproducible shuffles.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write a JSON manifest of the generated cards.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
    #[command(flatten)]
    pub layout: LayoutArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn handle(args: BatchArgs) -> Result<()> {
    let (mut generator, config) = load_generator(&args.labels, &args.layout)?;
    let options = BatchOptions::from_output(&args.output.output, args.output.artifacts());
    let compiler = PdfLatex::with_program(args.output.pdflatex.as_str());
    let mut rng = make_rng(args.seed);

    let report = generate_batch(&mut generator, args.count, &options, &compiler, &mut rng)?;
    print_report(&report);

    if let Some(path) = &args.manifest {
        Manifest::new(&config, args.seed, &report).save(path)?;
        println!("Wrote manifest {}", path.display());
    }
    Ok(())
}
