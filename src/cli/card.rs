//! Single card generation (`bingo card ...`).

use std::path::PathBuf;

use anyhow::Result;
use bingocard::{Compiler, PdfLatex, write_card};
use clap::Args;

use crate::cli::common::{LayoutArgs, OutputArgs};
use crate::cli::utils::load_generator;

/// Arguments for `bingo card`.
#[derive(Args, Debug)]
pub struct CardArgs {
    /// Label file, one label per line.
    pub labels: PathBuf,
    #[command(flatten)]
    pub layout: LayoutArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Write one card in file order, compiling it unless `--nopdf` is set.
pub fn handle(args: CardArgs) -> Result<()> {
    let (generator, _) = load_generator(&args.labels, &args.layout)?;
    let compiler = PdfLatex::with_program(args.output.pdflatex.as_str());
    let out = write_card(
        &generator,
        &args.output.output,
        args.output.artifacts(),
        &compiler,
    )?;
    if out.source_kept {
        println!("Wrote {}", out.source.display());
    }
    if let Some(pdf) = out.pdf() {
        println!("Compiled {} with {}", pdf.display(), compiler.name());
    }
    Ok(())
}
