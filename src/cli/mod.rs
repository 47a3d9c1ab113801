//! Command-line interface wiring for the `bingo` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! one submodule per command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod batch;
pub mod card;
pub mod common;
pub mod demo;
pub mod fonts;
pub mod utils;

/// Parsed CLI entrypoint for the `bingo` binary.
#[derive(Parser, Debug)]
#[command(name = "bingo", version, about = "Generate bingo cards as LaTeX files and/or PDFs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one card with the labels in file order.
    Card(card::CardArgs),
    /// Write several cards, each with a fresh shuffle of the labels.
    Batch(batch::BatchArgs),
    /// List the font sizes accepted by `--font`.
    Fonts,
    /// Generate two sample 4x4 cards.
    Demo(demo::DemoArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Card(args) => card::handle(args),
        Command::Batch(args) => batch::handle(args),
        Command::Fonts => fonts::handle(),
        Command::Demo(args) => demo::handle(args),
    }
}
