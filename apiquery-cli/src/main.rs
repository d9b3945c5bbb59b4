//! Binary crate for the `apiquery` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Validating menu input
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod input;
mod logging;
mod menu;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init_logger(cmd.verbose);
    cmd.run().await
}
