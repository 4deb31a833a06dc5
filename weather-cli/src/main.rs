//! Binary crate for the `weather` terminal app.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - The interactive terminal view and the one-shot `show` output

use clap::Parser;

mod cli;
mod logging;
mod show;
mod tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
