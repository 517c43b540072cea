//! Binary crate for the `weatherbar` status widget.
//!
//! This crate focuses on:
//! - The argument-free CLI surface
//! - Orchestrating probe, fetch and glyph lookup
//! - The one-line stdout contract and process exit codes

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr only; stdout belongs to the status bar.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
