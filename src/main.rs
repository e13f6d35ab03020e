//! Song Catalog service entry point.

use clap::Parser;
use song_catalog::cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("song_catalog=info".parse()?))
        .init();

    cli::run_command(&args)
}
