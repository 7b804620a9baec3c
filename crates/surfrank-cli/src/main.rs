//! Surfrank CLI
//!
//! PageRank for a directory of linked HTML pages.

use anyhow::Result;
use clap::Parser;
use surfrank_core::error::exit_codes;
use surfrank_core::SurfRankError;

mod app;
mod commands;
mod crawl;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<SurfRankError>()
            .map(SurfRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, config, cli.format),
        Commands::Sample(args) => commands::rank::run_sample(args, config, cli.format),
        Commands::Iterate(args) => commands::rank::run_iterate(args, config, cli.format),
        Commands::Links(args) => commands::links::run(args, cli.format),
    }
}
