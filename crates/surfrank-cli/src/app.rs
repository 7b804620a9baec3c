//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(
    author,
    version,
    about = "Rank a directory of HTML pages with the random-surfer PageRank model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML config file (defaults to the user config directory)
    #[arg(long, global = true, env = "SURFRANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank by sampling and by iteration
    Rank(RankArgs),

    /// Rank by sampling surfer transitions
    Sample(RankArgs),

    /// Rank by power iteration
    Iterate(RankArgs),

    /// Show the link graph extracted from a corpus
    Links(LinksArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Damping factor, in (0, 1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of sampled transitions
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold for iteration
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Safety cap on iteration sweeps
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
