//! Error types for surfrank

use thiserror::Error;

/// Result type alias using SurfRankError
pub type Result<T> = std::result::Result<T, SurfRankError>;

/// Error type alias for convenience
pub type Error = SurfRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum SurfRankError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Page not found in corpus: {0}")]
    UnknownPage(String),

    #[error("Iteration did not converge after {iterations} sweeps (last delta {delta:e})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SurfRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownPage(_) => exit_codes::NOT_FOUND,
            Self::InvalidConfiguration(_) | Self::EmptyCorpus | Self::Yaml(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
