//! Configuration management

use crate::error::{Result, SurfRankError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of sampled transitions
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default convergence threshold for power iteration
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Default safety cap on power-iteration sweeps
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Ranking configuration shared by both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a real link instead of jumping uniformly
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of transitions recorded by the sampling engine
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Maximum per-page change at which iteration stops
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Safety cap on iteration sweeps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the sampling engine (unseeded when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

impl RankConfig {
    /// Load config from default path, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate config from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every field against the ranges the engines accept
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_samples(self.samples)?;
        validate_threshold(self.threshold)?;
        validate_max_iterations(self.max_iterations)?;
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(SurfRankError::InvalidConfiguration(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

pub(crate) fn validate_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(SurfRankError::InvalidConfiguration(
            "sample count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(SurfRankError::InvalidConfiguration(format!(
            "convergence threshold must be positive, got {}",
            threshold
        )))
    }
}

pub(crate) fn validate_max_iterations(max_iterations: usize) -> Result<()> {
    if max_iterations == 0 {
        return Err(SurfRankError::InvalidConfiguration(
            "iteration cap must be at least 1".to_string(),
        ));
    }
    Ok(())
}
