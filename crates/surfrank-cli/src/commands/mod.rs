//! CLI command handlers

pub mod links;
pub mod rank;

use crate::app::RankArgs;
use anyhow::Result;
use std::path::Path;
use surfrank_core::RankConfig;

/// Merge defaults, the config file, and command-line overrides, in that order
pub fn resolve_config(config_path: Option<&Path>, args: &RankArgs) -> Result<RankConfig> {
    let mut config = match config_path {
        Some(path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    };

    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn args() -> RankArgs {
        RankArgs {
            corpus: PathBuf::from("corpus"),
            damping: None,
            samples: None,
            threshold: None,
            max_iterations: None,
            seed: None,
        }
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "damping: 0.7\nsamples: 500").unwrap();

        let config = resolve_config(
            Some(file.path()),
            &RankArgs {
                samples: Some(42),
                seed: Some(3),
                ..args()
            },
        )
        .unwrap();

        assert_eq!(config.damping, 0.7);
        assert_eq!(config.samples, 42);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "samples: 10").unwrap();

        let err = resolve_config(
            Some(file.path()),
            &RankArgs {
                damping: Some(1.2),
                ..args()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("damping"));
    }
}
