//! Ranking command handlers

use super::resolve_config;
use crate::app::{OutputFormat, RankArgs};
use crate::crawl::crawl;
use crate::output::{format_rankings, Method, RankSection};
use anyhow::Result;
use std::path::Path;
use surfrank_core::{Distribution, Graph, IterativeRanker, RankConfig, SamplingRanker};

/// Run both engines and print sampling results followed by iteration results
pub fn run(args: RankArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = resolve_config(config_path, &args)?;
    let graph = crawl(&args.corpus)?;

    let sampled = sample(&graph, &config)?;
    let iterated = iterate(&graph, &config)?;

    print!(
        "{}",
        format_rankings(
            &[
                RankSection {
                    method: Method::Sampling {
                        samples: config.samples
                    },
                    distribution: &sampled,
                },
                RankSection {
                    method: Method::Iteration,
                    distribution: &iterated,
                },
            ],
            format,
        )
    );
    Ok(())
}

/// Sampling engine only
pub fn run_sample(args: RankArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = resolve_config(config_path, &args)?;
    let graph = crawl(&args.corpus)?;
    let sampled = sample(&graph, &config)?;

    print!(
        "{}",
        format_rankings(
            &[RankSection {
                method: Method::Sampling {
                    samples: config.samples
                },
                distribution: &sampled,
            }],
            format,
        )
    );
    Ok(())
}

/// Iterative engine only
pub fn run_iterate(args: RankArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = resolve_config(config_path, &args)?;
    let graph = crawl(&args.corpus)?;
    let iterated = iterate(&graph, &config)?;

    print!(
        "{}",
        format_rankings(
            &[RankSection {
                method: Method::Iteration,
                distribution: &iterated,
            }],
            format,
        )
    );
    Ok(())
}

fn sample(graph: &Graph, config: &RankConfig) -> Result<Distribution> {
    let ranker = SamplingRanker::from_config(config);
    let distribution = match config.seed {
        Some(seed) => ranker.run_seeded(graph, seed)?,
        None => ranker.run_from_entropy(graph)?,
    };
    Ok(distribution)
}

fn iterate(graph: &Graph, config: &RankConfig) -> Result<Distribution> {
    let report = IterativeRanker::from_config(config).run(graph)?;
    tracing::info!(
        "Iteration finished in {} sweeps (final max change {:e})",
        report.iterations,
        report.delta
    );
    Ok(report.distribution)
}
