//! Power-iteration PageRank
//!
//! Applies the PageRank recurrence to every page at once until no page's
//! score moves by more than the threshold between sweeps. Rank held by
//! dangling pages is spread uniformly over the corpus, matching the
//! transition model's jump rule for pages without links.

use super::distribution::Distribution;
use crate::config::{validate_damping, validate_max_iterations, validate_threshold, RankConfig};
use crate::error::{Result, SurfRankError};
use crate::graph::Graph;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Iterative engine settings
#[derive(Debug, Clone)]
pub struct IterativeRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum per-page change at which iteration stops
    pub threshold: f64,
    /// Safety cap on sweeps
    pub max_iterations: usize,
}

/// Converged scores plus how the run got there
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub distribution: Distribution,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Maximum per-page change in the final sweep
    pub delta: f64,
}

impl Default for IterativeRanker {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl IterativeRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            threshold: config.threshold,
            max_iterations: config.max_iterations,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Iterate to convergence
    ///
    /// Fails with [`SurfRankError::NotConverged`] if the cap is reached first.
    pub fn run(&self, graph: &Graph) -> Result<IterationReport> {
        validate_damping(self.damping)?;
        validate_threshold(self.threshold)?;
        validate_max_iterations(self.max_iterations)?;
        if graph.is_empty() {
            return Err(SurfRankError::EmptyCorpus);
        }

        let n = graph.len() as f64;
        let dangling = graph.dangling_positions();
        let mut ranks = vec![1.0 / n; graph.len()];
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            let mut next = self.sweep(graph, &ranks, &dangling);
            normalize(&mut next);

            delta = ranks
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);
            ranks = next;

            tracing::debug!("Iteration {}: max change {:e}", iteration, delta);

            if delta <= self.threshold {
                tracing::info!(
                    "Converged after {} iterations over {} pages",
                    iteration,
                    graph.len()
                );
                return Ok(IterationReport {
                    distribution: Distribution::from_positions(graph, ranks),
                    iterations: iteration,
                    delta,
                });
            }
        }

        Err(SurfRankError::NotConverged {
            iterations: self.max_iterations,
            delta,
        })
    }

    /// One application of the recurrence; every page reads only `ranks`
    fn sweep(&self, graph: &Graph, ranks: &[f64], dangling: &[usize]) -> Vec<f64> {
        let n = graph.len() as f64;
        let jump = (1.0 - self.damping) / n;
        let dangling_share: f64 = dangling.iter().map(|&q| ranks[q]).sum::<f64>() / n;

        let update = |page: usize| -> f64 {
            let incoming: f64 = graph
                .inbound_at(page)
                .iter()
                .map(|&q| ranks[q] / graph.outbound_at(q).len() as f64)
                .sum();
            jump + self.damping * (incoming + dangling_share)
        };

        #[cfg(feature = "parallel")]
        let next: Vec<f64> = (0..graph.len()).into_par_iter().map(update).collect();
        #[cfg(not(feature = "parallel"))]
        let next: Vec<f64> = (0..graph.len()).map(update).collect();

        next
    }
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}

/// PageRank by power iteration with the default threshold and cap
pub fn iterate(graph: &Graph, damping: f64) -> Result<Distribution> {
    IterativeRanker::new()
        .with_damping(damping)
        .run(graph)
        .map(|report| report.distribution)
}
