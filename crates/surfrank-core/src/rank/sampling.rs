//! Monte Carlo PageRank
//!
//! Walks the random surfer through the corpus for a fixed number of
//! transitions and reports how often each page was visited. The estimate
//! converges to the stationary distribution as the number of samples grows.

use super::distribution::Distribution;
use super::transition::transition_row;
use crate::config::{validate_damping, validate_samples, RankConfig};
use crate::error::{Result, SurfRankError};
use crate::graph::Graph;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling engine settings
#[derive(Debug, Clone)]
pub struct SamplingRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of transitions to record
    pub samples: usize,
}

impl Default for SamplingRanker {
    fn default() -> Self {
        let config = RankConfig::default();
        Self {
            damping: config.damping,
            samples: config.samples,
        }
    }
}

impl SamplingRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            samples: config.samples,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Run the walk with a caller-supplied random source
    pub fn run<R: Rng + ?Sized>(&self, graph: &Graph, rng: &mut R) -> Result<Distribution> {
        validate_damping(self.damping)?;
        validate_samples(self.samples)?;
        if graph.is_empty() {
            return Err(SurfRankError::EmptyCorpus);
        }

        let mut visits = vec![0usize; graph.len()];
        // Rows depend only on the page, so each is built at most once per run
        let mut choosers: Vec<Option<WeightedIndex<f64>>> = vec![None; graph.len()];
        let mut current = rng.gen_range(0..graph.len());

        for _ in 0..self.samples {
            let chooser = match &mut choosers[current] {
                Some(chooser) => chooser,
                slot => slot.insert(
                    WeightedIndex::new(transition_row(graph, current, self.damping))
                        .map_err(|e| SurfRankError::Sampling(e.to_string()))?,
                ),
            };
            current = chooser.sample(rng);
            visits[current] += 1;
        }

        let total = self.samples as f64;
        let scores = visits.into_iter().map(|count| count as f64 / total).collect();

        tracing::info!(
            "Sampled {} transitions over {} pages",
            self.samples,
            graph.len()
        );
        Ok(Distribution::from_positions(graph, scores))
    }

    /// Run the walk with a `StdRng` seeded from `seed`
    pub fn run_seeded(&self, graph: &Graph, seed: u64) -> Result<Distribution> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.run(graph, &mut rng)
    }

    /// Run the walk with the thread-local generator; results vary run to run
    pub fn run_from_entropy(&self, graph: &Graph) -> Result<Distribution> {
        self.run(graph, &mut rand::thread_rng())
    }
}

/// Estimate PageRank by sampling `n` surfer transitions drawn from `rng`
pub fn sample<R: Rng + ?Sized>(
    graph: &Graph,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<Distribution> {
    SamplingRanker::new()
        .with_damping(damping)
        .with_samples(n)
        .run(graph, rng)
}

/// Reproducible variant of [`sample`]
pub fn sample_seeded(graph: &Graph, damping: f64, n: usize, seed: u64) -> Result<Distribution> {
    SamplingRanker::new()
        .with_damping(damping)
        .with_samples(n)
        .run_seeded(graph, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cycle() -> Graph {
        Graph::from_links([("A", vec!["B"]), ("B", vec!["A"])])
    }

    #[test]
    fn test_sums_to_one() {
        let graph = Graph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ]);
        for n in [1, 7, 1000] {
            let dist = sample_seeded(&graph, 0.85, n, 3).unwrap();
            assert_eq!(dist.len(), 4);
            assert!((dist.total() - 1.0).abs() < 1e-9, "n = {}", n);
        }
    }

    #[test]
    fn test_two_cycle_converges_to_half() {
        let dist = sample_seeded(&two_cycle(), 0.85, 10_000, 42).unwrap();
        assert!((dist.get("A").unwrap() - 0.5).abs() < 0.01);
        assert!((dist.get("B").unwrap() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_same_seed_same_result() {
        let graph = two_cycle();
        let a = sample_seeded(&graph, 0.85, 500, 9).unwrap();
        let b = sample_seeded(&graph, 0.85, 500, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unvisited_pages_are_present() {
        // Single transition can only visit one page
        let graph = Graph::from_links([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        let dist = sample_seeded(&graph, 0.85, 1, 0).unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.iter().filter(|(_, s)| *s == 0.0).count(), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let graph = Graph::default();
        let err = sample_seeded(&graph, 0.85, 10, 1).unwrap_err();
        assert!(matches!(err, SurfRankError::EmptyCorpus));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let err = sample_seeded(&two_cycle(), 0.85, 0, 1).unwrap_err();
        assert!(matches!(err, SurfRankError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_accepts_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(5);
        let rng: &mut dyn rand::RngCore = &mut rng;
        let dist = sample(&two_cycle(), 0.5, 100, rng).unwrap();
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }
}
