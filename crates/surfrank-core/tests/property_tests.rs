//! Property-based tests for the ranking engines.
//!
//! These hold for any corpus and any damping factor in (0, 1):
//! - transition rows are probability distributions
//! - both engines return a score for every page, summing to one
//! - power iteration is deterministic
//! - seeded sampling is reproducible

use proptest::prelude::*;
use surfrank_core::{iterate, sample_seeded, transition, Graph, IterativeRanker};

/// Generate a corpus of 1..=10 pages with random links (self-links included,
/// the graph drops them)
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=10)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
        .prop_map(|(n, edges)| {
            let links = (0..n).map(|page| {
                let targets: Vec<String> = edges
                    .iter()
                    .filter(|(from, _)| *from == page)
                    .map(|(_, to)| format!("p{}", to))
                    .collect();
                (format!("p{}", page), targets)
            });
            Graph::from_links(links)
        })
}

fn arb_damping() -> impl Strategy<Value = f64> {
    0.05f64..0.95f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transition_rows_are_distributions(graph in arb_graph(), damping in arb_damping()) {
        let n = graph.len() as f64;
        for page in graph.pages() {
            let dist = transition(&graph, page, damping).unwrap();
            prop_assert_eq!(dist.len(), graph.len());
            prop_assert!((dist.total() - 1.0).abs() < 1e-9);

            let degree = graph.out_degree(page).unwrap();
            let links = graph.links(page).unwrap();
            for (target, p) in dist.iter() {
                let expected = if degree == 0 {
                    1.0 / n
                } else if links.contains(&target) {
                    (1.0 - damping) / n + damping / degree as f64
                } else {
                    (1.0 - damping) / n
                };
                prop_assert!((p - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn iterate_sums_to_one(graph in arb_graph(), damping in arb_damping()) {
        let dist = iterate(&graph, damping).unwrap();
        prop_assert_eq!(dist.len(), graph.len());
        prop_assert!((dist.total() - 1.0).abs() < 1e-6);
        prop_assert!(dist.iter().all(|(_, score)| score > 0.0));
    }

    #[test]
    fn iterate_is_deterministic(graph in arb_graph(), damping in arb_damping()) {
        let ranker = IterativeRanker::new().with_damping(damping);
        let a = ranker.run(&graph).unwrap();
        let b = ranker.run(&graph).unwrap();
        prop_assert_eq!(a.iterations, b.iterations);
        prop_assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn sample_sums_to_one(
        graph in arb_graph(),
        damping in arb_damping(),
        n in 1usize..2_000,
        seed in any::<u64>(),
    ) {
        let dist = sample_seeded(&graph, damping, n, seed).unwrap();
        prop_assert_eq!(dist.len(), graph.len());
        prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        prop_assert!(dist.iter().all(|(_, score)| score >= 0.0));
    }

    #[test]
    fn seeded_sampling_is_reproducible(
        graph in arb_graph(),
        damping in arb_damping(),
        seed in any::<u64>(),
    ) {
        let a = sample_seeded(&graph, damping, 300, seed).unwrap();
        let b = sample_seeded(&graph, damping, 300, seed).unwrap();
        prop_assert_eq!(a, b);
    }
}
