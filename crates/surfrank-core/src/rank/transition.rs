//! One-step transition probabilities of the random surfer

use super::distribution::Distribution;
use crate::config::validate_damping;
use crate::error::{Result, SurfRankError};
use crate::graph::Graph;

/// Distribution over the page visited after `page`
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly; otherwise it jumps to any page in the corpus. A page
/// with no links jumps uniformly with probability 1.
pub fn transition(graph: &Graph, page: &str, damping: f64) -> Result<Distribution> {
    validate_damping(damping)?;
    let idx = graph
        .position(page)
        .ok_or_else(|| SurfRankError::UnknownPage(page.to_string()))?;
    Ok(Distribution::from_positions(
        graph,
        transition_row(graph, idx, damping),
    ))
}

/// Transition probabilities from the page at `idx`, in page order
pub(crate) fn transition_row(graph: &Graph, idx: usize, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let links = graph.outbound_at(idx);

    if links.is_empty() {
        return vec![1.0 / n; graph.len()];
    }

    let mut row = vec![(1.0 - damping) / n; graph.len()];
    let link_share = damping / links.len() as f64;
    for &target in links {
        row[target] += link_share;
    }
    row
}
