//! Incremental construction of a corpus graph

use super::corpus::Graph;
use std::collections::{BTreeMap, BTreeSet};

/// Mutable builder that collects pages and links before freezing them into a [`Graph`]
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl GraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page as a member of the corpus
    pub fn add_page(&mut self, page: impl Into<String>) -> &mut Self {
        self.links.entry(page.into()).or_default();
        self
    }

    /// Record a link from `from` to `to`
    ///
    /// `from` joins the corpus. `to` only counts as a link target if it is also
    /// registered as a page by the time [`GraphBuilder::build`] runs.
    pub fn add_link(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.links.entry(from.into()).or_default().insert(to.into());
        self
    }

    /// Freeze into an immutable graph
    ///
    /// Self-links and links to pages outside the corpus are dropped.
    pub fn build(self) -> Graph {
        let pages: Vec<String> = self.links.keys().cloned().collect();
        let mut outbound = Vec::with_capacity(pages.len());

        for (source, targets) in &self.links {
            let mut row = Vec::with_capacity(targets.len());
            for target in targets {
                if target == source {
                    tracing::warn!("Dropping self-link on {}", source);
                    continue;
                }
                // pages is sorted, same order as the BTreeMap keys
                match pages.binary_search(target) {
                    Ok(idx) => row.push(idx),
                    Err(_) => tracing::warn!(
                        "Dropping link {} -> {}: target is not in the corpus",
                        source,
                        target
                    ),
                }
            }
            outbound.push(row);
        }

        Graph::from_parts(pages, outbound)
    }
}
