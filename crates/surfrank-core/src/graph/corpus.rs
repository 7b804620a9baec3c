//! Immutable adjacency structure over page identifiers
//!
//! Pages are kept in sorted order and addressed internally by position, so every
//! traversal of the graph visits pages in the same order from run to run.

use super::builder::GraphBuilder;
use std::collections::HashMap;

/// Opaque, corpus-unique page identifier (e.g. a document file name)
pub type Page = String;

/// A directed link graph over a fixed corpus of pages
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pages: Vec<Page>,
    index: HashMap<Page, usize>,
    /// Outgoing links per page, sorted by target position
    outbound: Vec<Vec<usize>>,
    /// Incoming links per page, sorted by source position
    inbound: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from `(page, targets)` pairs
    ///
    /// Every key becomes a corpus page. Targets that are not themselves keys,
    /// and links from a page to itself, are dropped.
    pub fn from_links<I, P, T, S>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = GraphBuilder::new();
        for (page, targets) in links {
            let page = page.into();
            builder.add_page(page.clone());
            for target in targets {
                builder.add_link(page.clone(), target);
            }
        }
        builder.build()
    }

    /// Assemble from sorted pages and per-page outbound positions
    pub(crate) fn from_parts(pages: Vec<Page>, outbound: Vec<Vec<usize>>) -> Self {
        let index = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.clone(), i))
            .collect();

        let mut inbound = vec![Vec::new(); pages.len()];
        for (source, targets) in outbound.iter().enumerate() {
            for &target in targets {
                inbound[target].push(source);
            }
        }

        Self {
            pages,
            index,
            outbound,
            inbound,
        }
    }

    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages, sorted by identifier
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Pages linked from `page`, sorted, or `None` if `page` is not in the corpus
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let idx = self.position(page)?;
        Some(
            self.outbound[idx]
                .iter()
                .map(|&target| self.pages[target].as_str())
                .collect(),
        )
    }

    /// Number of outgoing links from `page`
    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.position(page).map(|idx| self.outbound[idx].len())
    }

    /// Whether `page` has no outgoing links
    pub fn is_dangling(&self, page: &str) -> Option<bool> {
        self.out_degree(page).map(|degree| degree == 0)
    }

    /// Total number of links in the graph
    pub fn edge_count(&self) -> usize {
        self.outbound.iter().map(Vec::len).sum()
    }

    pub(crate) fn position(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub(crate) fn outbound_at(&self, idx: usize) -> &[usize] {
        &self.outbound[idx]
    }

    pub(crate) fn inbound_at(&self, idx: usize) -> &[usize] {
        &self.inbound[idx]
    }

    /// Positions of pages with no outgoing links
    pub(crate) fn dangling_positions(&self) -> Vec<usize> {
        self.outbound
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }
}
