//! Probability distribution over the pages of a corpus

use crate::graph::{Graph, Page};
use serde::Serialize;
use std::collections::BTreeMap;

/// Score for every page in a corpus, iterated in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    scores: BTreeMap<Page, f64>,
}

impl Distribution {
    /// Pair the graph's pages with a score vector in page order
    pub(crate) fn from_positions(graph: &Graph, values: Vec<f64>) -> Self {
        debug_assert_eq!(graph.len(), values.len());
        let scores = graph.pages().iter().cloned().zip(values).collect();
        Self { scores }
    }

    /// Score of a page, if it is in the corpus
    pub fn get(&self, page: &str) -> Option<f64> {
        self.scores.get(page).copied()
    }

    /// Pages and scores, sorted by page
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores.iter().map(|(page, &score)| (page.as_str(), score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Pages ordered by descending score, ties broken by page
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Largest absolute per-page difference against another distribution
    ///
    /// Pages missing from either side count as a score of zero.
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.scores
            .keys()
            .chain(other.scores.keys())
            .map(|page| {
                let a = self.get(page).unwrap_or(0.0);
                let b = other.get(page).unwrap_or(0.0);
                (a - b).abs()
            })
            .fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a str, f64);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
