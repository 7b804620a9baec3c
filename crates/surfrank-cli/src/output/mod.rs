//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use surfrank_core::{Distribution, Graph};

/// Which engine produced a set of scores
#[derive(Clone, Copy)]
pub enum Method {
    Sampling { samples: usize },
    Iteration,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Sampling { .. } => "sampling",
            Method::Iteration => "iteration",
        }
    }
}

/// Scores from one engine run
pub struct RankSection<'a> {
    pub method: Method,
    pub distribution: &'a Distribution,
}

/// Format ranking results
pub fn format_rankings(sections: &[RankSection<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_rankings(sections),
        OutputFormat::Csv => csv::format_rankings(sections),
        OutputFormat::Cli => terminal::format_rankings(sections),
    }
}

/// Format an extracted link graph
pub fn format_links(graph: &Graph, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_links(graph),
        OutputFormat::Csv => csv::format_links(graph),
        OutputFormat::Cli => terminal::format_links(graph),
    }
}

/// Each page with its sorted link targets
fn link_rows(graph: &Graph) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
    graph
        .pages()
        .iter()
        .map(move |page| (page.as_str(), graph.links(page).unwrap_or_default()))
}
