//! JSON output formatter

use super::{link_rows, Method, RankSection};
use surfrank_core::Graph;

pub fn format_rankings(sections: &[RankSection<'_>]) -> String {
    let output: Vec<serde_json::Value> = sections
        .iter()
        .map(|s| {
            let mut value = serde_json::json!({
                "method": s.method.as_str(),
                "scores": s.distribution,
            });
            if let Method::Sampling { samples } = s.method {
                value["samples"] = serde_json::json!(samples);
            }
            value
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}

pub fn format_links(graph: &Graph) -> String {
    let output: serde_json::Map<String, serde_json::Value> = link_rows(graph)
        .map(|(page, links)| (page.to_string(), serde_json::json!(links)))
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
