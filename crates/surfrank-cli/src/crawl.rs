//! Link extraction from a directory of HTML pages

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use surfrank_core::{Graph, GraphBuilder};
use walkdir::WalkDir;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Build the link graph for every `.html` file directly inside `dir`
///
/// Pages are named by file name. Self-links and links to files outside the
/// corpus are left out.
pub fn crawl(dir: &Path) -> Result<Graph> {
    if !dir.is_dir() {
        bail!("Corpus directory not found: {}", dir.display());
    }

    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".html") {
            continue;
        }

        let content = std::fs::read_to_string(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        let mut links = extract_links(&content);
        links.remove(&name);
        pages.insert(name, links);
    }

    let mut builder = GraphBuilder::new();
    for (page, links) in &pages {
        builder.add_page(page.as_str());
        for link in links.iter().filter(|link| pages.contains_key(*link)) {
            builder.add_link(page.as_str(), link.as_str());
        }
    }

    let graph = builder.build();
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        graph.len(),
        graph.edge_count(),
        dir.display()
    );
    Ok(graph)
}

/// Distinct `href` targets of the anchor tags in `content`
pub fn extract_links(content: &str) -> BTreeSet<String> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}
