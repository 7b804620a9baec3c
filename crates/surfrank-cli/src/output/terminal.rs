//! Terminal output formatter

use super::{link_rows, Method, RankSection};
use surfrank_core::Graph;

pub fn format_rankings(sections: &[RankSection<'_>]) -> String {
    let mut output = String::new();

    for section in sections {
        match section.method {
            Method::Sampling { samples } => output.push_str(&format!(
                "PageRank Results from Sampling (n = {})\n",
                samples
            )),
            Method::Iteration => output.push_str("PageRank Results from Iteration\n"),
        }

        for (page, score) in section.distribution.iter() {
            output.push_str(&format!("  {}: {:.4}\n", page, score));
        }
    }

    output
}

pub fn format_links(graph: &Graph) -> String {
    let mut output = String::new();

    for (page, links) in link_rows(graph) {
        if links.is_empty() {
            output.push_str(&format!("{} -> (none)\n", page));
        } else {
            output.push_str(&format!("{} -> {}\n", page, links.join(", ")));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfrank_core::iterate;

    #[test]
    fn test_four_decimal_rows_sorted_by_page() {
        let graph = Graph::from_links([("b", vec!["a"]), ("a", vec!["b"])]);
        let dist = iterate(&graph, 0.85).unwrap();
        let output = format_rankings(&[RankSection {
            method: Method::Iteration,
            distribution: &dist,
        }]);

        assert_eq!(
            output,
            "PageRank Results from Iteration\n  a: 0.5000\n  b: 0.5000\n"
        );
    }

    #[test]
    fn test_links() {
        let graph = Graph::from_links([("a", vec!["b", "c"]), ("b", vec![]), ("c", vec!["a"])]);
        assert_eq!(
            format_links(&graph),
            "a -> b, c\nb -> (none)\nc -> a\n"
        );
    }
}
