//! CSV output formatter

use super::{link_rows, RankSection};
use surfrank_core::Graph;

pub fn format_rankings(sections: &[RankSection<'_>]) -> String {
    let mut output = String::from("method,page,score\n");

    for section in sections {
        for (page, score) in section.distribution.iter() {
            output.push_str(&format!(
                "{},{},{:.6}\n",
                section.method.as_str(),
                escape_csv(page),
                score
            ));
        }
    }

    output
}

pub fn format_links(graph: &Graph) -> String {
    let mut output = String::from("source,target\n");

    for (page, links) in link_rows(graph) {
        for link in links {
            output.push_str(&format!("{},{}\n", escape_csv(page), escape_csv(link)));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain.html"), "plain.html");
        assert_eq!(escape_csv("a,b.html"), "\"a,b.html\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_links_rows() {
        let graph = Graph::from_links([("a", vec!["b", "c"]), ("b", vec![]), ("c", vec![])]);
        assert_eq!(format_links(&graph), "source,target\na,b\na,c\n");
    }
}
