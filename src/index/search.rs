//! Substring search over an indexed document.

use super::node::{NodeCollection, NodeId};
use super::path::{resolve_segments, Segment};
use serde::Serialize;

/// A node whose label matched a query, with its resolved path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(skip)]
    pub id: NodeId,
    pub path: String,
    pub source_line: usize,
    pub segments: Vec<Segment>,
}

impl Match {
    fn resolve(nodes: &NodeCollection, id: NodeId) -> Self {
        let segments = resolve_segments(nodes, id);
        Self {
            id,
            path: segments.iter().map(|s| s.text.as_str()).collect(),
            source_line: nodes[id].source_line,
            segments,
        }
    }
}

impl NodeCollection {
    /// Returns the ids of nodes whose label contains `query`, ignoring case.
    ///
    /// An empty query matches every node. Ids come back in creation order.
    pub fn matching(&self, query: &str) -> Vec<NodeId> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|(_, node)| node.label.to_lowercase().contains(&needle))
            .map(|(id, _)| id)
            .collect()
    }
}

/// Finds every key or literal whose text contains `query`, ignoring case.
///
/// # Example
///
/// ```
/// use jsonsleuth::{build_index, search};
///
/// let nodes = build_index(r#"{"name": "Cake", "type": "cake"}"#).unwrap();
/// let paths: Vec<_> = search(&nodes, "CAKE").into_iter().map(|m| m.path).collect();
/// assert_eq!(paths, vec!["root.name: \"Cake\"", "root.type: \"cake\""]);
/// ```
pub fn search(nodes: &NodeCollection, query: &str) -> Vec<Match> {
    nodes
        .matching(query)
        .into_iter()
        .map(|id| Match::resolve(nodes, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::build_index;

    #[test]
    fn test_empty_query_matches_everything() {
        let nodes = build_index(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(search(&nodes, "").len(), nodes.len());
    }

    #[test]
    fn test_empty_collection_matches_nothing() {
        let nodes = NodeCollection::new();
        assert!(search(&nodes, "").is_empty());
        assert!(search(&nodes, "a").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let nodes = build_index(r#"{"Alpha": "ALPINE", "beta": "alp"}"#).unwrap();
        let labels: Vec<_> = search(&nodes, "aLp")
            .into_iter()
            .map(|m| nodes[m.id].label.clone())
            .collect();
        assert_eq!(labels, vec!["Alpha", "\"ALPINE\"", "\"alp\""]);
    }

    #[test]
    fn test_quotes_are_part_of_literal_labels() {
        let nodes = build_index(r#"{"k": "v"}"#).unwrap();
        assert_eq!(search(&nodes, "\"v\"").len(), 1);
        // Keys are stored without quotes.
        assert!(search(&nodes, "\"k\"").is_empty());
    }

    #[test]
    fn test_match_carries_line_and_path() {
        let nodes = build_index("{\n  \"a\": {\n    \"b\": 7\n  }\n}").unwrap();
        let found = search(&nodes, "7");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "root.a.b: 7");
        assert_eq!(found[0].source_line, 3);
    }
}
