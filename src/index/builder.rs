//! Builds a [`NodeCollection`] from a parsed document.
//!
//! Object members become internal nodes and literals become leaves. Arrays
//! never get a node of their own: each element is visited with the array's
//! parent and one more [`ArrayIndex`] appended to the path it carries. The
//! path starts over empty below every key.

use super::node::{ArrayIndex, NodeCollection, NodeId, TreeNode, DEFAULT_ROOT_NAME};
use crate::document::error::ParseError;
use crate::document::parser::parse_json;
use crate::document::syntax::{Document, Value};

/// Parses `source` and indexes every key and literal in it.
///
/// # Example
///
/// ```
/// use jsonsleuth::build_index;
///
/// let nodes = build_index(r#"{"a": {"b": [1, 2]}}"#).unwrap();
/// // root, a, b, 1, 2
/// assert_eq!(nodes.len(), 5);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if `source` is not valid JSON. No partial
/// collection is produced.
pub fn build_index(source: &str) -> Result<NodeCollection, ParseError> {
    build_index_with_root(source, DEFAULT_ROOT_NAME)
}

/// Like [`build_index`], labelling the root node `root_name`.
pub fn build_index_with_root(source: &str, root_name: &str) -> Result<NodeCollection, ParseError> {
    let document = parse_json(source)?;
    Ok(NodeCollection::from_document(&document, root_name))
}

impl NodeCollection {
    /// Indexes an already-parsed document.
    ///
    /// A bare literal at the top level becomes a leaf child of the root.
    pub fn from_document(document: &Document<'_>, root_name: &str) -> Self {
        let mut nodes = NodeCollection::new();
        let root = nodes.push(TreeNode {
            label: root_name.to_string(),
            source_line: document.line,
            parent: None,
            array_index_path: Vec::new(),
            is_leaf: false,
        });
        nodes.visit_value(&document.value, root, &[]);
        nodes
    }

    fn visit_value(&mut self, value: &Value<'_>, parent: NodeId, array_path: &[ArrayIndex]) {
        match value {
            Value::Object(members) => {
                for member in members {
                    let key = self.push(TreeNode {
                        label: member.key().to_string(),
                        source_line: member.line,
                        parent: Some(parent),
                        array_index_path: array_path.to_vec(),
                        is_leaf: false,
                    });
                    self.visit_value(&member.value, key, &[]);
                }
            }
            Value::Array(elements) => {
                let mut path = array_path.to_vec();
                for (index, element) in elements.iter().enumerate() {
                    path.push(ArrayIndex {
                        index,
                        line: element.line,
                    });
                    self.visit_value(&element.value, parent, &path);
                    path.pop();
                }
            }
            Value::Literal(literal) => {
                self.push(TreeNode {
                    label: literal.text.to_string(),
                    source_line: literal.line,
                    parent: Some(parent),
                    array_index_path: array_path.to_vec(),
                    is_leaf: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(nodes: &NodeCollection) -> Vec<&str> {
        nodes.iter().map(|(_, n)| n.label.as_str()).collect()
    }

    #[test]
    fn test_preorder_creation() {
        let nodes = build_index(r#"{"a": {"b": 1, "c": [true, null]}, "d": "x"}"#).unwrap();
        assert_eq!(
            labels(&nodes),
            vec!["root", "a", "b", "1", "c", "true", "null", "d", "\"x\""]
        );
    }

    #[test]
    fn test_parents_skip_arrays() {
        let nodes = build_index(r#"{"list": [{"k": 1}, 2]}"#).unwrap();
        let list = nodes.iter().find(|(_, n)| n.label == "list").unwrap().0;
        let k = nodes.iter().find(|(_, n)| n.label == "k").unwrap().1;
        let two = nodes.iter().find(|(_, n)| n.label == "2").unwrap().1;

        assert_eq!(k.parent, Some(list));
        assert_eq!(k.array_index_path.iter().map(|a| a.index).collect::<Vec<_>>(), vec![0]);
        assert!(!k.is_leaf);

        assert_eq!(two.parent, Some(list));
        assert_eq!(two.array_index_path.iter().map(|a| a.index).collect::<Vec<_>>(), vec![1]);
        assert!(two.is_leaf);
    }

    #[test]
    fn test_array_path_resets_below_keys() {
        let nodes = build_index(r#"[[{"k": [5]}]]"#).unwrap();
        let k = nodes.iter().find(|(_, n)| n.label == "k").unwrap().1;
        let five = nodes.iter().find(|(_, n)| n.label == "5").unwrap().1;
        assert_eq!(k.array_index_path.len(), 2);
        assert_eq!(five.array_index_path.len(), 1);
    }

    #[test]
    fn test_empty_containers_add_nothing() {
        let nodes = build_index(r#"{"o": {}, "a": [], "n": [[]]}"#).unwrap();
        assert_eq!(labels(&nodes), vec!["root", "o", "a", "n"]);

        let nodes = build_index("[]").unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_custom_root_name() {
        let nodes = build_index_with_root("[1]", "$").unwrap();
        assert_eq!(nodes[nodes.root().unwrap()].label, "$");
    }
}
