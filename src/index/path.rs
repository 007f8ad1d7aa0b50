//! Reconstructs the path from the root to a node.
//!
//! A path reads parent label, array positions, separator, child label, from
//! the root down: `root.batters.batter[2]: "Blueberry"`. The separator before
//! a literal is `": "`, before a key it is `"."`. Labels and array positions
//! carry the line they came from, separators carry none.

use super::node::{NodeCollection, NodeId};
use serde::Serialize;

/// Separator placed before a literal.
pub const LEAF_SEPARATOR: &str = ": ";
/// Separator placed before a key.
pub const KEY_SEPARATOR: &str = ".";

/// One piece of a rendered path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    /// Source line to jump to, `None` for separators.
    pub line: Option<usize>,
}

impl Segment {
    fn located(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line: Some(line),
        }
    }

    fn separator(text: &str) -> Self {
        Self {
            text: text.to_string(),
            line: None,
        }
    }
}

/// Returns the path segments of `id`, root first.
///
/// An id from another collection yields an empty list.
pub fn resolve_segments(nodes: &NodeCollection, id: NodeId) -> Vec<Segment> {
    let mut segments = Vec::new();

    // Collected leaf-to-root, then flipped.
    for (_, node) in nodes.ancestors(id) {
        segments.push(Segment::located(node.label.as_str(), node.source_line));
        if node.parent.is_some() {
            segments.push(Segment::separator(if node.is_leaf {
                LEAF_SEPARATOR
            } else {
                KEY_SEPARATOR
            }));
            for entry in node.array_index_path.iter().rev() {
                segments.push(Segment::located(format!("[{}]", entry.index), entry.line));
            }
        }
    }

    segments.reverse();
    segments
}

/// Returns the path of `id` as a single string.
///
/// This is the concatenation of [`resolve_segments`] texts.
pub fn resolve_path(nodes: &NodeCollection, id: NodeId) -> String {
    resolve_segments(nodes, id)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}
