//! Node records and the arena that owns them.
//!
//! A [`NodeCollection`] is a flat, insertion-ordered store of [`TreeNode`]s.
//! Nodes point at their parent through a [`NodeId`] handle rather than a
//! reference, so the collection is plain owned data and can be cloned,
//! compared and sent between threads.

use serde::Serialize;
use std::ops::Index;

/// Label given to the synthetic root node unless the caller picks another.
pub const DEFAULT_ROOT_NAME: &str = "root";

/// Handle to a node inside a [`NodeCollection`].
///
/// Ids are assigned in creation order, so comparing two ids compares their
/// position in a pre-order walk of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One array position crossed on the way from a key (or the root) to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrayIndex {
    /// Zero-based element position.
    pub index: usize,
    /// Line where the element starts.
    pub line: usize,
}

/// An object key or a literal value in the indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Key text without quotes, raw literal text, or the root name.
    pub label: String,
    /// 1-based line of the key or literal token.
    pub source_line: usize,
    /// Enclosing key node, or the root. `None` only for the root itself.
    pub parent: Option<NodeId>,
    /// Array positions between the parent key and this node, outermost first.
    pub array_index_path: Vec<ArrayIndex>,
    /// True for literals, false for keys and the root.
    pub is_leaf: bool,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of [`TreeNode`]s in creation order.
///
/// The first node, when present, is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeCollection {
    nodes: Vec<TreeNode>,
}

impl NodeCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its handle.
    pub(crate) fn push(&mut self, node: TreeNode) -> NodeId {
        debug_assert!(
            node.parent.map_or(true, |p| p.0 < self.nodes.len()),
            "parent must be created before its children"
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root handle, or `None` for an empty collection.
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Iterates over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Iterates over the direct children of `id` in creation order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &TreeNode)> + '_ {
        self.iter().filter(move |(_, node)| node.parent == Some(id))
    }

    /// Walks from `id` up to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            collection: self,
            next: self.get(id).map(|_| id),
        }
    }

    /// Number of literal nodes.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf).count()
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }
}

impl Index<NodeId> for NodeCollection {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }
}

/// Iterator returned by [`NodeCollection::ancestors`].
pub struct Ancestors<'a> {
    collection: &'a NodeCollection,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.collection.get(id)?;
        self.next = node.parent;
        Some((id, node))
    }
}
