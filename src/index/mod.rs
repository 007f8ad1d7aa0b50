//! Searchable index of a JSON document.
//!
//! Every object key and every literal becomes a [`TreeNode`] with the line it
//! came from and the array positions between it and the key above it. The
//! index is rebuilt from scratch for each document; nothing is cached.
//!
//! # Example
//!
//! ```
//! use jsonsleuth::index::{build_index, search};
//!
//! let nodes = build_index("{\"a\": {\"b\": [1, 2]}}").unwrap();
//! let found = search(&nodes, "2");
//! assert_eq!(found[0].path, "root.a.b[1]: 2");
//! ```

pub mod builder;
pub mod node;
pub mod path;
pub mod search;

pub use builder::{build_index, build_index_with_root};
pub use node::{ArrayIndex, NodeCollection, NodeId, TreeNode, DEFAULT_ROOT_NAME};
pub use path::{resolve_path, resolve_segments, Segment};
pub use search::{search, Match};
