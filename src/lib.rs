//! jsonsleuth - find keys and values in a JSON document by substring.
//!
//! A document is parsed with line tracking and flattened into a
//! [`NodeCollection`]: one node per object key and per literal, linked to
//! the key above it and annotated with the array positions in between.
//! [`search`] filters that collection and resolves each hit to a path such
//! as `root.topping[4].type: "Chocolate with Sprinkles"`, with the source
//! line of every path segment.
//!
//! ```
//! use jsonsleuth::{build_index, search};
//!
//! let nodes = build_index("{\"x\": [[1, 2], [3]]}").unwrap();
//! let hits = search(&nodes, "3");
//! assert_eq!(hits[0].path, "root.x[1][0]: 3");
//! ```

pub mod app;
pub mod config;
pub mod document;
pub mod file;
pub mod index;
pub mod output;

pub use document::error::{ParseError, ParseErrorKind};
pub use index::{
    build_index, build_index_with_root, resolve_path, resolve_segments, search, ArrayIndex, Match,
    NodeCollection, NodeId, Segment, TreeNode,
};
