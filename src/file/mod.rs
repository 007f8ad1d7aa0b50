//! File I/O for JSON documents.
//!
//! This module loads JSON from disk or stdin, with gzip support. Documents
//! are only ever read; nothing is written back.

pub mod loader;
