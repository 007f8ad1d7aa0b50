//! JSON source handling: tokenizing, parsing into a line-annotated syntax
//! tree, and pretty-printing.

pub mod error;
pub mod example;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse_json;
