//! Error types for JSON tokenizing and parsing.

use std::fmt;

/// What went wrong while reading a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that cannot start any JSON token.
    UnexpectedCharacter(char),
    /// A bare word that is not `true`, `false` or `null`.
    InvalidLiteral(String),
    /// A number that does not follow the JSON number grammar.
    InvalidNumber(String),
    /// A backslash escape that JSON does not define.
    InvalidEscape(String),
    /// An unescaped control character inside a string.
    ControlCharacter,
    /// A string that runs to the end of input.
    UnterminatedString,
    /// A well-formed token in the wrong place.
    UnexpectedToken { found: String, expected: String },
    /// Input ended while a value was still open.
    UnexpectedEnd { expected: String },
    /// Something follows the top-level value.
    TrailingCharacters,
    /// Objects and arrays nested deeper than the parser allows.
    NestingTooDeep,
}

/// A syntax error in the JSON source, with the 1-based position where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedCharacter(ch) => write!(f, "Unexpected character {:?}", ch),
            ParseErrorKind::InvalidLiteral(word) => write!(f, "Invalid literal '{}'", word),
            ParseErrorKind::InvalidNumber(text) => write!(f, "Invalid number '{}'", text),
            ParseErrorKind::InvalidEscape(seq) => write!(f, "Invalid escape sequence '{}'", seq),
            ParseErrorKind::ControlCharacter => write!(f, "Control character in string"),
            ParseErrorKind::UnterminatedString => write!(f, "Unterminated string"),
            ParseErrorKind::UnexpectedToken { found, expected } => {
                write!(f, "Unexpected token '{}', expected {}", found, expected)
            }
            ParseErrorKind::UnexpectedEnd { expected } => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            ParseErrorKind::TrailingCharacters => write!(f, "Trailing characters after JSON value"),
            ParseErrorKind::NestingTooDeep => write!(f, "Nesting too deep"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}
