//! Syntax tree produced by the JSON parser.
//!
//! The tree borrows all text from the source. Every member, element and
//! literal carries the line it starts on, which is what the search index
//! needs to point back into the original document.

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// The top-level value.
    pub value: Value<'a>,
    /// Line of the first token in the document.
    pub line: usize,
}

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Object(Vec<Member<'a>>),
    Array(Vec<Element<'a>>),
    Literal(Literal<'a>),
}

/// A `"key": value` pair inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<'a> {
    /// The key token exactly as written, quotes included.
    pub raw_key: &'a str,
    /// Line of the key token.
    pub line: usize,
    pub value: Value<'a>,
}

impl<'a> Member<'a> {
    /// Returns the key with its surrounding quotes removed.
    ///
    /// Escape sequences are left as written.
    pub fn key(&self) -> &'a str {
        let raw = self.raw_key;
        raw.strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(raw)
    }
}

/// One position of an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
    /// Line of the element's first token.
    pub line: usize,
    pub value: Value<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Boolean,
    Null,
}

/// A scalar token: string, number, boolean or null.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal<'a> {
    pub kind: LiteralKind,
    /// Source text of the token, quotes included for strings.
    pub text: &'a str,
    pub line: usize,
}

impl<'a> Value<'a> {
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Counts literal tokens anywhere beneath this value, itself included.
    pub fn literal_count(&self) -> usize {
        match self {
            Value::Object(members) => members.iter().map(|m| m.value.literal_count()).sum(),
            Value::Array(elements) => elements.iter().map(|e| e.value.literal_count()).sum(),
            Value::Literal(_) => 1,
        }
    }

    /// Counts object keys anywhere beneath this value.
    pub fn key_count(&self) -> usize {
        match self {
            Value::Object(members) => members.iter().map(|m| 1 + m.value.key_count()).sum(),
            Value::Array(elements) => elements.iter().map(|e| e.value.key_count()).sum(),
            Value::Literal(_) => 0,
        }
    }
}
