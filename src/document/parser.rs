//! Recursive-descent JSON parser with line tracking.
//!
//! The parser accepts standard JSON: objects, arrays, strings, numbers,
//! `true`, `false` and `null`, nested arbitrarily (up to [`MAX_DEPTH`]).
//! Any top-level value is allowed, including a bare literal.
//!
//! # Example
//!
//! ```
//! use jsonsleuth::document::parser::parse_json;
//! use jsonsleuth::document::syntax::Value;
//!
//! let doc = parse_json("{\n  \"name\": \"Alice\"\n}").unwrap();
//! if let Value::Object(members) = &doc.value {
//!     assert_eq!(members[0].key(), "name");
//!     assert_eq!(members[0].line, 2);
//! }
//! ```

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{Lexer, Token, TokenKind};
use super::syntax::{Document, Element, Literal, LiteralKind, Member, Value};

/// Deepest object/array nesting the parser accepts.
pub const MAX_DEPTH: usize = 512;

/// Parses JSON source text into a [`Document`].
///
/// # Errors
///
/// Returns a [`ParseError`] with the line and column of the first problem
/// when the input is not valid JSON.
pub fn parse_json(source: &str) -> Result<Document<'_>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    for token in lexer.by_ref() {
        tokens.push(token?);
    }
    let (end_line, end_column) = lexer.line_column();

    let mut parser = Parser {
        tokens,
        position: 0,
        depth: 0,
        end_line,
        end_column,
    };
    parser.parse_document()
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    depth: usize,
    end_line: usize,
    end_column: usize,
}

impl<'a> Parser<'a> {
    fn parse_document(&mut self) -> Result<Document<'a>, ParseError> {
        let line = match self.peek() {
            Some(token) => token.line,
            None => return Err(self.unexpected_end("a JSON value")),
        };
        let value = self.parse_value()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingCharacters,
                token.line,
                token.column,
            ));
        }

        Ok(Document { value, line })
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn unexpected_end(&self, expected: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedEnd {
                expected: expected.to_string(),
            },
            self.end_line,
            self.end_column,
        )
    }

    fn unexpected(&self, token: Token<'a>, expected: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: token.text.to_string(),
                expected: expected.to_string(),
            },
            token.line,
            token.column,
        )
    }

    /// Consumes a token of the given kind, or fails naming what was expected.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>, ParseError> {
        match self.next() {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(self.unexpected_end(expected)),
        }
    }

    fn parse_value(&mut self) -> Result<Value<'a>, ParseError> {
        let token = match self.next() {
            Some(token) => token,
            None => return Err(self.unexpected_end("a JSON value")),
        };

        match token.kind {
            TokenKind::LeftBrace => self.nested(token, Self::parse_object),
            TokenKind::LeftBracket => self.nested(token, Self::parse_array),
            kind if kind.is_literal() => Ok(Value::Literal(Literal {
                kind: match kind {
                    TokenKind::String => LiteralKind::String,
                    TokenKind::Number => LiteralKind::Number,
                    TokenKind::Null => LiteralKind::Null,
                    _ => LiteralKind::Boolean,
                },
                text: token.text,
                line: token.line,
            })),
            _ => Err(self.unexpected(token, "a JSON value")),
        }
    }

    /// Runs a container parser one nesting level deeper.
    fn nested(
        &mut self,
        open: Token<'a>,
        parse: fn(&mut Self) -> Result<Value<'a>, ParseError>,
    ) -> Result<Value<'a>, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep,
                open.line,
                open.column,
            ));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    /// Parses object members; the opening brace is already consumed.
    fn parse_object(&mut self) -> Result<Value<'a>, ParseError> {
        let mut members = Vec::new();

        if matches!(self.peek(), Some(t) if t.kind == TokenKind::RightBrace) {
            self.next();
            return Ok(Value::Object(members));
        }

        loop {
            let key = self.expect(TokenKind::String, "a string key")?;
            self.expect(TokenKind::Colon, "':'")?;
            let value = self.parse_value()?;
            members.push(Member {
                raw_key: key.text,
                line: key.line,
                value,
            });

            match self.next() {
                Some(t) if t.kind == TokenKind::Comma => continue,
                Some(t) if t.kind == TokenKind::RightBrace => break,
                Some(t) => return Err(self.unexpected(t, "',' or '}'")),
                None => return Err(self.unexpected_end("',' or '}'")),
            }
        }

        Ok(Value::Object(members))
    }

    /// Parses array elements; the opening bracket is already consumed.
    fn parse_array(&mut self) -> Result<Value<'a>, ParseError> {
        let mut elements = Vec::new();

        if matches!(self.peek(), Some(t) if t.kind == TokenKind::RightBracket) {
            self.next();
            return Ok(Value::Array(elements));
        }

        loop {
            let line = match self.peek() {
                Some(token) => token.line,
                None => return Err(self.unexpected_end("a JSON value")),
            };
            let value = self.parse_value()?;
            elements.push(Element { line, value });

            match self.next() {
                Some(t) if t.kind == TokenKind::Comma => continue,
                Some(t) if t.kind == TokenKind::RightBracket => break,
                Some(t) => return Err(self.unexpected(t, "',' or ']'")),
                None => return Err(self.unexpected_end("',' or ']'")),
            }
        }

        Ok(Value::Array(elements))
    }
}
