//! Tokenizer for JSON source text.
//!
//! Every token keeps the exact slice of source it came from along with the
//! 1-based line and column of its first character. The index labels literals
//! with that raw text, so nothing here decodes strings or numbers.

use super::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    String,
    Number,
    True,
    False,
    Null,
}

impl TokenKind {
    /// Returns true for tokens that form a complete scalar value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

/// A lexical token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

/// Splits JSON source into tokens, tracking line and column.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the whole input, stopping at the first error.
    pub fn tokenize(input: &'a str) -> Result<Vec<Token<'a>>, ParseError> {
        Lexer::new(input).collect()
    }

    /// Current line and column, for errors raised past the last token.
    pub fn line_column(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        // A lone '\r' ends a line too; in "\r\n" only the '\n' counts.
        let ends_line = ch == '\n' || (ch == '\r' && self.peek() != Some('\n'));
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ParseErrorKind, line: usize, column: usize) -> ParseError {
        ParseError::new(kind, line, column)
    }

    fn lex_string(&mut self) -> Result<(), ParseError> {
        let (start_line, start_column) = self.line_column();
        self.next_char(); // opening quote

        loop {
            let (line, column) = self.line_column();
            match self.next_char() {
                None => {
                    return Err(self.error(
                        ParseErrorKind::UnterminatedString,
                        start_line,
                        start_column,
                    ))
                }
                Some('"') => return Ok(()),
                Some('\\') => self.lex_escape(line, column)?,
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(self.error(ParseErrorKind::ControlCharacter, line, column))
                }
                Some(_) => {}
            }
        }
    }

    fn lex_escape(&mut self, line: usize, column: usize) -> Result<(), ParseError> {
        match self.next_char() {
            Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => Ok(()),
            Some('u') => {
                let mut seq = String::from("\\u");
                for _ in 0..4 {
                    match self.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            seq.push(ch);
                            self.next_char();
                        }
                        _ => {
                            return Err(self.error(
                                ParseErrorKind::InvalidEscape(seq),
                                line,
                                column,
                            ))
                        }
                    }
                }
                Ok(())
            }
            Some(ch) => Err(self.error(
                ParseErrorKind::InvalidEscape(format!("\\{}", ch)),
                line,
                column,
            )),
            None => Err(self.error(ParseErrorKind::UnterminatedString, line, column)),
        }
    }

    /// Consumes a run of ASCII digits and returns how many there were.
    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.next_char();
            count += 1;
        }
        count
    }

    fn lex_number(&mut self, start: usize, line: usize, column: usize) -> Result<(), ParseError> {
        if self.peek() == Some('-') {
            self.next_char();
        }

        let valid = match self.peek() {
            Some('0') => {
                self.next_char();
                true
            }
            Some('1'..='9') => self.digits() > 0,
            _ => false,
        };

        let valid = valid
            && (self.peek() != Some('.') || {
                self.next_char();
                self.digits() > 0
            })
            && (!matches!(self.peek(), Some('e' | 'E')) || {
                self.next_char();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.next_char();
                }
                self.digits() > 0
            });

        // Swallow anything glued to the number so the error shows the whole word.
        let glued = matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric() || ch == '.');
        if !valid || glued {
            while matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '+' | '-')) {
                self.next_char();
            }
            let text = self.input[start..self.pos].to_string();
            return Err(self.error(ParseErrorKind::InvalidNumber(text), line, column));
        }
        Ok(())
    }

    fn lex_word(&mut self, start: usize, line: usize, column: usize) -> Result<TokenKind, ParseError> {
        while matches!(self.peek(), Some(ch) if ch.is_alphanumeric() || ch == '_') {
            self.next_char();
        }
        match &self.input[start..self.pos] {
            "true" => Ok(TokenKind::True),
            "false" => Ok(TokenKind::False),
            "null" => Ok(TokenKind::Null),
            word => Err(self.error(
                ParseErrorKind::InvalidLiteral(word.to_string()),
                line,
                column,
            )),
        }
    }

    fn next_token(&mut self) -> Option<Result<Token<'a>, ParseError>> {
        self.skip_whitespace();
        let start = self.pos;
        let (line, column) = self.line_column();
        let ch = self.peek()?;

        let kind = match ch {
            '{' | '}' | '[' | ']' | ':' | ',' => {
                self.next_char();
                Ok(match ch {
                    '{' => TokenKind::LeftBrace,
                    '}' => TokenKind::RightBrace,
                    '[' => TokenKind::LeftBracket,
                    ']' => TokenKind::RightBracket,
                    ':' => TokenKind::Colon,
                    _ => TokenKind::Comma,
                })
            }
            '"' => self.lex_string().map(|_| TokenKind::String),
            '-' | '0'..='9' => self.lex_number(start, line, column).map(|_| TokenKind::Number),
            c if c.is_alphabetic() => self.lex_word(start, line, column),
            c => Err(self.error(ParseErrorKind::UnexpectedCharacter(c), line, column)),
        };

        let input = self.input;
        let end = self.pos;
        Some(kind.map(|kind| Token {
            kind,
            text: &input[start..end],
            line,
            column,
        }))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if matches!(token, Some(Err(_))) {
            // Stop after the first error.
            self.pos = self.input.len();
        }
        token
    }
}
