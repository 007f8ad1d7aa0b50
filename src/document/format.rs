//! Pretty-printing of JSON documents.
//!
//! Printing works straight from the parsed [`Document`], so anything the
//! search index accepts can be beautified: deep nesting, numbers outside
//! `f64` range, lone surrogate escapes. Keys and literals are written
//! exactly as they appear in the source; only whitespace changes.

use super::parser::parse_json;
use super::syntax::{Document, Value};
use anyhow::{Context, Result};

/// Re-indents a JSON document, keeping member order and literal text.
///
/// # Example
///
/// ```
/// use jsonsleuth::document::format::beautify;
///
/// let pretty = beautify(r#"{"a":[1,2]}"#, 2).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
/// ```
///
/// # Errors
///
/// Fails with the [`ParseError`](super::error::ParseError) as source when
/// the input is not valid JSON.
pub fn beautify(source: &str, indent_size: usize) -> Result<String> {
    let document = parse_json(source).context("Syntax error in JSON")?;
    Ok(format_document(&document, indent_size))
}

/// Writes an already-parsed document with `indent_size` spaces per level.
pub fn format_document(document: &Document<'_>, indent_size: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, &document.value, indent_size, 0);
    out
}

fn write_indent(out: &mut String, indent_size: usize, depth: usize) {
    out.extend(std::iter::repeat(' ').take(indent_size * depth));
}

fn write_value(out: &mut String, value: &Value<'_>, indent_size: usize, depth: usize) {
    match value {
        Value::Object(members) if members.is_empty() => out.push_str("{}"),
        Value::Array(elements) if elements.is_empty() => out.push_str("[]"),
        Value::Object(members) => {
            out.push('{');
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                write_indent(out, indent_size, depth + 1);
                out.push_str(member.raw_key);
                out.push_str(": ");
                write_value(out, &member.value, indent_size, depth + 1);
            }
            out.push('\n');
            write_indent(out, indent_size, depth);
            out.push('}');
        }
        Value::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                write_indent(out, indent_size, depth + 1);
                write_value(out, &element.value, indent_size, depth + 1);
            }
            out.push('\n');
            write_indent(out, indent_size, depth);
            out.push(']');
        }
        Value::Literal(literal) => out.push_str(literal.text),
    }
}
