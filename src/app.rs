//! What one invocation of the command line tool does.
//!
//! [`run`] turns a document and a set of [`Options`] into an [`Outcome`]:
//! the text for stdout and stderr plus the exit code. The binary only
//! parses arguments, reads the input and prints the outcome.

use crate::config::Config;
use crate::document::example::EXAMPLE_JSON;
use crate::document::format::format_document;
use crate::document::parser::parse_json;
use crate::file::loader::{read_json_file, read_json_from_stdin};
use crate::index::{search, NodeCollection};
use crate::output::{render, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
    Example,
}

impl Input {
    /// Picks the input for an optional file argument.
    ///
    /// Without a file, piped stdin wins over the built-in example.
    pub fn select(file: Option<PathBuf>, example: bool, stdin_is_terminal: bool) -> Self {
        match file {
            _ if example => Input::Example,
            Some(path) => Input::File(path),
            None if !stdin_is_terminal => Input::Stdin,
            None => Input::Example,
        }
    }

    /// Reads the document text.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::File(path) => read_json_file(path)
                .with_context(|| format!("Failed to load {}", path.display())),
            Input::Stdin => read_json_from_stdin(),
            Input::Example => Ok(EXAMPLE_JSON.to_string()),
        }
    }
}

/// Settings for one run. `None` means "use the config file's value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub query: String,
    pub format: Option<OutputFormat>,
    pub no_line_numbers: bool,
    pub root_name: Option<String>,
    pub beautify: bool,
}

impl Options {
    /// Applies the command line overrides on top of `config`.
    pub fn effective_config(&self, config: &Config) -> Config {
        Config {
            root_name: self
                .root_name
                .clone()
                .unwrap_or_else(|| config.root_name.clone()),
            show_line_numbers: config.show_line_numbers && !self.no_line_numbers,
            output_format: self.format.unwrap_or(config.output_format),
            ..config.clone()
        }
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self {
            stdout,
            ..Self::default()
        }
    }

    fn failure(stderr: String) -> Self {
        Self {
            stderr,
            exit_code: 1,
            ..Self::default()
        }
    }
}

/// Beautifies or searches `source`.
///
/// Malformed JSON is not an error here: it yields exit code 1 with
/// `Syntax error in JSON: <detail>` on stderr and nothing on stdout.
///
/// # Errors
///
/// Fails only when results cannot be serialized.
pub fn run(options: &Options, source: &str, config: &Config) -> Result<Outcome> {
    let config = options.effective_config(config);

    let document = match parse_json(source) {
        Ok(document) => document,
        Err(err) => return Ok(Outcome::failure(format!("Syntax error in JSON: {}\n", err))),
    };

    if options.beautify {
        let mut pretty = format_document(&document, config.indent_size);
        pretty.push('\n');
        return Ok(Outcome::success(pretty));
    }

    let nodes = NodeCollection::from_document(&document, &config.root_name);
    let matches = search(&nodes, &options.query);
    debug!(nodes = nodes.len(), matches = matches.len(), query = %options.query, "search done");

    let stdout = render(&matches, config.output_format, config.show_line_numbers)?;
    Ok(Outcome::success(stdout))
}
