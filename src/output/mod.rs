//! Rendering of search results for the terminal.
//!
//! Text output prints each match's path on one line and, when line numbers
//! are on, the jump target of every labelled segment on the line below:
//!
//! ```text
//! root.batters.batter[2].type: "Blueberry"
//!     root:1  batters:6  batter:8  [2]:12  type:12  "Blueberry":12
//! 1 result
//! ```
//!
//! JSON output is an array of `{path, sourceLine, segments}` objects.

use crate::index::Match;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders matches in the requested format.
pub fn render(matches: &[Match], format: OutputFormat, show_line_numbers: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(matches, show_line_numbers)),
        OutputFormat::Json => render_json(matches).map(|json| json + "\n"),
    }
}

/// Renders matches as breadcrumb lines followed by a result count.
pub fn render_text(matches: &[Match], show_line_numbers: bool) -> String {
    let mut out = String::new();

    for m in matches {
        out.push_str(&m.path);
        out.push('\n');

        if show_line_numbers {
            let targets: Vec<String> = m
                .segments
                .iter()
                .filter_map(|s| s.line.map(|line| format!("{}:{}", s.text, line)))
                .collect();
            out.push_str(&format!("    {}\n", targets.join("  ")));
        }
    }

    out.push_str(&format!(
        "{} {}\n",
        matches.len(),
        if matches.len() == 1 { "result" } else { "results" }
    ));
    out
}

/// Renders matches as a pretty-printed JSON array.
pub fn render_json(matches: &[Match]) -> Result<String> {
    serde_json::to_string_pretty(matches).context("Failed to serialize results")
}
