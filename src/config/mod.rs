//! Configuration system for jsonsleuth.
//!
//! Settings are read from a TOML file with sensible defaults for anything
//! missing. Command-line arguments override what the file says.
//!
//! # Example
//!
//! ```
//! use jsonsleuth::config::Config;
//! use jsonsleuth::output::OutputFormat;
//!
//! let config = Config::default();
//! assert_eq!(config.root_name, "root");
//! assert_eq!(config.indent_size, 4);
//!
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert!(custom.show_line_numbers);
//! ```

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for the jsonsleuth application.
///
/// # Fields
///
/// * `root_name` - Label of the synthetic root node in paths (default: "root")
/// * `indent_size` - Spaces per level when beautifying (default: 4)
/// * `show_line_numbers` - Print the source line of each path segment (default: true)
/// * `output_format` - "text" or "json" (default: "text")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label of the root node
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Number of spaces per indentation level when beautifying
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Print source lines next to path segments
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// How search results are printed
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_root_name() -> String {
    crate::index::DEFAULT_ROOT_NAME.to_string()
}

fn default_indent_size() -> usize {
    4
}

fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            indent_size: default_indent_size(),
            show_line_numbers: default_show_line_numbers(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonsleuth/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonsleuth");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
                Self::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("indent_size = 2").unwrap();
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.root_name, "root");
        assert!(config.show_line_numbers);
    }

    #[test]
    fn test_output_format_from_toml() {
        let config: Config = toml::from_str("output_format = \"json\"").unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
