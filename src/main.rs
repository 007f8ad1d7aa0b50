use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use jsonsleuth::app::{run, Input, Options};
use jsonsleuth::config::Config;
use jsonsleuth::output::OutputFormat;

/// jsonsleuth - find keys and values in a JSON document
#[derive(Parser)]
#[command(name = "jsonsleuth")]
#[command(version)]
#[command(about = "Find keys and values in a JSON document, with full paths and source lines", long_about = None)]
struct Cli {
    /// JSON file to search (omit to read from stdin if piped, or use the built-in example)
    file: Option<PathBuf>,

    /// Text to look for in keys and values, case-insensitive (empty matches everything)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Don't print the source line of each path segment
    #[arg(long)]
    no_line_numbers: bool,

    /// Label for the root of every path (overrides config)
    #[arg(long)]
    root_name: Option<String>,

    /// Print the document re-indented instead of searching
    #[arg(short, long)]
    beautify: bool,

    /// Search the built-in example document
    #[arg(long, conflicts_with = "file")]
    example: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    let config = Config::load();
    debug!(?config, "loaded config");

    let options = Options {
        query: cli.query,
        format: cli.format,
        no_line_numbers: cli.no_line_numbers,
        root_name: cli.root_name,
        beautify: cli.beautify,
    };

    if cli.save_config {
        options.effective_config(&config).save()?;
        info!(path = ?Config::config_path(), "saved config");
        return Ok(ExitCode::SUCCESS);
    }

    let input = Input::select(cli.file, cli.example, io::stdin().is_terminal());
    if input == Input::Example {
        info!("searching the example document");
    }
    let source = input.read()?;

    let outcome = run(&options, &source, &config)?;
    io::stdout().lock().write_all(outcome.stdout.as_bytes())?;
    io::stderr().lock().write_all(outcome.stderr.as_bytes())?;

    Ok(ExitCode::from(outcome.exit_code))
}
