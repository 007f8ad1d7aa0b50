//! Integration tests for a full command line run: input selection,
//! beautify, search output and exit codes.

use jsonsleuth::app::{run, Input, Options};
use jsonsleuth::config::Config;
use jsonsleuth::output::OutputFormat;
use std::io::Write;
use tempfile::NamedTempFile;

fn options(query: &str) -> Options {
    Options {
        query: query.to_string(),
        ..Options::default()
    }
}

#[test]
fn test_malformed_input_exits_with_syntax_error() {
    let outcome = run(&options("a"), "{not json}", &Config::default()).unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.starts_with("Syntax error in JSON: "));
    assert!(outcome.stderr.contains("line 1"));
    assert!(outcome.stderr.ends_with('\n'));
}

#[test]
fn test_malformed_input_fails_beautify_too() {
    let opts = Options {
        beautify: true,
        ..Options::default()
    };
    let outcome = run(&opts, "{\n  \"a\": 1,\n}", &Config::default()).unwrap();

    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.starts_with("Syntax error in JSON: "));
    assert!(outcome.stderr.contains("line 3"));
}

#[test]
fn test_beautify_uses_config_indent() {
    let opts = Options {
        beautify: true,
        ..Options::default()
    };
    let config = Config {
        indent_size: 2,
        ..Config::default()
    };
    let outcome = run(&opts, r#"{"a":[1,{}]}"#, &config).unwrap();

    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.stderr.is_empty());
    assert_eq!(outcome.stdout, "{\n  \"a\": [\n    1,\n    {}\n  ]\n}\n");
}

#[test]
fn test_example_input_search() {
    let source = Input::Example.read().unwrap();
    let outcome = run(&options("blueberry"), &source, &Config::default()).unwrap();

    assert_eq!(outcome.exit_code, 0);
    assert_eq!(
        outcome.stdout,
        "root.batters.batter[2].type: \"Blueberry\"\n    \
         root:1  batters:6  batter:8  [2]:12  type:12  \"Blueberry\":12\n\
         1 result\n"
    );
}

#[test]
fn test_file_input_search() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{\n  \"name\": \"test\"\n}}").unwrap();

    let input = Input::select(Some(temp_file.path().to_path_buf()), false, true);
    let source = input.read().unwrap();
    let outcome = run(&options("TEST"), &source, &Config::default()).unwrap();

    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.stdout.starts_with("root.name: \"test\"\n"));
}

#[test]
fn test_missing_file_is_an_error() {
    let input = Input::File("/nonexistent/path/to/file.json".into());
    let err = input.read().unwrap_err();
    assert!(err.to_string().contains("Failed to load"));
}

#[test]
fn test_root_name_and_no_line_numbers() {
    let opts = Options {
        root_name: Some("doc".to_string()),
        no_line_numbers: true,
        ..options("x")
    };
    let outcome = run(&opts, r#"{"x": 1}"#, &Config::default()).unwrap();

    assert_eq!(outcome.stdout, "doc.x\n1 result\n");
}

#[test]
fn test_json_format_override() {
    let opts = Options {
        format: Some(OutputFormat::Json),
        ..options("x")
    };
    let outcome = run(&opts, r#"{"x": 1}"#, &Config::default()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(parsed[0]["path"], "root.x");
    assert_eq!(parsed[0]["sourceLine"], 1);
}
