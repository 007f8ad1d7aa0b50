//! Integration tests for rendering search results.

use jsonsleuth::output::{render, render_json, render_text, OutputFormat};
use jsonsleuth::{build_index, search};

#[test]
fn test_text_output_with_line_numbers() {
    let nodes = build_index("{\n  \"a\": [\n    \"hit\"\n  ]\n}").unwrap();
    let found = search(&nodes, "hit");

    assert_eq!(
        render_text(&found, true),
        "root.a[0]: \"hit\"\n    root:1  a:2  [0]:3  \"hit\":3\n1 result\n"
    );
}

#[test]
fn test_text_output_without_line_numbers() {
    let nodes = build_index(r#"{"x": 1, "xx": 2}"#).unwrap();
    let found = search(&nodes, "x");

    assert_eq!(render_text(&found, false), "root.x\nroot.xx\n2 results\n");
}

#[test]
fn test_text_output_no_results() {
    let nodes = build_index("[]").unwrap();
    assert_eq!(render_text(&search(&nodes, "q"), true), "0 results\n");
}

#[test]
fn test_json_output_shape() {
    let nodes = build_index("{\"k\": null}").unwrap();
    let found = search(&nodes, "null");

    let value: serde_json::Value = serde_json::from_str(&render_json(&found).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "path": "root.k: null",
            "sourceLine": 1,
            "segments": [
                {"text": "root", "line": 1},
                {"text": ".", "line": null},
                {"text": "k", "line": 1},
                {"text": ": ", "line": null},
                {"text": "null", "line": 1}
            ]
        }])
    );
}

#[test]
fn test_render_dispatches_on_format() {
    let nodes = build_index("[1]").unwrap();
    let found = search(&nodes, "1");

    assert!(render(&found, OutputFormat::Json, true)
        .unwrap()
        .starts_with('['));
    assert!(render(&found, OutputFormat::Text, true)
        .unwrap()
        .ends_with("1 result\n"));
}
