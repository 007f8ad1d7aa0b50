//! Integration tests for loading documents from disk.

use flate2::write::GzEncoder;
use flate2::Compression;
use jsonsleuth::file::loader::read_json_file;
use jsonsleuth::{build_index_with_root, search, NodeCollection};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn load(path: &Path, root_name: &str) -> NodeCollection {
    let source = read_json_file(path).unwrap();
    build_index_with_root(&source, root_name).unwrap()
}

#[test]
fn test_load_simple_json_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{\n  \"name\": \"test\"\n}}").unwrap();

    let nodes = load(temp_file.path(), "root");
    assert_eq!(nodes.len(), 3);

    let found = search(&nodes, "test");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, "root.name: \"test\"");
    assert_eq!(found[0].source_line, 2);
}

#[test]
fn test_load_with_custom_root_name() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "[1]").unwrap();

    let nodes = load(temp_file.path(), "doc");
    assert_eq!(search(&nodes, "1")[0].path, "doc[0]: 1");
}

#[test]
fn test_load_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"{\"zipped\": true}").unwrap();
    fs::write(&path, encoder.finish().unwrap()).unwrap();

    assert_eq!(read_json_file(&path).unwrap(), "{\"zipped\": true}");
    let nodes = load(&path, "root");
    assert_eq!(search(&nodes, "zipped")[0].path, "root.zipped");
}

#[test]
fn test_load_nonexistent_file() {
    let result = read_json_file("/nonexistent/path/to/file.json");
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_file_keeps_parse_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{\n  \"a\": 1,\n}}").unwrap();

    let source = read_json_file(temp_file.path()).unwrap();
    let err = build_index_with_root(&source, "root").unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn test_corrupt_gzip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json.gz");
    fs::write(&path, b"not gzip at all").unwrap();

    assert!(read_json_file(&path).is_err());
}
