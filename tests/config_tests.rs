use jsonsleuth::config::Config;
use jsonsleuth::output::OutputFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.root_name, "root");
    assert_eq!(config.indent_size, 4);
    assert!(config.show_line_numbers);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("root_name = \"root\""));
    assert!(toml_str.contains("indent_size = 4"));
    assert!(toml_str.contains("show_line_numbers = true"));
    assert!(toml_str.contains("output_format = \"text\""));
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        root_name: "$".to_string(),
        indent_size: 2,
        show_line_numbers: false,
        output_format: OutputFormat::Json,
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "indent_size = \"wide\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
