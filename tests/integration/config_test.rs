//! Tests for configuration loading

use std::fs;

use ansi_replay::config::OutputFormat;
use ansi_replay::{Config, ConfigError, LineDiscipline};
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.render.discipline, LineDiscipline::Cooked);
    assert_eq!(config.render.format, OutputFormat::Auto);
    assert!(config.render.hyperlinks);
    assert_eq!(config.input.chunk_size, 4096);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.render.discipline = LineDiscipline::Raw;
    config.render.format = OutputFormat::Json;
    config.input.chunk_size = 17;

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_keeps_defaults() {
    let config = Config::parse_str(
        r#"
[render]
discipline = "raw"
"#,
    )
    .unwrap();
    assert_eq!(config.render.discipline, LineDiscipline::Raw);
    assert_eq!(config.render.format, OutputFormat::Auto);
    assert!(config.render.hyperlinks);
    assert_eq!(config.input.chunk_size, 4096);
}

#[test]
fn empty_config_is_default() {
    assert_eq!(Config::parse_str("").unwrap(), Config::default());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = Config::parse_str("[input]\nchunk_size = 0").unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::ZeroChunkSize)
    );
}

#[test]
fn unknown_format_is_a_parse_error() {
    let err = Config::parse_str("[render]\nformat = \"html\"").unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn load_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[render]\nformat = \"plain\"\nhyperlinks = false\n\n[input]\nchunk_size = 64\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.render.format, OutputFormat::Plain);
    assert!(!config.render.hyperlinks);
    assert_eq!(config.input.chunk_size, 64);
}

#[test]
fn load_missing_explicit_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn invalid_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[input]\nchunk_size = \"lots\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn config_path_is_under_dot_config() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/ansi-replay/config.toml"));
}

#[test]
fn values_parse_case_insensitively() {
    assert_eq!("RAW".parse::<LineDiscipline>(), Ok(LineDiscipline::Raw));
    assert_eq!("Json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!(
        "fancy".parse::<OutputFormat>(),
        Err(ConfigError::InvalidValue {
            field: "format",
            value: "fancy".to_string(),
        })
    );
}
