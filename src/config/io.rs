//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Get the config file path (~/.config/ansi-replay/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("ansi-replay").join("config.toml"))
}

/// Load configuration from an explicit path, or from the default path if
/// one exists. Falls back to defaults when no default file is present.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Ok(default) if default.exists() => default,
            _ => return Ok(Config::default()),
        },
    };

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    parse_str(&contents).with_context(|| format!("Invalid config file: {:?}", config_path))
}

/// Parse and validate configuration from TOML text.
pub fn parse_str(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("Failed to parse config")?;
    config.validate()?;
    Ok(config)
}
