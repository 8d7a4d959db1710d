//! Configuration management for ansi-replay

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/ansi-replay/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        io::load(path)
    }

    /// Parse configuration from TOML text.
    pub fn parse_str(contents: &str) -> Result<Self> {
        io::parse_str(contents)
    }
}
