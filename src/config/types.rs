//! Configuration type definitions and defaults

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::screen::LineDiscipline;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Check values that parse fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }
}

/// How the replayed window is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Ansi` when stdout is a terminal, `Plain` otherwise
    #[default]
    Auto,
    /// Text only, trailing whitespace trimmed
    Plain,
    /// Text re-emitted with normalized SGR and OSC 8 sequences
    Ansi,
    /// Lines, chunks and styles as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputFormat::Auto),
            "plain" => Ok(OutputFormat::Plain),
            "ansi" => Ok(OutputFormat::Ansi),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                field: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Plain => "plain",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub discipline: LineDiscipline,
    #[serde(default)]
    pub format: OutputFormat,
    /// Emit OSC 8 hyperlinks in ansi output
    #[serde(default = "default_hyperlinks")]
    pub hyperlinks: bool,
}

pub fn default_hyperlinks() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            discipline: LineDiscipline::default(),
            format: OutputFormat::default(),
            hyperlinks: default_hyperlinks(),
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Bytes read per update
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

pub fn default_chunk_size() -> usize {
    4096
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}
