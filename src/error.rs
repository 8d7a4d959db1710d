//! Error types.
//!
//! Parsing and replaying text never fails; these cover the layers around
//! it: reading input streams and loading configuration.

use std::io;

/// Errors that can occur while replaying a byte stream.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("chunk_size must be at least 1")]
    ZeroChunkSize,
}
