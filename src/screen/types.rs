//! Screen data types.
//!
//! Contains the value types the window is built from:
//! - Style: colors and text attributes in effect when text is printed
//! - Hyperlink: an OSC 8 target with its parameters
//! - Chunk: a run of text printed under one style and hyperlink
//! - CursorPosition: 0-indexed row and display column
//! - LineDiscipline: how trailing blank rows are observed

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::parser::Color;
use crate::width::string_width;

/// Style attributes for printed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverted: bool,
    pub strikethrough: bool,
    pub fraktur: bool,
    pub framed: bool,
}

impl Style {
    /// True for the default style (no colors, no attributes).
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

/// OSC 8 hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Percent-encoded URL.
    pub url: String,
    /// `key=value` parameters, in the order they were sent.
    pub params: Vec<String>,
}

/// A run of text printed under a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
}

impl Chunk {
    pub fn new(text: impl Into<String>, style: Style, hyperlink: Option<Hyperlink>) -> Self {
        Self {
            text: text.into(),
            style,
            hyperlink,
        }
    }

    /// `width` spaces in the default style with no hyperlink.
    pub fn blank(width: usize) -> Self {
        Self::new(" ".repeat(width), Style::default(), None)
    }

    /// Display width of the text in cells.
    pub fn width(&self) -> usize {
        string_width(&self.text)
    }

    /// Hyperlink URL, if the chunk was printed inside a hyperlink.
    pub fn url(&self) -> Option<&str> {
        self.hyperlink.as_ref().map(|link| link.url.as_str())
    }

    /// Hyperlink parameters, if the chunk was printed inside a hyperlink.
    pub fn params(&self) -> Option<&[String]> {
        self.hyperlink.as_ref().map(|link| link.params.as_slice())
    }

    /// A chunk with the same style and hyperlink but different text.
    pub(crate) fn with_text(&self, text: String) -> Self {
        Self {
            text,
            style: self.style,
            hyperlink: self.hyperlink.clone(),
        }
    }
}

/// Cursor position. Both coordinates are 0-indexed; the column counts
/// display cells, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub row: usize,
    pub column: usize,
}

/// How trailing blank rows are observed.
///
/// The stored grid is the same under both disciplines; only the lines
/// returned by [`Window::lines`](super::Window::lines) differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDiscipline {
    /// Keep every row, including blank rows left by trailing newlines.
    Raw,
    /// Trim trailing blank rows.
    #[default]
    Cooked,
}

impl FromStr for LineDiscipline {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(LineDiscipline::Raw),
            "cooked" => Ok(LineDiscipline::Cooked),
            _ => Err(ConfigError::InvalidValue {
                field: "discipline",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LineDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDiscipline::Raw => write!(f, "raw"),
            LineDiscipline::Cooked => write!(f, "cooked"),
        }
    }
}
