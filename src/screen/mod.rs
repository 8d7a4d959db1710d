//! Virtual screen model.
//!
//! Provides a [`Window`] that replays terminal output into styled lines.
//! Each chunk of output is parsed into actions, which are applied in order
//! to move the cursor, change the current style and overwrite text.
//!
//! Unlike a real terminal the window has no fixed size: rows are created on
//! demand and lines grow to whatever width is written.

mod apply;
mod handlers;
mod line;
mod types;

pub use line::Line;
pub use types::{Chunk, CursorPosition, Hyperlink, LineDiscipline, Style};

use std::borrow::Cow;
use std::fmt;
use std::mem;

use crate::parser::parse;

/// Replayed terminal state.
///
/// ```
/// use ansi_replay::{LineDiscipline, Window};
///
/// let window = Window::new(LineDiscipline::Cooked)
///     .update("building\x1b[")
///     .update("32m ok\r\n");
/// assert_eq!(window.to_string(), "building ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Window {
    /// Rows in order; index is the row number
    lines: Vec<Line>,
    /// Current cursor position
    cursor: CursorPosition,
    /// Style for newly printed text
    style: Style,
    /// Saved cursor position (for CSI s/u)
    saved_cursor: Option<CursorPosition>,
    /// Hyperlink applied to newly printed text
    hyperlink: Option<Hyperlink>,
    /// Incomplete escape sequence from the previous chunk
    remainder: String,
    discipline: LineDiscipline,
}

impl Window {
    /// Create an empty window.
    pub fn new(discipline: LineDiscipline) -> Self {
        Self {
            discipline,
            ..Self::default()
        }
    }

    /// Feed one chunk of output and return the updated window.
    pub fn update(mut self, text: &str) -> Self {
        self.feed(text);
        self
    }

    /// Feed one chunk of output in place.
    ///
    /// An escape sequence left incomplete by the previous chunk is completed
    /// with the start of this one.
    pub fn feed(&mut self, text: &str) {
        let input = if self.remainder.is_empty() {
            Cow::Borrowed(text)
        } else {
            let mut held = mem::take(&mut self.remainder);
            held.push_str(text);
            Cow::Owned(held)
        };

        for action in parse(&input) {
            self.apply(action);
        }
    }

    /// Lines as observed under the window's line discipline.
    ///
    /// Cooked windows omit trailing rows holding only whitespace, however
    /// they were produced. Raw windows return every row.
    pub fn lines(&self) -> &[Line] {
        let mut end = self.lines.len();
        if self.discipline == LineDiscipline::Cooked {
            while end > 0 && self.lines[end - 1].is_blank() {
                end -= 1;
            }
        }
        &self.lines[..end]
    }

    /// Every stored row, regardless of line discipline.
    pub fn rows(&self) -> &[Line] {
        &self.lines
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn saved_cursor(&self) -> Option<CursorPosition> {
        self.saved_cursor
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn hyperlink(&self) -> Option<&Hyperlink> {
        self.hyperlink.as_ref()
    }

    /// Incomplete escape sequence held for the next chunk.
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    pub fn discipline(&self) -> LineDiscipline {
        self.discipline
    }

    /// Row at `row`, created (with any rows before it) if missing.
    fn line_mut(&mut self, row: usize) -> &mut Line {
        if row >= self.lines.len() {
            self.lines.resize_with(row + 1, Line::new);
        }
        &mut self.lines[row]
    }
}

impl fmt::Display for Window {
    /// The observed lines as plain text, trailing whitespace trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .lines()
            .iter()
            .map(|line| line.text().trim_end().to_string())
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
