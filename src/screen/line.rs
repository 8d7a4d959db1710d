//! A row of styled text.
//!
//! Lines are stored as runs of [`Chunk`]s rather than a fixed grid of cells,
//! so rows have no width limit. Writes overwrite by display column: the
//! existing chunks are split at the start and end of the written span and
//! the new chunk is placed between the two halves.

use serde::{Deserialize, Serialize};

use super::types::Chunk;
use crate::parser::EraseMode;
use crate::width::{string_width, units};

/// One row of the window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    chunks: Vec<Chunk>,
    /// Display width of the concatenated chunk text.
    width: usize,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from chunks, e.g. when restoring a serialized window.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        let mut line = Self {
            chunks: chunks.into_iter().filter(|c| !c.text.is_empty()).collect(),
            width: 0,
        };
        line.refresh_width();
        line
    }

    /// Chunks in column order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Display width of the line in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The printed text without styling.
    pub fn text(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// True when the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.chunks
            .iter()
            .all(|c| c.text.chars().all(char::is_whitespace))
    }

    /// Write `chunk` starting at display column `column`, overwriting whatever
    /// it covers. A gap between the end of the line and `column` is filled
    /// with unstyled spaces.
    pub(crate) fn write(&mut self, column: usize, chunk: Chunk) {
        let chunk_width = chunk.width();
        let end_of_line = self.columns();

        let (mut chunks, rest) = split_chunks(&self.chunks, column);
        if column > end_of_line {
            chunks.push(Chunk::blank(column - end_of_line));
        }
        let (_, after) = split_chunks(&rest, chunk_width);

        if !chunk.text.is_empty() {
            chunks.push(chunk);
        }
        chunks.extend(after);

        self.chunks = chunks;
        self.refresh_width();
    }

    /// Replace the addressed span with unstyled spaces.
    ///
    /// `ToBeginning` includes the cell under the cursor. Erasing never
    /// extends the line.
    pub(crate) fn erase(&mut self, column: usize, mode: EraseMode) {
        let end_of_line = self.columns();
        let (start, end) = match mode {
            EraseMode::ToEnd => (column, end_of_line),
            EraseMode::ToBeginning => (0, column.saturating_add(1).min(end_of_line)),
            EraseMode::All => (0, end_of_line),
        };
        if start < end {
            self.write(start, Chunk::blank(end - start));
        }
    }

    /// Columns covered by the chunks, measured chunk by chunk.
    fn columns(&self) -> usize {
        self.chunks.iter().map(Chunk::width).sum()
    }

    fn refresh_width(&mut self) {
        self.width = string_width(&self.text());
    }
}

/// Split a chunk list at display column `column`.
fn split_chunks(chunks: &[Chunk], column: usize) -> (Vec<Chunk>, Vec<Chunk>) {
    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut offset = 0;

    for chunk in chunks {
        let width = chunk.width();
        if offset + width <= column {
            before.push(chunk.clone());
        } else if offset >= column {
            after.push(chunk.clone());
        } else {
            let (left, right) = split_chunk(chunk, column - offset);
            before.extend(left);
            after.extend(right);
        }
        offset += width;
    }

    (before, after)
}

/// Split one chunk at a column inside it.
///
/// Zero-width characters stay with the character they follow. When the
/// column falls inside a wide character, each side keeps a space of the
/// chunk's style in place of its half.
fn split_chunk(chunk: &Chunk, column: usize) -> (Option<Chunk>, Option<Chunk>) {
    let mut left = String::new();
    let mut right = String::new();
    let mut offset = 0;

    for (cluster, width) in clusters(&chunk.text) {
        if offset + width <= column {
            left.push_str(cluster);
        } else if offset >= column {
            right.push_str(cluster);
        } else {
            left.push_str(&" ".repeat(column - offset));
            right.push_str(&" ".repeat(offset + width - column));
        }
        offset += width;
    }

    let side = |text: String| (!text.is_empty()).then(|| chunk.with_text(text));
    (side(left), side(right))
}

/// Group width units so that zero-width units follow the unit before them.
fn clusters(text: &str) -> Vec<(&str, usize)> {
    // (start, end, width) byte spans into `text`
    let mut spans: Vec<(usize, usize, usize)> = Vec::new();
    let mut offset = 0;
    for (unit, width) in units(text) {
        let end = offset + unit.len();
        match spans.last_mut() {
            Some(span) if width == 0 => span.1 = end,
            _ => spans.push((offset, end, width)),
        }
        offset = end;
    }
    spans
        .into_iter()
        .map(|(start, end, width)| (&text[start..end], width))
        .collect()
}
