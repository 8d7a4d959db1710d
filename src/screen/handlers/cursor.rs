//! Cursor movement and positioning handlers.
//!
//! Handles:
//! - CR / LF
//! - CSI A/B/C/D: Cursor Up/Down/Forward/Back
//! - CSI G: Cursor Horizontal Absolute
//! - CSI H/f: Cursor Position
//! - CSI s/u: Save/Restore Cursor Position
//!
//! Rows and columns are clamped at 0 but have no upper bound.

use tracing::trace;

use super::super::Window;

impl Window {
    /// Move cursor to start of current line.
    pub(crate) fn handle_carriage_return(&mut self) {
        self.cursor.column = 0;
    }

    /// Move cursor down one row, keeping the column.
    /// The row is created so that it is kept by raw windows.
    pub(crate) fn handle_linebreak(&mut self) {
        self.cursor.row += 1;
        let row = self.cursor.row;
        self.line_mut(row);
    }

    /// Move cursor up by n rows (CSI A).
    pub(crate) fn handle_cursor_up(&mut self, n: usize) {
        self.cursor.row = self.cursor.row.saturating_sub(n);
    }

    /// Move cursor down by n rows (CSI B).
    pub(crate) fn handle_cursor_down(&mut self, n: usize) {
        self.cursor.row = self.cursor.row.saturating_add(n);
    }

    /// Move cursor forward by n columns (CSI C).
    pub(crate) fn handle_cursor_forward(&mut self, n: usize) {
        self.cursor.column = self.cursor.column.saturating_add(n);
    }

    /// Move cursor back by n columns (CSI D).
    pub(crate) fn handle_cursor_backward(&mut self, n: usize) {
        self.cursor.column = self.cursor.column.saturating_sub(n);
    }

    /// Set cursor column, 0-indexed (CSI G).
    pub(crate) fn handle_cursor_column(&mut self, column: usize) {
        self.cursor.column = column;
    }

    /// Set cursor position to row, col (CSI H / CSI f).
    /// Parameters are 1-indexed, converted to 0-indexed internally.
    pub(crate) fn handle_cursor_position(&mut self, row: usize, column: usize) {
        self.cursor.row = row.saturating_sub(1);
        self.cursor.column = column.saturating_sub(1);
    }

    /// Save cursor position (CSI s).
    pub(crate) fn handle_save_cursor(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// Restore cursor position (CSI u).
    pub(crate) fn handle_restore_cursor(&mut self) {
        match self.saved_cursor {
            Some(position) => self.cursor = position,
            None => trace!("Restore cursor without saved position"),
        }
    }
}
