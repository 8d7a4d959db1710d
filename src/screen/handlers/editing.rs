//! Erase operation handlers.
//!
//! Handles CSI sequences for erasing:
//! - J: Erase in Display
//! - K: Erase in Line
//!
//! Erased cells become spaces in the default style with no hyperlink,
//! whatever style or hyperlink is currently active.

use super::super::Window;
use crate::parser::EraseMode;

impl Window {
    /// Handle Erase in Line (CSI K) on the cursor row.
    pub(crate) fn handle_erase_line(&mut self, mode: EraseMode) {
        let column = self.cursor.column;
        if let Some(line) = self.lines.get_mut(self.cursor.row) {
            line.erase(column, mode);
        }
    }

    /// Handle Erase in Display (CSI J).
    /// ToEnd: rest of the cursor row and every row below
    /// ToBeginning: every row above and the cursor row up to the cursor
    /// All: every row
    pub(crate) fn handle_erase_display(&mut self, mode: EraseMode) {
        let row = self.cursor.row;
        let column = self.cursor.column;
        for (index, line) in self.lines.iter_mut().enumerate() {
            let line_mode = match (mode, index.cmp(&row)) {
                (EraseMode::All, _) => Some(EraseMode::All),
                (EraseMode::ToEnd, std::cmp::Ordering::Greater) => Some(EraseMode::All),
                (EraseMode::ToBeginning, std::cmp::Ordering::Less) => Some(EraseMode::All),
                (_, std::cmp::Ordering::Equal) => Some(mode),
                _ => None,
            };
            if let Some(line_mode) = line_mode {
                line.erase(column, line_mode);
            }
        }
    }
}
