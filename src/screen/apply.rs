//! Action dispatch.
//!
//! Applies one parsed [`Action`] to the window, delegating to the handler
//! modules. Printing lives here since every other handler builds on the
//! line it writes into.

use super::types::Chunk;
use super::Window;
use crate::parser::Action;
use crate::width::string_width;

impl Window {
    /// Apply a single action.
    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::Print(text) => self.print(text),
            Action::Remainder(text) => self.remainder = text,

            // Line controls and cursor motion (handlers/cursor.rs)
            Action::CarriageReturn => self.handle_carriage_return(),
            Action::Linebreak => self.handle_linebreak(),
            Action::CursorUp(n) => self.handle_cursor_up(n),
            Action::CursorDown(n) => self.handle_cursor_down(n),
            Action::CursorForward(n) => self.handle_cursor_forward(n),
            Action::CursorBackward(n) => self.handle_cursor_backward(n),
            Action::CursorColumn(column) => self.handle_cursor_column(column),
            Action::CursorPosition(row, column) => self.handle_cursor_position(row, column),
            Action::SaveCursorPosition => self.handle_save_cursor(),
            Action::RestoreCursorPosition => self.handle_restore_cursor(),

            // Erasing (handlers/editing.rs)
            Action::EraseLine(mode) => self.handle_erase_line(mode),
            Action::EraseDisplay(mode) => self.handle_erase_display(mode),

            // Hyperlinks (handlers/hyperlink.rs)
            Action::HyperlinkStart { params, url } => self.handle_hyperlink_start(params, url),
            Action::HyperlinkEnd => self.handle_hyperlink_end(),

            // Style
            Action::SetForeground(color) => self.style.foreground = color,
            Action::SetBackground(color) => self.style.background = color,
            Action::SetBold(on) => self.style.bold = on,
            Action::SetFaint(on) => self.style.faint = on,
            Action::SetItalic(on) => self.style.italic = on,
            Action::SetUnderline(on) => self.style.underline = on,
            Action::SetBlink(on) => self.style.blink = on,
            Action::SetInverted(on) => self.style.inverted = on,
            Action::SetStrikethrough(on) => self.style.strikethrough = on,
            Action::SetFraktur(on) => self.style.fraktur = on,
            Action::SetFramed(on) => self.style.framed = on,
        }
    }

    /// Write text at the cursor with the current style and hyperlink, then
    /// advance the cursor past it.
    fn print(&mut self, text: String) {
        let width = string_width(&text);
        let chunk = Chunk::new(text, self.style, self.hyperlink.clone());
        let row = self.cursor.row;
        let column = self.cursor.column;
        self.line_mut(row).write(column, chunk);
        self.cursor.column += width;
    }
}
