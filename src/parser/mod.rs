//! ANSI escape sequence parser.
//!
//! Turns a chunk of terminal output into an ordered list of [`Action`]s.
//! Parsing never fails: unknown or malformed sequences are dropped, and a
//! sequence cut off by the end of the chunk is returned as a trailing
//! [`Action::Remainder`] so the caller can prepend it to the next chunk.
//!
//! The parser keeps no state between calls, which makes it safe to use
//! from any number of independent streams.

mod action;
mod csi;
mod osc;
mod sgr;

pub use action::{Action, Color, EraseMode};

use tracing::trace;

pub(crate) const ESC: u8 = 0x1b;
pub(crate) const BEL: u8 = 0x07;

/// Outcome of lexing an escape sequence starting at an `ESC` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The sequence ended at this byte offset (exclusive).
    Consumed(usize),
    /// The input ended before the sequence was terminated.
    Incomplete,
    /// The byte after `ESC` introduces nothing we know; only the `ESC` is dropped.
    Unrecognized,
}

/// Parse `text` into actions.
///
/// Consecutive plain characters are merged into a single [`Action::Print`].
///
/// ```
/// use ansi_replay::parser::{parse, Action, Color};
///
/// assert_eq!(
///     parse("ok \x1b[32mpass"),
///     vec![
///         Action::Print("ok ".into()),
///         Action::SetForeground(Some(Color::Green)),
///         Action::Print("pass".into()),
///     ]
/// );
/// ```
pub fn parse(text: &str) -> Vec<Action> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    input: &'a str,
    actions: Vec<Action>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            actions: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Action> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut run_start = 0;
        let mut pos = 0;

        // `\r`, `\n` and ESC never occur inside a multi-byte UTF-8 sequence,
        // so byte offsets taken at them are always char boundaries.
        while pos < bytes.len() {
            match bytes[pos] {
                b'\r' => {
                    self.flush_print(run_start, pos);
                    self.actions.push(Action::CarriageReturn);
                    pos += 1;
                    run_start = pos;
                }
                b'\n' => {
                    self.flush_print(run_start, pos);
                    self.actions.push(Action::Linebreak);
                    pos += 1;
                    run_start = pos;
                }
                ESC => {
                    self.flush_print(run_start, pos);
                    match self.lex_escape(pos) {
                        Step::Consumed(end) => pos = end,
                        Step::Unrecognized => pos += 1,
                        Step::Incomplete => {
                            self.actions.push(Action::Remainder(input[pos..].to_owned()));
                            return self.actions;
                        }
                    }
                    run_start = pos;
                }
                _ => pos += 1,
            }
        }

        self.flush_print(run_start, pos);
        self.actions
    }

    fn flush_print(&mut self, start: usize, end: usize) {
        if start < end {
            self.actions
                .push(Action::Print(self.input[start..end].to_owned()));
        }
    }

    /// Dispatch on the byte following the `ESC` at `start`.
    fn lex_escape(&mut self, start: usize) -> Step {
        let input = self.input;
        let Some(&introducer) = input.as_bytes().get(start + 1) else {
            return Step::Incomplete;
        };

        match introducer {
            b'[' => csi::lex_csi(input, start, &mut self.actions),
            b']' => osc::lex_osc8(input, start, &mut self.actions),
            // Charset designation (G0-G3): not modeled, consumed silently.
            b'(' | b')' | b'*' | b'+' => match input[start + 2..].chars().next() {
                Some(charset) => Step::Consumed(start + 2 + charset.len_utf8()),
                None => Step::Incomplete,
            },
            _ => {
                log_unhandled_esc(&input[start + 1..]);
                Step::Unrecognized
            }
        }
    }
}

/// Log an unhandled CSI sequence for debugging.
pub(crate) fn log_unhandled_csi(action: &str, params: &[Option<u32>], marker: Option<u8>) {
    trace!(
        action = %action,
        params = ?params,
        marker = ?marker.map(char::from),
        "Unhandled CSI sequence"
    );
}

/// Log a CSI sequence that was dropped because of misplaced bytes.
pub(crate) fn log_invalid_csi(sequence: &str) {
    trace!(sequence = ?sequence, "Invalid CSI sequence");
}

/// Log an SGR code with no table entry.
pub(crate) fn log_unhandled_sgr(code: u32) {
    trace!(code = code, "Unhandled SGR code");
}

/// Log a hyperlink sequence that was terminated inside its params segment.
pub(crate) fn log_malformed_osc(sequence: &str) {
    trace!(sequence = ?sequence, "Malformed OSC 8 sequence");
}

/// Log an unhandled ESC sequence for debugging.
fn log_unhandled_esc(rest: &str) {
    if let Some(c) = rest.chars().next() {
        trace!(byte_char = %c, "Unhandled ESC sequence");
    }
}
