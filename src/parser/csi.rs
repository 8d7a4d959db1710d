//! CSI (Control Sequence Introducer) lexing.
//!
//! Handles `ESC [` sequences:
//! - A/B/C/D: Cursor Up/Down/Forward/Back
//! - E/F: Cursor Next/Previous Line
//! - G: Cursor Horizontal Absolute
//! - H/f: Cursor Position
//! - s/u: Save/Restore Cursor Position
//! - J/K: Erase in Display/Line
//! - m: SGR (see `sgr.rs`)
//!
//! Anything else is consumed through its final byte and dropped.

use super::action::{Action, EraseMode};
use super::sgr::decode_sgr;
use super::{log_invalid_csi, log_unhandled_csi, Step, ESC};

/// Where the scanner is inside the parameter bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CsiState {
    /// Directly after `ESC [`; a marker is still allowed.
    Start,
    /// A leading `<`, `=`, `>` or `?` has been seen.
    AfterMarker,
    /// Collecting digits and `;` separators.
    CollectingParams,
    /// A byte appeared that makes the sequence unusable; skip to the final byte.
    Invalid,
}

/// Largest value a single parameter can take. Larger values are clamped so
/// a short sequence cannot move the cursor billions of cells.
const MAX_PARAM: u32 = u16::MAX as u32;

/// Lex a CSI sequence whose `ESC` is at `start`, appending decoded actions.
pub(super) fn lex_csi(input: &str, start: usize, out: &mut Vec<Action>) -> Step {
    let bytes = input.as_bytes();
    let mut state = CsiState::Start;
    let mut marker = None;
    let mut params: Vec<Option<u32>> = Vec::new();
    let mut current: Option<u32> = None;
    let mut pos = start + 2;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match byte {
            b'0'..=b'9' if state != CsiState::Invalid => {
                let digit = u32::from(byte - b'0');
                let value = current.unwrap_or(0).saturating_mul(10).saturating_add(digit);
                current = Some(value.min(MAX_PARAM));
                state = CsiState::CollectingParams;
            }
            b';' if state != CsiState::Invalid => {
                params.push(current.take());
                state = CsiState::CollectingParams;
            }
            b'<' | b'=' | b'>' | b'?' => {
                if state == CsiState::Start {
                    marker = Some(byte);
                    state = CsiState::AfterMarker;
                } else {
                    state = CsiState::Invalid;
                }
            }
            // A new escape cancels the unfinished sequence.
            ESC => {
                log_invalid_csi(&input[start..pos]);
                return Step::Consumed(pos);
            }
            0x20..=0x3F => state = CsiState::Invalid,
            _ => {
                let end = pos + char_len_at(input, pos);
                let final_char = &input[pos..end];
                if state == CsiState::Invalid {
                    log_invalid_csi(&input[start..end]);
                    return Step::Consumed(end);
                }
                if state == CsiState::CollectingParams {
                    params.push(current);
                }
                if !decode_csi(final_char, &params, out) {
                    log_unhandled_csi(final_char, &params, marker);
                }
                return Step::Consumed(end);
            }
        }
        pos += 1;
    }

    Step::Incomplete
}

/// Length in bytes of the character starting at byte offset `pos`.
fn char_len_at(input: &str, pos: usize) -> usize {
    input[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Repeat count for cursor motions: missing or zero means 1.
fn count(param: Option<u32>) -> usize {
    param.unwrap_or(0).max(1) as usize
}

/// Decode a complete CSI command. Returns false for unrecognized final bytes.
fn decode_csi(final_char: &str, params: &[Option<u32>], out: &mut Vec<Action>) -> bool {
    let first = params.first().copied().flatten();
    match final_char {
        "m" => decode_sgr(params, out),
        "A" => out.push(Action::CursorUp(count(first))),
        "B" => out.push(Action::CursorDown(count(first))),
        "C" => out.push(Action::CursorForward(count(first))),
        "D" => out.push(Action::CursorBackward(count(first))),
        "E" => {
            out.push(Action::CursorDown(count(first)));
            out.push(Action::CursorColumn(0));
        }
        "F" => {
            out.push(Action::CursorUp(count(first)));
            out.push(Action::CursorColumn(0));
        }
        "G" => out.push(Action::CursorColumn(count(first) - 1)),
        "H" | "f" => {
            let row = count(first);
            let col = count(params.get(1).copied().flatten());
            out.push(Action::CursorPosition(row, col));
        }
        "s" => out.push(Action::SaveCursorPosition),
        "u" => out.push(Action::RestoreCursorPosition),
        "J" => out.push(Action::EraseDisplay(EraseMode::from_param(first))),
        "K" => out.push(Action::EraseLine(EraseMode::from_param(first))),
        _ => return false,
    }
    true
}
