//! SGR (Select Graphic Rendition) decoding.
//!
//! Maps CSI m parameters to style actions:
//! - Attributes (bold, faint, italic, underline, blink, inverse, ...)
//! - Colors (foreground and background, standard and bright)
//! - 256-color and RGB extended colors
//!
//! Each parameter is decoded independently; codes without a table entry are
//! skipped without affecting the rest of the list.

use std::slice::Iter;

use super::action::{Action, Color};
use super::log_unhandled_sgr;

/// Decode SGR parameters into actions, appending to `out`.
///
/// Missing parameters count as 0, and an empty list is a single reset.
pub(super) fn decode_sgr(params: &[Option<u32>], out: &mut Vec<Action>) {
    if params.is_empty() {
        out.extend(Action::reset_all());
        return;
    }

    let mut iter = params.iter();
    while let Some(param) = iter.next() {
        let code = param.unwrap_or(0);
        match code {
            0 => out.extend(Action::reset_all()),
            1 => out.push(Action::SetBold(true)),
            2 => out.push(Action::SetFaint(true)),
            3 => out.push(Action::SetItalic(true)),
            4 => out.push(Action::SetUnderline(true)),
            5 => out.push(Action::SetBlink(true)),
            // rapid blink
            6 => {}
            7 => out.push(Action::SetInverted(true)),
            9 => out.push(Action::SetStrikethrough(true)),
            20 => out.push(Action::SetFraktur(true)),
            21 => out.push(Action::SetBold(false)),
            22 => {
                out.push(Action::SetFaint(false));
                out.push(Action::SetBold(false));
            }
            23 => {
                out.push(Action::SetItalic(false));
                out.push(Action::SetFraktur(false));
            }
            24 => out.push(Action::SetUnderline(false)),
            25 => out.push(Action::SetBlink(false)),
            27 => out.push(Action::SetInverted(false)),
            29 => out.push(Action::SetStrikethrough(false)),
            // Standard foreground colors (30-37)
            30..=37 => out.push(Action::SetForeground(Color::standard(code - 30))),
            38 => {
                if let Some(color) = extended_color(&mut iter) {
                    out.push(Action::SetForeground(Some(color)));
                }
            }
            39 => out.push(Action::SetForeground(None)),
            // Standard background colors (40-47)
            40..=47 => out.push(Action::SetBackground(Color::standard(code - 40))),
            48 => {
                if let Some(color) = extended_color(&mut iter) {
                    out.push(Action::SetBackground(Some(color)));
                }
            }
            49 => out.push(Action::SetBackground(None)),
            51 => out.push(Action::SetFramed(true)),
            54 => out.push(Action::SetFramed(false)),
            // Bright foreground colors (90-97)
            90..=97 => out.push(Action::SetForeground(Color::bright(code - 90))),
            // Bright background colors (100-107)
            100..=107 => out.push(Action::SetBackground(Color::bright(code - 100))),
            _ => log_unhandled_sgr(code),
        }
    }
}

/// Parse the tail of a 38/48 extended color: `5;n` or `2;r;g;b`.
///
/// Consumes what it reads even when the color is malformed, so the
/// remaining parameters are decoded from the right position.
fn extended_color(iter: &mut Iter<'_, Option<u32>>) -> Option<Color> {
    let mode = iter.next().copied().flatten()?;
    match mode {
        5 => {
            let index = iter.next().copied().flatten()?;
            match u8::try_from(index) {
                Ok(index) => Some(Color::palette(index)),
                Err(_) => {
                    log_unhandled_sgr(index);
                    None
                }
            }
        }
        2 => {
            let r = iter.next().copied().flatten();
            let g = iter.next().copied().flatten();
            let b = iter.next().copied().flatten();
            match (r, g, b) {
                (Some(r), Some(g), Some(b)) => Some(Color::Custom(channel(r), channel(g), channel(b))),
                _ => None,
            }
        }
        _ => {
            log_unhandled_sgr(mode);
            None
        }
    }
}

fn channel(value: u32) -> u8 {
    value.min(255) as u8
}
