//! Rendering of replayed windows.
//!
//! Three output forms are supported:
//! - plain: the observed text, trailing whitespace trimmed
//! - ansi: the observed text with each chunk's style re-emitted as a
//!   normalized SGR sequence and hyperlinks as OSC 8
//! - json: lines, chunks and styles serialized with serde

use serde::Serialize;

use crate::parser::Color;
use crate::screen::{Line, Style, Window};

const RESET: &str = "\x1b[0m";
const LINK_END: &str = "\x1b]8;;\x1b\\";

/// Render the observed lines as plain text.
pub fn render_plain(window: &Window) -> String {
    window.to_string()
}

/// Render the observed lines with styles and, optionally, hyperlinks.
///
/// Every chunk starts from a full reset so the output does not depend on
/// the receiving terminal's current state.
pub fn render_ansi(window: &Window, hyperlinks: bool) -> String {
    let lines: Vec<String> = window
        .lines()
        .iter()
        .map(|line| render_ansi_line(line, hyperlinks))
        .collect();
    lines.join("\n")
}

fn render_ansi_line(line: &Line, hyperlinks: bool) -> String {
    let mut output = String::with_capacity(line.width() * 2);

    for chunk in line.chunks() {
        push_sgr(&chunk.style, &mut output);
        match chunk.hyperlink.as_ref().filter(|_| hyperlinks) {
            Some(link) => {
                output.push_str("\x1b]8;");
                push_link_params(&link.params, &mut output);
                output.push(';');
                output.push_str(&link.url);
                output.push_str("\x1b\\");
                output.push_str(&chunk.text);
                output.push_str(LINK_END);
            }
            None => output.push_str(&chunk.text),
        }
    }

    if !line.is_empty() {
        output.push_str(RESET);
    }
    output
}

/// Params are written without control characters, which would otherwise
/// end or corrupt the sequence.
fn push_link_params(params: &[String], output: &mut String) {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            output.push(':');
        }
        output.extend(param.chars().filter(|c| !c.is_control()));
    }
}

/// Append `ESC[0;...m` for `style`, or a bare reset for the default style.
fn push_sgr(style: &Style, output: &mut String) {
    let mut params: Vec<String> = vec!["0".to_string()];

    let flags = [
        (style.bold, "1"),
        (style.faint, "2"),
        (style.italic, "3"),
        (style.underline, "4"),
        (style.blink, "5"),
        (style.inverted, "7"),
        (style.strikethrough, "9"),
        (style.fraktur, "20"),
        (style.framed, "51"),
    ];
    params.extend(
        flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, code)| code.to_string()),
    );

    if let Some(color) = style.foreground {
        params.push(color_param(color, 30, 90, 38));
    }
    if let Some(color) = style.background {
        params.push(color_param(color, 40, 100, 48));
    }

    output.push_str("\x1b[");
    output.push_str(&params.join(";"));
    output.push('m');
}

fn color_param(color: Color, base: u8, bright_base: u8, extended: u8) -> String {
    if let Color::Custom(r, g, b) = color {
        return format!("{extended};2;{r};{g};{b}");
    }
    match color.sgr_offset() {
        Some((offset, true)) => (bright_base + offset).to_string(),
        Some((offset, false)) => (base + offset).to_string(),
        None => base.to_string(),
    }
}

#[derive(Serialize)]
struct JsonWindow<'a> {
    lines: &'a [Line],
}

/// Render the observed lines as JSON.
pub fn render_json(window: &Window) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonWindow {
        lines: window.lines(),
    })
}
