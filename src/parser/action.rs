//! Parser output types.
//!
//! Contains the closed set of actions produced by [`parse`](super::parse):
//! - Action: one semantic step (print, cursor move, style change, ...)
//! - Color: the 16 named ANSI colors plus 24-bit custom colors
//! - EraseMode: which part of a line or display an erase addresses

use serde::{Deserialize, Serialize};

/// ANSI colors.
///
/// 256-color palette entries above 15 are expanded to [`Color::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// RGB color
    Custom(u8, u8, u8),
}

impl Color {
    const STANDARD: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    const BRIGHT: [Color; 8] = [
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Standard color by offset 0..=7 (as in SGR 30-37).
    pub fn standard(offset: u32) -> Option<Color> {
        Self::STANDARD.get(offset as usize).copied()
    }

    /// Bright color by offset 0..=7 (as in SGR 90-97).
    pub fn bright(offset: u32) -> Option<Color> {
        Self::BRIGHT.get(offset as usize).copied()
    }

    /// Color from the xterm 256-color palette.
    ///
    /// 0-15 map to the named colors, 16-231 to the 6x6x6 color cube and
    /// 232-255 to the grayscale ramp.
    pub fn palette(index: u8) -> Color {
        const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
        match index {
            0..=7 => Self::STANDARD[usize::from(index)],
            8..=15 => Self::BRIGHT[usize::from(index - 8)],
            16..=231 => {
                let i = index - 16;
                Color::Custom(
                    LEVELS[usize::from(i / 36)],
                    LEVELS[usize::from((i / 6) % 6)],
                    LEVELS[usize::from(i % 6)],
                )
            }
            232..=255 => {
                let level = 8 + 10 * (index - 232);
                Color::Custom(level, level, level)
            }
        }
    }

    /// SGR offset of a named color (0-7) and whether it is bright.
    /// Returns `None` for custom colors.
    pub fn sgr_offset(self) -> Option<(u8, bool)> {
        if let Some(i) = Self::STANDARD.iter().position(|&c| c == self) {
            return Some((i as u8, false));
        }
        Self::BRIGHT
            .iter()
            .position(|&c| c == self)
            .map(|i| (i as u8, true))
    }
}

/// Portion of a line or display addressed by an erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseMode {
    /// From the cursor to the end.
    ToEnd,
    /// From the start up to and including the cursor.
    ToBeginning,
    /// Everything.
    All,
}

impl EraseMode {
    /// Map the `J`/`K` parameter: 0 or missing is `ToEnd`, 1 `ToBeginning`,
    /// anything else `All`.
    pub fn from_param(param: Option<u32>) -> Self {
        match param.unwrap_or(0) {
            0 => EraseMode::ToEnd,
            1 => EraseMode::ToBeginning,
            _ => EraseMode::All,
        }
    }
}

/// One semantic step decoded from terminal output.
///
/// Actions are applied in order; reordering them changes the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set (or with `None`, reset) the foreground color.
    SetForeground(Option<Color>),
    /// Set (or with `None`, reset) the background color.
    SetBackground(Option<Color>),
    SetBold(bool),
    SetFaint(bool),
    SetItalic(bool),
    SetUnderline(bool),
    SetBlink(bool),
    SetInverted(bool),
    SetStrikethrough(bool),
    SetFraktur(bool),
    SetFramed(bool),
    /// A run of printable text.
    Print(String),
    /// An incomplete escape sequence at the end of the input. Always the last
    /// action; prepend it to the next chunk before parsing again.
    Remainder(String),
    /// `\r`
    CarriageReturn,
    /// `\n`
    Linebreak,
    CursorUp(usize),
    CursorDown(usize),
    CursorForward(usize),
    CursorBackward(usize),
    /// Absolute column, 0-indexed.
    CursorColumn(usize),
    /// Absolute position as sent on the wire: 1-indexed row and column.
    CursorPosition(usize, usize),
    SaveCursorPosition,
    RestoreCursorPosition,
    EraseDisplay(EraseMode),
    EraseLine(EraseMode),
    /// OSC 8 hyperlink start. `url` is percent-encoded.
    HyperlinkStart { params: Vec<String>, url: String },
    /// OSC 8 hyperlink end.
    HyperlinkEnd,
}

impl Action {
    /// The eleven actions that SGR 0 expands to.
    pub fn reset_all() -> [Action; 11] {
        [
            Action::SetForeground(None),
            Action::SetBackground(None),
            Action::SetBold(false),
            Action::SetFaint(false),
            Action::SetItalic(false),
            Action::SetUnderline(false),
            Action::SetBlink(false),
            Action::SetInverted(false),
            Action::SetStrikethrough(false),
            Action::SetFraktur(false),
            Action::SetFramed(false),
        ]
    }
}
