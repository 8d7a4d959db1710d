//! Display width of characters and strings, in terminal cells.
//!
//! Common scripts resolve through fast range checks. Everything else falls
//! back to the `unicode-width` tables, with East Asian ambiguous characters
//! treated as narrow.
//!
//! String width is not the plain sum of character widths: a pair of
//! regional indicators renders as one flag, and a variation selector forces
//! text (1 cell) or emoji (2 cells) presentation of the preceding character.

use unicode_width::UnicodeWidthChar;

/// Variation selector 15: force text presentation.
const TEXT_PRESENTATION: char = '\u{FE0E}';
/// Variation selector 16: force emoji presentation.
const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// CJK ranges that are always two cells wide.
const WIDE_FAST: &[(u32, u32)] = &[
    (0x3040, 0x312F), // Hiragana, Katakana, Bopomofo
    (0x4E00, 0x9FFF), // CJK Unified Ideographs
    (0xAC00, 0xD7AF), // Hangul Syllables
    (0xF900, 0xFAFF), // CJK Compatibility Ideographs
];

/// Emoji blocks that are always two cells wide.
const EMOJI_FAST: &[(u32, u32)] = &[
    (0x2600, 0x26FF),   // Miscellaneous Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
];

/// Code points that never occupy a cell.
const ZERO_WIDTH: &[(u32, u32)] = &[
    (0x200B, 0x200D),   // ZWSP, ZWNJ, ZWJ
    (0xFE00, 0xFE0F),   // Variation Selectors
    (0xE0100, 0xE01EF), // Variation Selectors Supplement
];

/// Binary search over a table of disjoint ranges sorted by first code point.
fn in_table(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(first, last)| {
            if last < cp {
                std::cmp::Ordering::Less
            } else if first > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns true for the 26 regional indicator symbols (U+1F1E6..=U+1F1FF).
pub fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Display width of a single character: 0, 1 or 2 cells.
pub fn char_width(c: char) -> usize {
    let cp = c as u32;
    match cp {
        0x00..=0x1F | 0x7F => return 0,
        0x20..=0x7E => return 1,
        _ => {}
    }
    if in_table(WIDE_FAST, cp) || in_table(EMOJI_FAST, cp) {
        return 2;
    }
    if in_table(ZERO_WIDTH, cp) {
        return 0;
    }
    // A lone regional indicator renders as a letter; pairs are handled by `units`.
    if is_regional_indicator(c) {
        return 1;
    }
    match c.width() {
        Some(w) => w.min(2),
        None => 1,
    }
}

/// Display width of a string in cells.
///
/// Characters are measured independently, so combining marks add nothing to
/// their base character. Regional indicator pairs and variation selector
/// suffixes are measured as one unit.
pub fn string_width(text: &str) -> usize {
    units(text).map(|(_, width)| width).sum()
}

/// Splits `text` into width units, each paired with its display width.
///
/// A unit is a regional indicator pair, a character followed by a variation
/// selector, or a single character. Concatenating the units yields `text`.
pub fn units(text: &str) -> Units<'_> {
    Units { rest: text }
}

/// Iterator returned by [`units`].
#[derive(Debug, Clone)]
pub struct Units<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Units<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let current = chars.next()?;
        let first_len = current.len_utf8();

        let (len, width) = match chars.next() {
            Some(next) if is_regional_indicator(current) && is_regional_indicator(next) => {
                (first_len + next.len_utf8(), 2)
            }
            Some(TEXT_PRESENTATION) => (first_len + TEXT_PRESENTATION.len_utf8(), 1),
            Some(EMOJI_PRESENTATION) => (first_len + EMOJI_PRESENTATION.len_utf8(), 2),
            _ => (first_len, char_width(current)),
        };

        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((unit, width))
    }
}
