//! Parser tests against the public API.

use ansi_replay::{parse, Action, Color, EraseMode, LineDiscipline, Window};
use pretty_assertions::assert_eq;

fn print(text: &str) -> Action {
    Action::Print(text.to_string())
}

#[test]
fn extended_color_split_across_updates() {
    let window = Window::new(LineDiscipline::Raw)
        .update("\x1b[38;5;")
        .update("196mhot");
    assert_eq!(window.remainder(), "");
    assert_eq!(window.to_string(), "hot");
    assert_eq!(window.style().foreground, Some(Color::Custom(255, 0, 0)));

    let chunks = window.rows()[0].chunks();
    assert_eq!(chunks[0].style.foreground, Some(Color::Custom(255, 0, 0)));
}

#[test]
fn unknown_final_byte_is_dropped() {
    assert_eq!(parse("foo\x1b[1Zbar"), vec![print("foo"), print("bar")]);
}

#[test]
fn hyperlink_start_and_end() {
    assert_eq!(
        parse("\x1b]8;;http://x\u{0007}t\x1b]8;;\u{0007}"),
        vec![
            Action::HyperlinkStart {
                params: vec![],
                url: "http://x".to_string(),
            },
            print("t"),
            Action::HyperlinkEnd,
        ]
    );
}

#[test]
fn hyperlink_params_and_encoded_url() {
    assert_eq!(
        parse("\x1b]8;id=7:kind=file;file:///tmp/ä b%20c;d\x1b\\"),
        vec![Action::HyperlinkStart {
            params: vec!["id=7".to_string(), "kind=file".to_string()],
            url: "file:///tmp/%C3%A4 b%20c;d".to_string(),
        }]
    );
}

#[test]
fn marker_sequences() {
    // Private-mode toggles are recognized syntax but not modeled
    assert_eq!(parse("a\x1b[?25lb\x1b[?25h"), vec![print("a"), print("b")]);
    // A marker after parameters invalidates the whole sequence
    assert_eq!(parse("a\x1b[1?2Jb"), vec![print("a"), print("b")]);
}

#[test]
fn extended_colors() {
    assert_eq!(
        parse("\x1b[38;5;196m\x1b[48;2;10;20;30m\x1b[38;5;3m"),
        vec![
            Action::SetForeground(Some(Color::Custom(255, 0, 0))),
            Action::SetBackground(Some(Color::Custom(10, 20, 30))),
            Action::SetForeground(Some(Color::Yellow)),
        ]
    );
}

#[test]
fn out_of_range_palette_index_is_ignored() {
    assert_eq!(parse("\x1b[38;5;300;1m"), vec![Action::SetBold(true)]);
}

#[test]
fn cursor_and_erase_commands() {
    assert_eq!(
        parse("\x1b[3A\x1b[B\x1b[0C\x1b[2D\x1b[5G\x1b[2;3f\x1b[1J\x1b[K"),
        vec![
            Action::CursorUp(3),
            Action::CursorDown(1),
            Action::CursorForward(1),
            Action::CursorBackward(2),
            Action::CursorColumn(4),
            Action::CursorPosition(2, 3),
            Action::EraseDisplay(EraseMode::ToBeginning),
            Action::EraseLine(EraseMode::ToEnd),
        ]
    );
}

#[test]
fn next_and_previous_line() {
    assert_eq!(
        parse("\x1b[2E\x1b[F"),
        vec![
            Action::CursorDown(2),
            Action::CursorColumn(0),
            Action::CursorUp(1),
            Action::CursorColumn(0),
        ]
    );
}

#[test]
fn remainder_resumes_where_it_stopped() {
    let first = parse("ab\x1b]8;;http://exa");
    let Some(Action::Remainder(rest)) = first.last() else {
        panic!("expected a remainder, got {first:?}");
    };
    let resumed = parse(&format!("{rest}mple\x07c"));
    assert_eq!(
        resumed,
        vec![
            Action::HyperlinkStart {
                params: vec![],
                url: "http://example".to_string(),
            },
            print("c"),
        ]
    );
}
