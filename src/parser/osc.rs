//! OSC 8 hyperlink lexing.
//!
//! `ESC ] 8 ; params ; url ST` where ST is BEL or `ESC \`. The params segment
//! ends at the first `;` and holds `:`-separated `key=value` pairs. The URL
//! runs to the terminator and may itself contain `;`. An empty URL closes the
//! active hyperlink.

use super::action::Action;
use super::{log_malformed_osc, Step, BEL, ESC};
use crate::percent::encode_url;

const OSC8_PREFIX: &[u8] = b"]8;";

/// Which part of the hyperlink sequence is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OscState {
    ParamSegment,
    Url,
}

/// Lex an OSC 8 sequence whose `ESC` is at `start`, appending the decoded action.
///
/// Returns [`Step::Unrecognized`] when the bytes after `ESC` are not `]8;`.
pub(super) fn lex_osc8(input: &str, start: usize, out: &mut Vec<Action>) -> Step {
    let bytes = input.as_bytes();
    let available = &bytes[start + 1..];
    let prefix_len = available.len().min(OSC8_PREFIX.len());
    if available[..prefix_len] != OSC8_PREFIX[..prefix_len] {
        return Step::Unrecognized;
    }
    if prefix_len < OSC8_PREFIX.len() {
        return Step::Incomplete;
    }

    let body_start = start + 1 + OSC8_PREFIX.len();
    let mut state = OscState::ParamSegment;
    let mut url_start = body_start;
    let mut pos = body_start;

    while pos < bytes.len() {
        let terminator_len = match bytes[pos] {
            BEL => Some(1),
            ESC => match bytes.get(pos + 1) {
                Some(b'\\') => Some(2),
                Some(_) => None,
                None => return Step::Incomplete,
            },
            _ => None,
        };

        match (state, terminator_len) {
            (OscState::ParamSegment, Some(len)) => {
                log_malformed_osc(&input[start..pos + len]);
                return Step::Consumed(pos + len);
            }
            (OscState::ParamSegment, None) if bytes[pos] == b';' => {
                state = OscState::Url;
                url_start = pos + 1;
            }
            (OscState::Url, Some(len)) => {
                let params = split_params(&input[body_start..url_start - 1]);
                let url = &input[url_start..pos];
                if url.is_empty() {
                    out.push(Action::HyperlinkEnd);
                } else {
                    out.push(Action::HyperlinkStart {
                        params,
                        url: encode_url(url),
                    });
                }
                return Step::Consumed(pos + len);
            }
            _ => {}
        }
        pos += 1;
    }

    Step::Incomplete
}

fn split_params(segment: &str) -> Vec<String> {
    segment
        .split(':')
        .filter(|param| !param.is_empty())
        .map(str::to_owned)
        .collect()
}
