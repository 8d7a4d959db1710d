//! Streaming replay.
//!
//! Reads raw bytes from any [`Read`] source in fixed-size chunks, decodes
//! them as UTF-8 and feeds each decoded chunk to a [`Window`] in arrival
//! order. Chunk boundaries may fall anywhere: inside a multi-byte character
//! (handled here) or inside an escape sequence (handled by the window's
//! remainder).

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::error::ReplayError;
use crate::screen::Window;

/// Incremental UTF-8 decoder.
///
/// An incomplete character at the end of a chunk is held back until the
/// next chunk arrives. Invalid bytes decode to U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes`, prefixed by anything held back from the last call.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut output = String::with_capacity(self.pending.len());
        let mut rest: &[u8] = &self.pending;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    output.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    // The prefix was just validated
                    output.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(len) => {
                            output.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        // Truncated character: keep it for the next chunk
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        let held = rest.to_vec();
        self.pending = held;
        output
    }

    /// Flush at end of input: held-back bytes become U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        self.pending.clear();
        char::REPLACEMENT_CHARACTER.to_string()
    }

    /// Number of bytes held back for the next chunk.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

/// Replay everything `reader` produces into `window`, `chunk_size` bytes at
/// a time.
///
/// A `chunk_size` of zero is treated as one.
pub fn replay<R: Read>(
    mut reader: R,
    mut window: Window,
    chunk_size: usize,
) -> Result<Window, ReplayError> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut decoder = Utf8Decoder::new();
    let mut chunks = 0usize;
    let mut total = 0usize;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        chunks += 1;
        total += n;

        let text = decoder.decode(&buf[..n]);
        debug!(
            bytes = n,
            held = decoder.pending(),
            remainder = window.remainder().len(),
            "Replaying chunk"
        );
        window.feed(&text);
    }

    let tail = decoder.finish();
    if !tail.is_empty() {
        window.feed(&tail);
    }
    if !window.remainder().is_empty() {
        debug!(
            remainder = ?window.remainder(),
            "Input ended inside an escape sequence"
        );
    }
    debug!(chunks, bytes = total, "Replay finished");

    Ok(window)
}
