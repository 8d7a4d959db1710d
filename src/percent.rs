//! Percent-encoding for hyperlink targets.
//!
//! Visible ASCII passes through untouched, so existing `%XX` escapes
//! survive. Control characters and everything outside ASCII are UTF-8
//! encoded and each byte written as `%XX`, which keeps a stray `ESC` from
//! ending up in re-emitted OSC 8 sequences.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn needs_encoding(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_control()
}

/// Percent-encode the control and non-ASCII characters of `url`.
pub fn encode_url(url: &str) -> String {
    if !url.chars().any(needs_encoding) {
        return url.to_owned();
    }

    let mut out = String::with_capacity(url.len() * 3);
    let mut buf = [0u8; 4];
    for c in url.chars() {
        if !needs_encoding(c) {
            out.push(c);
            continue;
        }
        for &byte in c.encode_utf8(&mut buf).as_bytes() {
            out.push('%');
            out.push(HEX[usize::from(byte >> 4)] as char);
            out.push(HEX[usize::from(byte & 0x0F)] as char);
        }
    }
    out
}
