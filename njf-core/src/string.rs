//! Quoted string scanning.
//!
//! Names are delimited by `"`. A backslash directly followed by a quote
//! is an escaped quote and does not close the string; no other escape
//! sequences exist. The raw bytes between the quotes are handed out
//! untouched - [`unescape_quotes`] is available for callers that want
//! the literal text.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use memchr::{memchr, memchr2};

/// Find the quote that closes a string whose contents start at `from`.
///
/// `from` is the index just after the opening `"`. Returns the index of
/// the closing `"`, or `None` if `bytes` ends first.
///
/// This is the only place that decides how long a string is. Brace
/// matching relies on it to step over string contents in one jump.
pub fn find_closing_quote(bytes: &[u8], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() {
        let hit = pos + memchr2(b'"', b'\\', &bytes[pos..])?;
        if bytes[hit] == b'"' {
            return Some(hit);
        }
        // Backslash: only `\"` is special, and it is consumed as a pair.
        pos = if bytes.get(hit + 1) == Some(&b'"') {
            hit + 2
        } else {
            hit + 1
        };
    }
    None
}

/// Replace every `\"` in a raw string with `"`.
///
/// Borrows when there is nothing to replace.
pub fn unescape_quotes(raw: &[u8]) -> Cow<'_, [u8]> {
    if !raw.windows(2).any(|pair| pair == b"\\\"") {
        return Cow::Borrowed(raw);
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(idx) = memchr(b'\\', rest) {
        out.extend_from_slice(&rest[..idx]);
        if rest.get(idx + 1) == Some(&b'"') {
            out.push(b'"');
            rest = &rest[idx + 2..];
        } else {
            out.push(b'\\');
            rest = &rest[idx + 1..];
        }
    }
    out.extend_from_slice(rest);
    Cow::Owned(out)
}
