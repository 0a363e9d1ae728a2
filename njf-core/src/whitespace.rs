//! Whitespace classification and trimming.
//!
//! The format only knows five separator bytes: space, tab, carriage
//! return, vertical tab and newline. Everything here works on raw bytes
//! and never reads outside the slice it is given.

use core::ops::Range;

/// Check whether `b` separates tokens.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\x0B' | b'\n')
}

/// Index of the first non-space byte at or after `from`.
///
/// Returns `bytes.len()` when only spaces remain (or `from` is already
/// past the end).
#[inline]
pub fn skip_left(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() && is_space(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Exclusive end after dropping the spaces immediately before `end`.
///
/// `end` is clamped to `bytes.len()`.
#[inline]
pub fn skip_right(bytes: &[u8], end: usize) -> usize {
    let mut pos = end.min(bytes.len());
    while pos > 0 && is_space(bytes[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Range of `bytes` with leading and trailing spaces removed.
///
/// An all-space input yields an empty range positioned at its end.
pub fn trim(bytes: &[u8]) -> Range<usize> {
    let start = skip_left(bytes, 0);
    let end = skip_right(bytes, bytes.len()).max(start);
    start..end
}
