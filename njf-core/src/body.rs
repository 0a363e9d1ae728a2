//! Body views.
//!
//! A `Body` is the byte range that holds zero or more objects: either a
//! whole document or the inside of an object's `{ ... }`. It is always
//! trimmed of surrounding whitespace when created and never changes
//! afterwards.

use core::fmt;
use core::ops::Range;

use alloc::string::String;

use crate::object::{Object, Objects};
use crate::span::Span;
use crate::whitespace;

/// Trimmed, read-only view of a run of objects.
///
/// The lifetime `'a` refers to the buffer the view was cut from; every
/// object name and identifier flag found inside is a slice of it.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Body<'a> {
    bytes: &'a [u8],
    /// Offset of `bytes[0]` within the root buffer.
    origin: usize,
}

impl<'a> Body<'a> {
    /// Create a body over an in-memory buffer, trimming outer whitespace.
    ///
    /// Nothing is copied and nothing is scanned beyond the trim.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_origin(buffer, 0)
    }

    /// Create a body over `buffer`, which starts `origin` bytes into some
    /// larger root buffer. Offsets in diagnostics are reported relative
    /// to that root.
    pub fn with_origin(buffer: &'a [u8], origin: usize) -> Self {
        let trimmed = whitespace::trim(buffer);
        Self {
            origin: origin + trimmed.start,
            bytes: &buffer[trimmed],
        }
    }

    /// A body with no bytes and therefore no objects.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Trimmed sub-body of `range` (relative to this body's bytes).
    pub(crate) fn sub(&self, range: Range<usize>) -> Self {
        Self::with_origin(&self.bytes[range.clone()], self.origin + range.start)
    }

    /// The trimmed bytes of this body.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Offset of the first byte of this body within the root buffer.
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Absolute span covered by this body.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.origin, self.origin + self.bytes.len())
    }

    /// Cursor positioned on the first object. Check `is_valid()` before
    /// using it: an empty body yields an invalid cursor straight away.
    #[inline]
    pub fn first_object(&self) -> Object<'a> {
        Object::first(*self)
    }

    /// Lazily iterate over the objects of this body.
    #[inline]
    pub fn objects(&self) -> Objects<'a> {
        Objects::new(*self)
    }

    /// Number of objects a cursor walks before it stops.
    ///
    /// Scans the whole body on every call.
    pub fn object_count(&self) -> usize {
        let mut count = 0;
        let mut object = self.first_object();
        while object.is_valid() {
            count += 1;
            object.advance();
        }
        count
    }
}

impl fmt::Debug for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("span", &self.span())
            .field("text", &String::from_utf8_lossy(self.bytes))
            .finish()
    }
}
