//! Owned document buffers.
//!
//! The scanner itself only borrows. `File` is the one place a buffer is
//! owned: it reads a document from disk (or takes a `Vec` already in
//! memory), appends a NUL sentinel that is never part of the body, and
//! remembers the whitespace-trimmed range.
//!
//! Every `Body`, `Object` and `Flag` obtained from a `File` borrows it,
//! so releasing the file while a view is alive does not compile.

use std::fs;
use std::io::Read;
use std::ops::Range;
use std::path::Path;

use tracing::debug;

use crate::body::Body;
use crate::error::LoadError;
use crate::span::Location;
use crate::whitespace;

/// An owned NJF document.
#[derive(Debug)]
pub struct File {
    /// Document bytes followed by one `\0` sentinel.
    buffer: Vec<u8>,
    /// Trimmed body range within `buffer`.
    body: Range<usize>,
}

impl File {
    /// Read the whole file at `path`.
    ///
    /// Fails without leaving anything behind if the file cannot be
    /// opened, read, or its buffer cannot be allocated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let mut handle = fs::File::open(path).map_err(|source| {
            debug!(path = %path.display(), error = %source, "open failed");
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let hint = handle.metadata().map_or(0, |meta| meta.len() as usize);
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(hint + 1).map_err(|source| {
            debug!(path = %path.display(), len = hint + 1, "allocation failed");
            LoadError::Alloc {
                path: path.to_path_buf(),
                len: hint + 1,
                source,
            }
        })?;

        handle.read_to_end(&mut buffer).map_err(|source| {
            debug!(path = %path.display(), error = %source, "read failed");
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let file = Self::from_bytes(buffer);
        debug!(
            path = %path.display(),
            bytes = file.len(),
            body = file.body.len(),
            "loaded document"
        );
        Ok(file)
    }

    /// Take ownership of an in-memory document.
    pub fn from_bytes(mut buffer: Vec<u8>) -> Self {
        let body = whitespace::trim(&buffer);
        buffer.push(0);
        Self { buffer, body }
    }

    /// The trimmed document body.
    #[inline]
    pub fn body(&self) -> Body<'_> {
        Body::with_origin(&self.buffer[self.body.clone()], self.body.start)
    }

    /// Document bytes as loaded, without the sentinel.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.buffer.len() - 1]
    }

    /// Document length in bytes, without the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Line and column of an absolute offset, e.g. from a `SyntaxError`.
    pub fn locate(&self, offset: usize) -> Location {
        Location::locate(self.bytes(), offset)
    }

    /// Release the buffer. Equivalent to dropping the file; spelled out
    /// for callers that want the end of a document's life to be visible.
    pub fn release(self) {
        debug!(bytes = self.len(), "releasing document");
    }

    /// Give the buffer back, sentinel removed.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buffer.pop();
        self.buffer
    }
}
