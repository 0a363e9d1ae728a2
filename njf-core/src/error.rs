//! Error types.
//!
//! The cursors never return these: a cursor that cannot scan further just
//! stops, the same way it stops at the end of a body. [`SyntaxError`] is
//! the diagnostic recorded alongside that stop (see `Object::error` and
//! `Body::validate`). [`LoadError`] is returned by the file loader.

use thiserror::Error;

/// What went wrong while scanning an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Something other than `"` where an object name should start.
    ExpectedName,
    /// A `"` without a matching closing quote.
    UnterminatedString,
    /// A `{` whose matching `}` never arrives.
    UnbalancedBody,
}

impl SyntaxErrorKind {
    /// Short human-readable description.
    pub fn message(self) -> &'static str {
        match self {
            Self::ExpectedName => "expected object name",
            Self::UnterminatedString => "unterminated string",
            Self::UnbalancedBody => "unbalanced body",
        }
    }
}

/// Malformed input found at an absolute byte offset.
///
/// The offset is relative to the root buffer the outermost `Body` was
/// created from, so it can be turned into a `Location` directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{} at byte {offset}", .kind.message())]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Failure to produce an owned document buffer.
///
/// A failed load leaves nothing behind: no buffer, no body.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}", .path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot allocate {len} bytes for {}", .path.display())]
    Alloc {
        path: std::path::PathBuf,
        len: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}
