//! Well-formedness checking.
//!
//! Cursors report malformed input the same way they report the end of a
//! body, which keeps iteration simple but hides mistakes. `validate`
//! walks a whole document, nested bodies included, and returns the
//! earliest construct a cursor would have stopped on.

use alloc::vec;

use tracing::trace;

use crate::body::Body;
use crate::error::SyntaxError;

impl<'a> Body<'a> {
    /// Check that every object in this body and all nested bodies scans
    /// cleanly to the end.
    ///
    /// On failure, returns the malformed construct with the lowest
    /// offset. Offsets are absolute in the root buffer.
    pub fn validate(&self) -> Result<(), SyntaxError> {
        let mut pending = vec![*self];
        let mut earliest: Option<SyntaxError> = None;

        // Explicit stack so deeply nested input cannot overflow the call stack.
        while let Some(body) = pending.pop() {
            let mut objects = body.objects();
            for object in objects.by_ref() {
                if object.has_body() {
                    pending.push(object.body());
                }
            }
            if let Some(err) = objects.error() {
                trace!(kind = ?err.kind, offset = err.offset, "malformed object");
                if earliest.map_or(true, |seen| err.offset < seen.offset) {
                    earliest = Some(err);
                }
            }
        }

        match earliest {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Shorthand for `validate().is_ok()`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}
