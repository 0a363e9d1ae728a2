//! Object cursors.
//!
//! An object is a quoted name, optionally followed by flags and a
//! `{ ... }` nested body:
//!
//! ```text
//! "name" flag1 -2 flag3 { "child" }
//! ```
//!
//! The cursor finds the name, steps over the flag region without
//! tokenizing it, and if a `{` follows, locates the matching `}` so the
//! next object can be found. Quoted strings inside the nested body are
//! skipped whole, so braces inside them never count.

use core::fmt;
use core::iter::FusedIterator;

use alloc::borrow::Cow;
use alloc::string::String;

use crate::body::Body;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::flag::{Flag, Flags};
use crate::number::FlagNumber;
use crate::span::Span;
use crate::string;
use crate::whitespace;

/// Where a cursor stands after its last advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Found,
    /// Only whitespace was left.
    Exhausted,
    /// Stopped on input it could not scan.
    Malformed(SyntaxError),
}

/// Resumable cursor over the objects of a [`Body`].
///
/// Cursors are plain values: copying one gives an independent cursor at
/// the same position. Advancing only ever moves forward.
#[derive(Clone, Copy)]
pub struct Object<'a> {
    parent: Body<'a>,
    /// Where the next advance resumes, relative to the parent's bytes.
    offset: usize,
    state: State,
    name_start: usize,
    name_end: usize,
    /// Indices of the nested body's `{` and matching `}`.
    braces: Option<(usize, usize)>,
}

impl<'a> Object<'a> {
    /// Start a cursor at the beginning of `body` and advance it once.
    pub fn first(body: Body<'a>) -> Self {
        let mut object = Self {
            parent: body,
            offset: 0,
            state: State::Exhausted,
            name_start: 0,
            name_end: 0,
            braces: None,
        };
        object.advance();
        object
    }

    /// Move to the next object in the parent body.
    ///
    /// Returns `false` once there is nothing more to read, either because
    /// the body is exhausted or because the input is malformed. After
    /// that, further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        self.braces = None;
        self.state = match self.scan() {
            Ok(found) => found,
            Err(err) => State::Malformed(err),
        };
        self.is_valid()
    }

    fn scan(&mut self) -> Result<State, SyntaxError> {
        let bytes = self.parent.as_bytes();
        let start = whitespace::skip_left(bytes, self.offset);

        if start >= bytes.len() {
            return Ok(State::Exhausted);
        }
        if bytes[start] != b'"' {
            return Err(self.error_at(SyntaxErrorKind::ExpectedName, start));
        }
        if bytes.len() - start < 2 {
            return Err(self.error_at(SyntaxErrorKind::UnterminatedString, start));
        }

        let name_start = start + 1;
        let name_end = string::find_closing_quote(bytes, name_start)
            .ok_or_else(|| self.error_at(SyntaxErrorKind::UnterminatedString, start))?;

        // Flags are not tokenized here, only stepped over.
        let mut pos = name_end + 1;
        let open = loop {
            match bytes.get(pos) {
                Some(b'{') => break pos,
                Some(b'}' | b'"') | None => {
                    self.commit(name_start, name_end, pos, None);
                    return Ok(State::Found);
                }
                Some(_) => pos += 1,
            }
        };

        let close = self.match_brace(open)?;
        self.commit(name_start, name_end, close + 1, Some((open, close)));
        Ok(State::Found)
    }

    /// Find the `}` matching the `{` at `open`.
    fn match_brace(&self, open: usize) -> Result<usize, SyntaxError> {
        let bytes = self.parent.as_bytes();
        let mut depth = 1usize;
        let mut pos = whitespace::skip_left(bytes, open + 1);

        while pos < bytes.len() {
            match bytes[pos] {
                b'"' => {
                    let close = string::find_closing_quote(bytes, pos + 1)
                        .ok_or_else(|| self.error_at(SyntaxErrorKind::UnterminatedString, pos))?;
                    pos = close + 1;
                    continue;
                }
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pos);
                    }
                }
                _ => {}
            }
            pos += 1;
        }

        Err(self.error_at(SyntaxErrorKind::UnbalancedBody, open))
    }

    fn commit(
        &mut self,
        name_start: usize,
        name_end: usize,
        resume: usize,
        braces: Option<(usize, usize)>,
    ) {
        self.name_start = name_start;
        self.name_end = name_end;
        self.offset = resume;
        self.braces = braces;
    }

    fn error_at(&self, kind: SyntaxErrorKind, pos: usize) -> SyntaxError {
        SyntaxError::new(kind, self.parent.origin() + pos)
    }

    /// Whether the cursor currently sits on an object.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state == State::Found
    }

    /// Why the cursor stopped, if it stopped on malformed input.
    ///
    /// `None` while the cursor is valid and after a clean end.
    pub fn error(&self) -> Option<SyntaxError> {
        match self.state {
            State::Malformed(err) => Some(err),
            State::Found | State::Exhausted => None,
        }
    }

    /// The body this cursor walks.
    #[inline]
    pub fn parent(&self) -> Body<'a> {
        self.parent
    }

    /// Raw name bytes between the quotes, escapes left in place.
    ///
    /// Empty when the cursor is not valid.
    pub fn name(&self) -> &'a [u8] {
        if !self.is_valid() {
            return &[];
        }
        &self.parent.as_bytes()[self.name_start..self.name_end]
    }

    /// The name as UTF-8, if it is.
    pub fn name_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.name()).ok()
    }

    /// The name with `\"` turned into `"`.
    pub fn name_unescaped(&self) -> Cow<'a, [u8]> {
        string::unescape_quotes(self.name())
    }

    /// Absolute span of the name, quotes excluded.
    pub fn name_span(&self) -> Span {
        let origin = self.parent.origin();
        Span::new(origin + self.name_start, origin + self.name_end)
    }

    /// Absolute span from the opening name quote to the end of the object
    /// (the closing `}` included, trailing whitespace excluded).
    pub fn span(&self) -> Span {
        let end = match self.braces {
            Some((_, close)) => close + 1,
            None => whitespace::skip_right(self.parent.as_bytes(), self.offset),
        };
        let origin = self.parent.origin();
        Span::new(origin + self.name_start.saturating_sub(1), origin + end)
    }

    /// Whether a `{ ... }` body follows the name and flags.
    #[inline]
    pub fn has_body(&self) -> bool {
        self.braces.is_some()
    }

    /// The nested body, trimmed. Empty when [`has_body`](Self::has_body)
    /// is false.
    pub fn body(&self) -> Body<'a> {
        match self.braces {
            Some((open, close)) => self.parent.sub(open + 1..close),
            None => Body::empty(),
        }
    }

    /// Index just past the closing name quote, where flags begin.
    #[inline]
    pub(crate) fn flags_origin(&self) -> Option<usize> {
        self.is_valid().then_some(self.name_end + 1)
    }

    /// First flag of this object, numbers read as `i64`.
    #[inline]
    pub fn first_flag(&self) -> Flag<'a> {
        Flag::first(self)
    }

    /// First flag of this object, numbers read as `N`.
    #[inline]
    pub fn first_flag_as<N: FlagNumber>(&self) -> Flag<'a, N> {
        Flag::first(self)
    }

    /// Lazily iterate over this object's flags.
    #[inline]
    pub fn flags(&self) -> Flags<'a> {
        Flags::new(*self)
    }

    /// Lazily iterate over this object's flags, numbers read as `N`.
    #[inline]
    pub fn flags_as<N: FlagNumber>(&self) -> Flags<'a, N> {
        Flags::new(*self)
    }

    /// Number of flags a cursor yields before it stops.
    pub fn flag_count(&self) -> usize {
        let mut count = 0;
        let mut flag = self.first_flag();
        while flag.is_found() {
            count += 1;
            flag.advance();
        }
        count
    }
}

impl fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Object");
        match self.state {
            State::Found => dbg
                .field("name", &String::from_utf8_lossy(self.name()))
                .field("has_body", &self.has_body()),
            State::Exhausted => dbg.field("state", &"exhausted"),
            State::Malformed(err) => dbg.field("error", &err),
        };
        dbg.field("offset", &self.offset).finish()
    }
}

/// Iterator over the objects of a body.
///
/// Each item is a copy of the underlying cursor, so it can be used to
/// read flags or descend into the nested body while iteration goes on.
#[derive(Debug, Clone)]
pub struct Objects<'a> {
    body: Body<'a>,
    cursor: Option<Object<'a>>,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(body: Body<'a>) -> Self {
        Self { body, cursor: None }
    }

    /// Diagnostic for the input that stopped iteration, if any.
    pub fn error(&self) -> Option<SyntaxError> {
        self.cursor.and_then(|cursor| cursor.error())
    }
}

impl<'a> Iterator for Objects<'a> {
    type Item = Object<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            Some(cursor) => {
                if !cursor.is_valid() {
                    return None;
                }
                cursor.advance();
            }
            None => self.cursor = Some(Object::first(self.body)),
        }
        self.cursor.filter(Object::is_valid)
    }
}

impl FusedIterator for Objects<'_> {}
