//! Flag cursors.
//!
//! Flags are the whitespace-separated tokens between an object's name and
//! its nested body (or the next object). Each token is classified by its
//! first byte:
//!
//! - `-` or a digit: a number, `-17`, `42`
//! - anything else: an identifier, `visible`, `left-aligned`
//!
//! The list ends at `{`, `"`, `}` or the end of the parent body.

use core::iter::FusedIterator;

use crate::number::FlagNumber;
use crate::object::Object;
use crate::whitespace;

/// Classification of a flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Identifier,
    Number,
    /// No more flags.
    NotFound,
}

/// Payload of a flag token.
///
/// Identifiers are zero-copy slices of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagValue<'a, N = i64> {
    Identifier(&'a [u8]),
    Number(N),
    NotFound,
}

impl<'a, N: Copy> FlagValue<'a, N> {
    #[inline]
    pub fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Identifier(_) => FlagKind::Identifier,
            FlagValue::Number(_) => FlagKind::Number,
            FlagValue::NotFound => FlagKind::NotFound,
        }
    }

    #[inline]
    pub fn as_identifier(&self) -> Option<&'a [u8]> {
        match self {
            FlagValue::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<N> {
        match self {
            FlagValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Resumable cursor over the flags of one object.
///
/// `N` picks the integer type number flags are accumulated into.
#[derive(Debug, Clone, Copy)]
pub struct Flag<'a, N: FlagNumber = i64> {
    /// Bytes of the object's parent body.
    source: &'a [u8],
    /// Index just past the object's closing name quote.
    origin: usize,
    /// Resume position, relative to `origin`.
    offset: usize,
    value: FlagValue<'a, N>,
}

impl<'a, N: FlagNumber> Flag<'a, N> {
    /// Start a cursor right after `object`'s name and advance it once.
    ///
    /// A flag taken from an invalid object is immediately `NotFound`.
    pub fn first(object: &Object<'a>) -> Self {
        let mut flag = Self {
            source: &[],
            origin: 0,
            offset: 0,
            value: FlagValue::NotFound,
        };
        if let Some(origin) = object.flags_origin() {
            flag.source = object.parent().as_bytes();
            flag.origin = origin;
            flag.advance();
        }
        flag
    }

    /// Move to the next flag. Returns `false` when the list is over;
    /// further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        let bytes = self.source;
        let start = whitespace::skip_left(bytes, self.origin + self.offset);
        self.value = FlagValue::NotFound;

        let first = match bytes.get(start) {
            None | Some(b'{' | b'"' | b'}') => return false,
            Some(&b) => b,
        };

        let mut pos = start;
        if first == b'-' || first.is_ascii_digit() {
            let negative = first == b'-';
            if negative {
                pos += 1;
            }
            let mut number = N::ZERO;
            while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
                number = number.push_digit(digit - b'0');
                pos += 1;
            }
            self.value = FlagValue::Number(if negative { number.negate() } else { number });
        } else {
            while pos < bytes.len() && !ends_identifier(bytes[pos]) {
                pos += 1;
            }
            self.value = FlagValue::Identifier(&bytes[start..pos]);
        }

        self.offset = pos - self.origin;
        true
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !matches!(self.value, FlagValue::NotFound)
    }

    #[inline]
    pub fn kind(&self) -> FlagKind {
        self.value.kind()
    }

    #[inline]
    pub fn value(&self) -> FlagValue<'a, N> {
        self.value
    }

    #[inline]
    pub fn as_identifier(&self) -> Option<&'a [u8]> {
        self.value.as_identifier()
    }

    /// The identifier as UTF-8, if this is an identifier and it is valid UTF-8.
    pub fn as_identifier_str(&self) -> Option<&'a str> {
        self.as_identifier().and_then(|ident| core::str::from_utf8(ident).ok())
    }

    #[inline]
    pub fn as_number(&self) -> Option<N> {
        self.value.as_number()
    }
}

#[inline]
fn ends_identifier(b: u8) -> bool {
    whitespace::is_space(b) || b == b'}' || b == b'"'
}

/// Iterator over the flags of an object.
#[derive(Debug, Clone)]
pub struct Flags<'a, N: FlagNumber = i64> {
    object: Object<'a>,
    cursor: Option<Flag<'a, N>>,
}

impl<'a, N: FlagNumber> Flags<'a, N> {
    pub(crate) fn new(object: Object<'a>) -> Self {
        Self { object, cursor: None }
    }
}

impl<'a, N: FlagNumber> Iterator for Flags<'a, N> {
    type Item = FlagValue<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            Some(cursor) => {
                if !cursor.is_found() {
                    return None;
                }
                cursor.advance();
            }
            None => self.cursor = Some(Flag::first(&self.object)),
        }
        self.cursor.filter(Flag::is_found).map(|flag| flag.value())
    }
}

impl<N: FlagNumber> FusedIterator for Flags<'_, N> {}
