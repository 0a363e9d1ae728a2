//! NJF Core Parser
//!
//! Lazy, zero-copy scanner for NJF ("Not a JSON File") documents.
//! Nothing is built up front: objects and flags are discovered on demand
//! by cursors that walk the input bytes and hand out borrowed slices.
//!
//! ```text
//! "window" 640 480 fullscreen {
//!     "title" main
//!     "child" { "button" -1 }
//! }
//! ```
//!
//! # Architecture
//!
//! - **whitespace.rs** - Space/control byte classification and trimming
//! - **string.rs** - Closing-quote search with `\"` escapes
//! - **body.rs** - `Body`, a trimmed view holding zero or more objects
//! - **object.rs** - `Object` cursor: names and nested-body matching
//! - **flag.rs** - `Flag` cursor: identifier / integer tokens after a name
//! - **number.rs** - Integer width selection for number flags
//! - **validate.rs** - Optional well-formedness walk with diagnostics
//! - **file.rs** - Owned buffer loader (`std` only)
//!
//! # Example
//!
//! ```
//! use njf_core::{Body, FlagValue};
//!
//! let body = Body::new(br#""window" 640 480 { "title" main }"#);
//! let window = body.first_object();
//! assert!(window.is_valid());
//! assert_eq!(window.name(), b"window");
//!
//! let flags: Vec<_> = window.flags().collect();
//! assert_eq!(flags, [FlagValue::Number(640), FlagValue::Number(480)]);
//!
//! let title = window.body().first_object();
//! assert_eq!(title.name(), b"title");
//! assert_eq!(title.first_flag().as_identifier(), Some(&b"main"[..]));
//! ```
//!
//! # Malformed input
//!
//! Cursors stop at the first construct they cannot scan, exactly as they
//! stop at the end of a body. Use [`Object::error`] or [`Body::validate`]
//! to tell the two apart.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod body;
pub mod error;
#[cfg(feature = "std")]
pub mod file;
pub mod flag;
pub mod number;
pub mod object;
pub mod span;
pub mod string;
pub mod validate;
pub mod whitespace;

pub use body::Body;
pub use error::{SyntaxError, SyntaxErrorKind};
#[cfg(feature = "std")]
pub use error::LoadError;
#[cfg(feature = "std")]
pub use file::File;
pub use flag::{Flag, FlagKind, FlagValue, Flags};
pub use number::FlagNumber;
pub use object::{Object, Objects};
pub use span::{Location, Span};
