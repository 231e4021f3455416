//! # Parsact - Transactional Parser Combinators
//!
//! A parser combinator library built around a single mutable cursor with
//! transactional commit/rollback semantics. Small parsers combine into
//! complex parsing logic from simple building blocks. The library
//! emphasizes:
//!
//! - **Failures as values**: every engine failure is a typed
//!   [`Failure`] with a code, span, and message, never a panic
//! - **Guaranteed rollback**: each attempt runs inside a [`Transaction`]
//!   whose disposal action fires exactly once on every exit path
//! - **Span tracking**: successes and failures carry byte offsets plus
//!   line/column coordinates of the matched extent
//! - **Composability**: fluent extension methods (`.map()`, `.or()`,
//!   `.then()`) and free functions compose equally well
//!
//! ```
//! use parsact::{literal, number, sep_by, Parser};
//!
//! let parser = sep_by(number(), literal(","));
//! let parsed = parser.parse_str("1,2.5,3").unwrap();
//! assert_eq!(parsed.value, vec![1.0, 2.5, 3.0]);
//! ```

pub mod at_least_once;
pub mod boxed;
pub mod eof;
pub mod error;
pub mod exactly;
pub mod literal;
pub mod many;
pub mod map;
pub mod number;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod peek;
pub mod recover;
pub mod recursive;
pub mod sep_by;
pub mod sequence;
pub mod single;
pub mod span;
pub mod state;
pub mod take;
pub mod token;
pub mod traced;
pub mod transaction;

pub use at_least_once::at_least_once;
pub use boxed::{BoxedExt, BoxedParser};
pub use eof::eof;
pub use error::{ErrorCode, Failure, ParseResult, Parsed};
pub use exactly::exactly;
pub use literal::{literal, literal_ignore_case};
pub use many::many;
pub use map::{MapExt, map};
pub use number::{float, int, number, uint};
pub use optional::{OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::Parser;
pub use pattern::{Pattern, pattern};
pub use peek::peek;
pub use recover::skip_until;
pub use recursive::recursive;
pub use sep_by::sep_by;
pub use sequence::{Sequence, ThenExt, sequence};
pub use single::is_char;
pub use span::Span;
pub use state::{ParsingState, Snapshot};
pub use take::{take_until, take_while};
pub use token::{TokenExt, token};
pub use traced::{TracedExt, traced};
pub use transaction::{Disposal, Transaction};
