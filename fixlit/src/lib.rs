//! # fixlit
//!
//! Fixed-capacity string literals that can be built, joined and compared while
//! evaluating constants.
//!
//! Every literal lives in an inline array sized at compile time. Nothing
//! allocates, and construction, size queries, concatenation and comparison are
//! available as `const fn`s, so malformed literals fail the build instead of the
//! program.
//!
//! ## Features
//!
//! ### Types
//!
//! - **[`BoundedLiteral<C, N>`]** – inline string of up to `N` code units with a tracked length
//! - **[`LiteralView<C, N>`]** – literal built by scanning a terminated unit buffer
//! - **[`Concat<C, N, M>`]** – the result of `literal + literal`, capacity `N + M`
//! - **[`Units<C>`]** – const helpers over raw unit buffers: length scan, `is_same_n`, ordering scan
//!
//! Supported code units are `u8`, `u16`, `u32` and `char` (see [`LiteralChar`]).
//!
//! ### Macros
//!
//! - **[`to_literal!`]** – size a [`LiteralView`] from a constant terminated buffer
//! - **[`concat_literals!`]** – join two constant literals into capacity `N + M`
//! - **[`literal!`]** – build a literal from an array, or from a capacity and a unit list
//!
//! ### Comparison
//!
//! Literals implement [`LessThan`] and opt into [`CompDef`], which synthesizes
//! `>`, `<=`, `>=`, `==` and `!=` from less-than alone. Raw unit arrays are
//! compared through the same traits.
//!
//! ## Quick Examples
//!
//! ### Building and appending
//!
//! ```rust
//! use fixlit::BoundedLiteral;
//!
//! let mut literal: BoundedLiteral<u8, 40> = BoundedLiteral::new();
//! literal += b"directory";
//! literal += "cucumber";
//! literal += b'1';
//! assert_eq!(literal.length(), 18);
//! assert_eq!(literal.to_string(), "directorycucumber1");
//! ```
//!
//! ### Compile-time literals
//!
//! ```rust
//! use fixlit::{concat_literals, BoundedLiteral};
//!
//! const DIRECTORY: BoundedLiteral<u8, 9> = BoundedLiteral::from_array(b"directory");
//! const CUCUMBER: BoundedLiteral<u8, 8> = BoundedLiteral::from_array(b"cucumber");
//! const JOINED: BoundedLiteral<u8, 17> = concat_literals!(DIRECTORY, CUCUMBER);
//!
//! const _: () = assert!(JOINED.length() == 17);
//! const _: () = assert!(DIRECTORY.precedes(&JOINED));
//! ```
//!
//! ### Comparing against raw buffers
//!
//! ```rust
//! use fixlit::{BoundedLiteral, CompDef, LessThan};
//!
//! let directory = BoundedLiteral::from_array(b"directory");
//! assert!(directory.less_than(b"eirectory"));
//! assert!(directory.equal_with(b"directory"));
//! assert!(directory < BoundedLiteral::from_array(b"eirectory"));
//! ```
//!
//! ## Ordering caveat
//!
//! The less-than scan returns at the first position where the left side is
//! smaller and ignores positions where it is larger, so two literals can each
//! precede the other (`"ba"` and `"ab"`). `partial_cmp` returns `None` for such
//! pairs.
//!
//! [`BoundedLiteral<C, N>`]: BoundedLiteral
//! [`LiteralView<C, N>`]: LiteralView
//! [`Concat<C, N, M>`]: Concat
//! [`Units<C>`]: Units
//! [`to_literal!`]: macro@to_literal
//! [`concat_literals!`]: macro@concat_literals
//! [`literal!`]: macro@literal

pub mod element;
pub mod error;
pub mod generic;
pub mod macros;
mod ordering;

pub use element::{LiteralChar, Units};
pub use error::{LiteralError, Result};
pub use fixlit_compare::{CompDef, LessThan};
pub use generic::append::AppendSource;
pub use generic::bounded_literal::BoundedLiteral;
pub use generic::concat::Concat;
pub use generic::literal_view::LiteralView;
