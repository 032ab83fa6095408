//! # Lazyseq: Lazy Pull-Based Sequences
//!
//! Wrap any single-pass source in a [`Seq`] and drive it with a chainable set of
//! combinators that pull one value at a time.
//!
//! ## Core Types
//!
//! - **[`Cursor`]**: the one primitive, `next()` returning a [`Step`]: a value or the end
//! - **[`Seq<C>`]**: the wrapper carrying the combinator algebra over a cursor
//! - **[`Maybe<T>`]**: a value that may be absent (extrema, searches, parsers)
//! - **[`Outcome<T, E>`]**: success or failure, for fallible accumulation
//!
//! ## Key Features
//!
//! - **Lazy**: `map`, `filter`, `filter_map`, `enumerate` and friends pull nothing until
//!   their result is pulled
//! - **Resumable**: consuming operations borrow the sequence and leave it positioned
//!   after the last value they pulled
//! - **Short-circuiting**: `find`, `all`, `any`, `try_fold` stop pulling as soon as the
//!   answer is known
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut tokens = iter(["4", "x", "15", "8", "stop", "99"]);
//!
//! // Sum numbers until the first token that is not one.
//! let sum = tokens.try_fold(0i64, |acc, t| parse_integral(t).map(|n| acc + n).ok_or(t));
//! assert_eq!(sum, Outcome::Failure("x"));
//!
//! // Pick up right after the failure.
//! let rest: Vec<_> = tokens.by_ref().filter_map(parse_integral).take(2).collect();
//! assert_eq!(rest, vec![15, 8]);
//! assert_eq!(tokens.next(), Step::Yielded("stop"));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`iter(source)`](iter) - Wrap any iterable
//! - [`Seq::new(cursor)`](Seq::new) - Wrap a [`Cursor`]
//! - [`from_fn(f)`](from_fn), [`once(v)`](once), [`empty()`](empty), [`repeat(v)`](repeat)
//! - [`range(end)`](range), [`RangeBuilder`] - Forward integer ranges
//!
//! **Helpers:**
//! - [`parse_integral(s)`](parse_integral) - Integer or absent
//! - [`compare_numbers(a, b)`](compare_numbers) - Ordering or absent for NaN

pub mod build;
pub mod compose;
mod cursor;
mod error;
mod maybe;
pub mod numeric;
mod outcome;
pub mod prelude;
pub mod range;
mod seq;
mod step;

pub use build::{empty, from_fn, iter, once, repeat};
pub use cursor::*;
pub use error::*;
pub use maybe::*;
pub use numeric::{compare_numbers, parse_integral};
pub use outcome::*;
pub use range::{RangeBuilder, range, range_between};
pub use seq::*;
pub use step::*;
