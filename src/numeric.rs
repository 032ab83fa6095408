//! Numeric helpers for feeding and comparing sequences.
//!
//! [`parse_integral`] fits [`Seq::filter_map`](crate::Seq::filter_map) and
//! [`Seq::find_map`](crate::Seq::find_map); [`compare_numbers`] fits
//! [`Seq::partial_cmp_by`](crate::Seq::partial_cmp_by).

use std::cmp::Ordering;

use crate::Maybe;

/// Parse a base-10 integer, or absent if `text` is not one.
///
/// An optional leading `+` or `-` is accepted; surrounding whitespace is not.
///
/// ```rust
/// use lazyseq::{Maybe, parse_integral};
///
/// assert_eq!(parse_integral("-42"), Maybe::Present(-42));
/// assert_eq!(parse_integral("4.2"), Maybe::Absent);
/// ```
pub fn parse_integral(text: &str) -> Maybe<i64> {
    text.parse::<i64>().ok().into()
}

/// Order two numbers, or absent if either is NaN.
pub fn compare_numbers(a: f64, b: f64) -> Maybe<Ordering> {
    a.partial_cmp(&b).into()
}
