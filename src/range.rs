//! Forward integer ranges.
//!
//! [`range`] and [`range_between`] cover the common cases; [`RangeBuilder`] adds a
//! step and an inclusive upper bound. Bounds are checked when the range is built, so
//! a bad range is reported before anything is pulled.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! assert_eq!(range(5)?.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range_between(3, 7)?.collect::<Vec<_>>(), vec![3, 4, 5, 6]);
//! assert_eq!(RangeBuilder::new(2).inclusive(true).build()?.collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert!(range(-1).is_err());
//! # Ok::<(), lazyseq::RangeError>(())
//! ```

use crate::{Cursor, Seq, Step, error::RangeError};

/// Cursor over `begin, begin + step, ...` up to the end bound.
///
/// Produced by [`RangeBuilder::build`]. Stepping past `i64::MAX` ends the range.
#[derive(Debug, Clone)]
pub struct Range {
    next: Option<i64>,
    end: i64,
    step: i64,
    inclusive: bool,
}

impl Cursor for Range {
    type Item = i64;

    fn next(&mut self) -> Step<i64> {
        let Some(current) = self.next else {
            return Step::Complete;
        };
        let in_bounds = if self.inclusive {
            current <= self.end
        } else {
            current < self.end
        };
        if !in_bounds {
            self.next = None;
            return Step::Complete;
        }
        self.next = current.checked_add(self.step);
        Step::Yielded(current)
    }
}

/// Options for building a [`Range`].
///
/// Defaults: begins at `0`, steps by `1`, excludes the end bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBuilder {
    begin: i64,
    end: i64,
    step: i64,
    inclusive: bool,
}

impl RangeBuilder {
    pub fn new(end: i64) -> Self {
        RangeBuilder {
            begin: 0,
            end,
            step: 1,
            inclusive: false,
        }
    }

    pub fn begin(mut self, begin: i64) -> Self {
        self.begin = begin;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Include the end bound itself.
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// Validate the bounds and produce the sequence.
    ///
    /// An inclusive range is checked against `end + 1`, and that adjusted bound is what
    /// a [`RangeError::Inverted`] reports.
    ///
    /// ```rust
    /// use lazyseq::{RangeBuilder, RangeError};
    ///
    /// let evens: Vec<_> = RangeBuilder::new(8).step(2).inclusive(true).build()?.collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
    ///
    /// let err = RangeBuilder::new(-1).build().unwrap_err();
    /// assert_eq!(err.to_string(), "Invalid range: begin 0 is greater than end -1");
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn build(self) -> Result<Seq<Range>, RangeError> {
        let RangeBuilder {
            begin,
            end,
            step,
            inclusive,
        } = self;

        if step <= 0 {
            tracing::debug!(step, "rejected range with non-positive step");
            return Err(RangeError::NonPositiveStep { step });
        }
        let bound = if inclusive { end.saturating_add(1) } else { end };
        if begin > bound {
            tracing::debug!(begin, end = bound, "rejected inverted range");
            return Err(RangeError::Inverted { begin, end: bound });
        }

        tracing::trace!(begin, end, step, inclusive, "built range");
        Ok(Seq::new(Range {
            next: Some(begin),
            end,
            step,
            inclusive,
        }))
    }
}

/// `0, 1, ..., end - 1`.
pub fn range(end: i64) -> Result<Seq<Range>, RangeError> {
    RangeBuilder::new(end).build()
}

/// `begin, begin + 1, ..., end - 1`.
pub fn range_between(begin: i64, end: i64) -> Result<Seq<Range>, RangeError> {
    RangeBuilder::new(end).begin(begin).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(seq: Result<Seq<Range>, RangeError>) -> Vec<i64> {
        seq.expect("valid range").collect()
    }

    #[test]
    fn test_default_range() {
        assert_eq!(values(range(5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(values(range(0)), Vec::<i64>::new());
    }

    #[test]
    fn test_range_between() {
        assert_eq!(values(range_between(3, 7)), vec![3, 4, 5, 6]);
        assert_eq!(values(range_between(-2, 1)), vec![-2, -1, 0]);
    }

    #[test]
    fn test_inclusive_range() {
        assert_eq!(values(RangeBuilder::new(2).inclusive(true).build()), vec![0, 1, 2]);
        assert_eq!(
            values(RangeBuilder::new(-1).inclusive(true).build()),
            Vec::<i64>::new()
        );
    }

    #[test]
    fn test_stepped_range() {
        assert_eq!(values(RangeBuilder::new(10).begin(1).step(3).build()), vec![1, 4, 7]);
        assert_eq!(
            values(RangeBuilder::new(10).begin(1).step(3).inclusive(true).build()),
            vec![1, 4, 7, 10]
        );
    }

    #[test]
    fn test_inverted_range_is_rejected_eagerly() {
        assert_eq!(range(-1).unwrap_err(), RangeError::Inverted { begin: 0, end: -1 });
        assert_eq!(
            RangeBuilder::new(3).begin(9).inclusive(true).build().unwrap_err(),
            RangeError::Inverted { begin: 9, end: 4 }
        );
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        assert_eq!(
            RangeBuilder::new(3).step(0).build().unwrap_err(),
            RangeError::NonPositiveStep { step: 0 }
        );
        assert!(RangeBuilder::new(3).step(-1).build().is_err());
    }

    #[test]
    fn test_range_end_overflow_completes() {
        let mut seq = RangeBuilder::new(i64::MAX)
            .begin(i64::MAX - 1)
            .inclusive(true)
            .build()
            .expect("valid range");
        assert_eq!(seq.next(), Step::Yielded(i64::MAX - 1));
        assert_eq!(seq.next(), Step::Yielded(i64::MAX));
        assert_eq!(seq.next(), Step::Complete);
        assert_eq!(seq.next(), Step::Complete);
    }

    #[test]
    fn test_range_feeds_combinators() {
        let mut seq = range(10).expect("valid range");
        assert_eq!(seq.by_ref().filter(|n| n % 4 == 3).next(), Step::Yielded(3));
        assert_eq!(seq.sum::<i64>(), 4 + 5 + 6 + 7 + 8 + 9);
    }
}
