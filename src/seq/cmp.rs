//! Lexicographic comparison against another sequence.
//!
//! Both sides are pulled in lockstep, this sequence first. The first pair that
//! differs decides; otherwise the side that ends first is the lesser, and two sides
//! that end together are equal. The other side can be anything iterable, including
//! another [`Seq`]; it is bridged through a fused [`IterCursor`], which only wraps its
//! [`IntoIterator`] impl and buffers nothing.

use std::cmp::Ordering;

use crate::{Cursor, Maybe, Seq, Step, build::IterCursor};

impl<C: Cursor> Seq<C> {
    /// Compare with `other` element by element using `cmp`.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use lazyseq::prelude::*;
    ///
    /// let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
    /// let words = ["foo", "bar", "baz"];
    ///
    /// assert_eq!(iter(words).cmp_by(["abc", "def", "ghi"], by_len), Ordering::Equal);
    /// assert_eq!(iter(words).cmp_by(["abc", "defg", "hi"], by_len), Ordering::Less);
    /// assert_eq!(iter(words).cmp_by(["abc", "de", "fghi"], by_len), Ordering::Greater);
    /// ```
    pub fn cmp_by<I, F>(&mut self, other: I, mut cmp: F) -> Ordering
    where
        I: IntoIterator,
        F: FnMut(C::Item, I::Item) -> Ordering,
    {
        let mut other = IterCursor::new(other.into_iter());
        loop {
            let Step::Yielded(left) = self.cursor.next() else {
                return match other.next() {
                    Step::Yielded(_) => Ordering::Less,
                    Step::Complete => Ordering::Equal,
                };
            };
            let Step::Yielded(right) = other.next() else {
                return Ordering::Greater;
            };
            match cmp(left, right) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
    }

    /// Compare with `other` using a comparator that may find two values incomparable.
    ///
    /// The first absent or non-equal comparison ends the walk and is returned as-is.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seq = iter([1.4, 2.6, 3.7, 7.8]);
    /// let cmp = seq.partial_cmp_by([1.4, 2.6, f64::NAN, 7.8], compare_numbers);
    /// assert_eq!(cmp, Maybe::Absent);
    /// ```
    pub fn partial_cmp_by<I, F>(&mut self, other: I, mut cmp: F) -> Maybe<Ordering>
    where
        I: IntoIterator,
        F: FnMut(C::Item, I::Item) -> Maybe<Ordering>,
    {
        let mut other = IterCursor::new(other.into_iter());
        loop {
            let Step::Yielded(left) = self.cursor.next() else {
                return match other.next() {
                    Step::Yielded(_) => Maybe::Present(Ordering::Less),
                    Step::Complete => Maybe::Present(Ordering::Equal),
                };
            };
            let Step::Yielded(right) = other.next() else {
                return Maybe::Present(Ordering::Greater);
            };
            match cmp(left, right) {
                Maybe::Present(Ordering::Equal) => continue,
                decided => return decided,
            }
        }
    }

    /// `true` if both sides have the same length and `eq` holds pairwise.
    pub fn eq_by<I, F>(&mut self, other: I, mut eq: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(C::Item, I::Item) -> bool,
    {
        let mut other = IterCursor::new(other.into_iter());
        loop {
            match (self.cursor.next(), other.next()) {
                (Step::Yielded(left), Step::Yielded(right)) => {
                    if !eq(left, right) {
                        return false;
                    }
                }
                (Step::Complete, Step::Complete) => return true,
                _ => return false,
            }
        }
    }

    pub fn cmp<I>(&mut self, other: I) -> Ordering
    where
        I: IntoIterator<Item = C::Item>,
        C::Item: Ord,
    {
        self.cmp_by(other, |a, b| a.cmp(&b))
    }

    pub fn partial_cmp<I>(&mut self, other: I) -> Maybe<Ordering>
    where
        I: IntoIterator,
        C::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp_by(other, |a, b| a.partial_cmp(&b).into())
    }

    pub fn eq<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
    {
        self.eq_by(other, |a, b| a == b)
    }

    pub fn ne<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator,
        C::Item: PartialEq<I::Item>,
    {
        !self.eq(other)
    }

    pub fn lt<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator<Item = C::Item>,
        C::Item: Ord,
    {
        self.cmp(other) == Ordering::Less
    }

    pub fn le<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator<Item = C::Item>,
        C::Item: Ord,
    {
        self.cmp(other) != Ordering::Greater
    }

    pub fn gt<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator<Item = C::Item>,
        C::Item: Ord,
    {
        self.cmp(other) == Ordering::Greater
    }

    pub fn ge<I>(&mut self, other: I) -> bool
    where
        I: IntoIterator<Item = C::Item>,
        C::Item: Ord,
    {
        self.cmp(other) != Ordering::Less
    }
}
