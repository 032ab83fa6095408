//! The sequence wrapper.
//!
//! [`Seq<C>`] owns exactly one [`Cursor`] and layers the combinator algebra on top of
//! its single `next()` primitive:
//!
//! - **Derived sequences** ([`map`](Seq::map), [`filter`](Seq::filter),
//!   [`enumerate`](Seq::enumerate), ...) take the wrapper by value and return a new
//!   one whose cursor owns the old. Nothing is pulled until the result is pulled.
//! - **Consuming operations** ([`fold`](Seq::fold), [`find`](Seq::find),
//!   [`all`](Seq::all), [`cmp`](Seq::cmp), ...) take `&mut self` and pull until they
//!   have an answer. The wrapper stays where they left it, so calling another
//!   consuming operation continues from that point rather than restarting.
//!
//! Use [`by_ref`](Seq::by_ref) to derive a sequence that borrows instead of consuming.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = iter([1, 2, 3, 4]);
//! assert!(!seq.all(|n| n < 3));
//! // `all` stopped at 3; 4 is still there.
//! assert_eq!(seq.next(), Step::Yielded(4));
//! assert_eq!(seq.next(), Step::Complete);
//! ```

mod cmp;
mod fold;
mod iter;

pub use iter::{IntoIter, Iter};

use crate::{
    Cursor, Maybe, Step,
    build::IterCursor,
    compose::{Chain, Enumerate, Filter, FilterMap, Inspect, Map, Skip, Take, Zip},
};

/// A lazy, single-pass sequence over a [`Cursor`].
///
/// A `Seq` is not `Clone`: two consumers of one cursor would interleave their pulls.
/// Share explicitly with [`by_ref`](Seq::by_ref) or an `Rc<RefCell<_>>` cursor when
/// that is what you want.
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Seq<C> {
    cursor: C,
}

impl<C: Cursor> Seq<C> {
    /// Wrap a cursor.
    ///
    /// The cursor is used as-is for the lifetime of the wrapper; to wrap a container
    /// or other iterable use [`Seq::from_source`] or [`iter`](crate::iter).
    #[inline]
    pub fn new(cursor: C) -> Self {
        Seq { cursor }
    }

    /// Pull the wrapped cursor once.
    ///
    /// After the first `Complete`, every call returns `Complete`.
    #[inline]
    pub fn next(&mut self) -> Step<C::Item> {
        self.cursor.next()
    }

    /// Borrow this sequence as a new one that pulls the same cursor.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seq = iter(1..=5);
    /// let head: Vec<_> = seq.by_ref().take(2).collect();
    /// assert_eq!(head, vec![1, 2]);
    /// assert_eq!(seq.collect::<Vec<_>>(), vec![3, 4, 5]);
    /// ```
    #[inline]
    pub fn by_ref(&mut self) -> Seq<&mut C> {
        Seq::new(&mut self.cursor)
    }

    /// A standard iterator over the remaining values, borrowing this sequence.
    #[inline]
    pub fn iter(&mut self) -> Iter<'_, C> {
        Iter::new(self)
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Pair each value with its position, counting from zero.
    pub fn enumerate(self) -> Seq<Enumerate<C>> {
        Seq::new(Enumerate::new(self.cursor))
    }

    /// Transform each value through `f`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let lengths: Vec<_> = iter(["a", "bb", "ccc"]).map(str::len).collect();
    /// assert_eq!(lengths, vec![1, 2, 3]);
    /// ```
    pub fn map<U, F>(self, f: F) -> Seq<Map<C, F>>
    where
        F: FnMut(C::Item) -> U,
    {
        Seq::new(Map::new(self.cursor, f))
    }

    /// Keep only values satisfying `predicate`; the rest are pulled and discarded.
    pub fn filter<P>(self, predicate: P) -> Seq<Filter<C, P>>
    where
        P: FnMut(&C::Item) -> bool,
    {
        Seq::new(Filter::new(self.cursor, predicate))
    }

    /// Keep the present results of `f`, unwrapped.
    pub fn filter_map<U, F>(self, f: F) -> Seq<FilterMap<C, F>>
    where
        F: FnMut(C::Item) -> Maybe<U>,
    {
        Seq::new(FilterMap::new(self.cursor, f))
    }

    pub fn inspect<F>(self, f: F) -> Seq<Inspect<C, F>>
    where
        F: FnMut(&C::Item),
    {
        Seq::new(Inspect::new(self.cursor, f))
    }

    /// At most `n` values. The parent is never pulled more than `n` times.
    pub fn take(self, n: usize) -> Seq<Take<C>> {
        Seq::new(Take::new(self.cursor, n))
    }

    /// Everything after the first `n` values.
    pub fn skip(self, n: usize) -> Seq<Skip<C>> {
        Seq::new(Skip::new(self.cursor, n))
    }

    /// This sequence followed by `other`.
    ///
    /// `other` is bridged through [`IterCursor`], so a [`Seq`] passed here is pulled
    /// through its [`IntoIterator`] impl. The bridge only forwards; nothing is buffered.
    pub fn chain<I>(self, other: I) -> Seq<Chain<C, IterCursor<I::IntoIter>>>
    where
        I: IntoIterator<Item = C::Item>,
    {
        Seq::new(Chain::new(self.cursor, IterCursor::new(other.into_iter())))
    }

    /// Pairs from this sequence and `other`, ending with the shorter of the two.
    ///
    /// Like [`chain`](Seq::chain), `other` is bridged through [`IterCursor`]. Once
    /// either side ends, neither is pulled again.
    pub fn zip<I>(self, other: I) -> Seq<Zip<C, IterCursor<I::IntoIter>>>
    where
        I: IntoIterator,
    {
        Seq::new(Zip::new(self.cursor, IterCursor::new(other.into_iter())))
    }
}

impl<It: Iterator> Seq<IterCursor<It>> {
    /// Wrap anything iterable. Equivalent to [`iter`](crate::iter).
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<IntoIter = It>,
    {
        crate::build::iter(source)
    }
}

impl<C: Cursor> Cursor for Seq<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Step<C::Item> {
        self.cursor.next()
    }
}

impl<C> std::fmt::Debug for Seq<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}
