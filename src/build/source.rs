use std::iter::Fuse;

use crate::{Cursor, Seq, Step};

/// Cursor over a standard iterator.
///
/// The iterator is fused, so exhaustion sticks even for iterators that would resume
/// after returning `None`.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Step<I::Item> {
        self.iter.next().into()
    }
}

/// Wrap anything iterable in a [`Seq`].
///
/// One iterator is obtained from `source` immediately and used for the lifetime of
/// the sequence. Containers, ranges, `std::iter` generators and other [`Seq`]s all
/// qualify.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lazyseq::prelude::*;
///
/// let scores = BTreeMap::from([("ann", 3), ("bob", 5)]);
/// let best = iter(&scores).max_by_key(|(_, score)| **score);
/// assert_eq!(best, Maybe::Present((&"bob", &5)));
/// ```
pub fn iter<I>(source: I) -> Seq<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
{
    Seq::new(IterCursor::new(source.into_iter()))
}
