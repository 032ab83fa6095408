//! Standard iterator adapters for [`Seq`].
//!
//! A [`Seq`] is not itself an [`Iterator`], so that its consuming methods (which take
//! `&mut self` and leave the sequence usable) are never shadowed by the by-value
//! methods of the same name on `Iterator`. These adapters are the bridge to `for`
//! loops and the wider iterator ecosystem.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = iter([10, 20, 30]);
//! for value in &mut seq {
//!     if value == 20 {
//!         break;
//!     }
//! }
//! // Iterating again picks up where the loop stopped.
//! let rest: Vec<_> = seq.into_iter().collect();
//! assert_eq!(rest, vec![30]);
//! ```

use std::iter::FusedIterator;

use crate::{Cursor, Seq};

/// Iterator over the remaining values of a borrowed [`Seq`].
///
/// Created by [`Seq::iter`] or by iterating `&mut Seq`.
pub struct Iter<'a, C> {
    seq: &'a mut Seq<C>,
}

impl<'a, C: Cursor> Iter<'a, C> {
    pub(crate) fn new(seq: &'a mut Seq<C>) -> Self {
        Self { seq }
    }
}

impl<C: Cursor> Iterator for Iter<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next().yielded_value()
    }
}

impl<C: Cursor> FusedIterator for Iter<'_, C> {}

/// Owning iterator over a [`Seq`].
pub struct IntoIter<C> {
    seq: Seq<C>,
}

impl<C: Cursor> IntoIter<C> {
    /// Recover the sequence, positioned after the last value this iterator returned.
    pub fn into_seq(self) -> Seq<C> {
        self.seq
    }
}

impl<C: Cursor> Iterator for IntoIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next().yielded_value()
    }
}

impl<C: Cursor> FusedIterator for IntoIter<C> {}

impl<C: Cursor> IntoIterator for Seq<C> {
    type Item = C::Item;
    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, C: Cursor> IntoIterator for &'a mut Seq<C> {
    type Item = C::Item;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
