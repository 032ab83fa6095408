//! Per-element transformations.
//!
//! This module provides [`Map`], [`Inspect`] and [`Enumerate`], the adapters behind
//! [`Seq::map`](crate::Seq::map), [`Seq::inspect`](crate::Seq::inspect) and
//! [`Seq::enumerate`](crate::Seq::enumerate). Each pulls its parent exactly once per
//! pull of its own.

use crate::{Cursor, Step};

/// Transforms each value pulled from the wrapped cursor.
///
/// The end of the parent is passed through without calling `f`.
pub struct Map<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Map { cursor, f }
    }
}

impl<U, C, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Step<U> {
        self.cursor.next().map_yielded(&mut self.f)
    }
}

/// Calls a function on a reference to each value before passing it on.
pub struct Inspect<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> Inspect<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Inspect { cursor, f }
    }
}

impl<C, F> Cursor for Inspect<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        let step = self.cursor.next();
        if let Step::Yielded(value) = &step {
            (self.f)(value);
        }
        step
    }
}

/// Pairs each value with its zero-based position.
///
/// The counter belongs to this adapter alone; other sequences derived from the same
/// parent keep their own.
pub struct Enumerate<C> {
    cursor: C,
    index: usize,
}

impl<C> Enumerate<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Enumerate { cursor, index: 0 }
    }
}

impl<C> Cursor for Enumerate<C>
where
    C: Cursor,
{
    type Item = (usize, C::Item);

    fn next(&mut self) -> Step<Self::Item> {
        match self.cursor.next() {
            Step::Yielded(value) => {
                let index = self.index;
                self.index += 1;
                Step::Yielded((index, value))
            }
            Step::Complete => Step::Complete,
        }
    }
}
