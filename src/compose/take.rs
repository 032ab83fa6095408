use crate::{Cursor, Step};

/// Yields at most `n` values, never pulling the parent past them.
pub struct Take<C> {
    cursor: C,
    remaining: usize,
}

impl<C> Take<C> {
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        Take {
            cursor,
            remaining: n,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        if self.remaining == 0 {
            return Step::Complete;
        }
        match self.cursor.next() {
            Step::Yielded(value) => {
                self.remaining -= 1;
                Step::Yielded(value)
            }
            Step::Complete => {
                self.remaining = 0;
                Step::Complete
            }
        }
    }
}

/// Discards the first `n` values on the first pull.
pub struct Skip<C> {
    cursor: C,
    pending: usize,
}

impl<C> Skip<C> {
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        Skip { cursor, pending: n }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.cursor.next().is_complete() {
                self.pending = 0;
                return Step::Complete;
            }
        }
        self.cursor.next()
    }
}
