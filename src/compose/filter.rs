use crate::{Cursor, Maybe, Step};

/// Yields only the values that satisfy a predicate.
///
/// Rejected values are pulled and dropped; nothing is buffered.
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(cursor: C, predicate: P) -> Self {
        Filter { cursor, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        loop {
            match self.cursor.next() {
                Step::Yielded(value) if (self.predicate)(&value) => return Step::Yielded(value),
                Step::Yielded(_) => continue,
                Step::Complete => return Step::Complete,
            }
        }
    }
}

/// Maps values through a function and yields the present results.
pub struct FilterMap<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> FilterMap<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        FilterMap { cursor, f }
    }
}

impl<U, C, F> Cursor for FilterMap<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> Maybe<U>,
{
    type Item = U;

    fn next(&mut self) -> Step<U> {
        loop {
            match self.cursor.next() {
                Step::Yielded(value) => {
                    if let Maybe::Present(mapped) = (self.f)(value) {
                        return Step::Yielded(mapped);
                    }
                }
                Step::Complete => return Step::Complete,
            }
        }
    }
}
