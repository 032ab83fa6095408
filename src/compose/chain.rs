use crate::{Cursor, Step};

/// Runs the first cursor to exhaustion, then continues with the second.
///
/// Created via [`Seq::chain`](crate::Seq::chain). The first cursor is dropped from
/// memory once it completes.
pub struct Chain<L, R>(Option<L>, R);

impl<L, R> Chain<L, R> {
    pub(crate) fn new(l: L, r: R) -> Self {
        Chain(Some(l), r)
    }
}

impl<L, R> Cursor for Chain<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Step<L::Item> {
        if let Some(ref mut l) = self.0 {
            match l.next() {
                Step::Yielded(value) => return Step::Yielded(value),
                Step::Complete => self.0 = None, // we drop the first cursor when it's done
            }
        }
        self.1.next()
    }
}

/// Pulls two cursors in lockstep, yielding pairs.
///
/// The left cursor is pulled first; if it has ended the right one is not pulled.
/// Once either side ends, neither is pulled again.
pub struct Zip<L, R> {
    left: L,
    right: R,
    done: bool,
}

impl<L, R> Zip<L, R> {
    pub(crate) fn new(left: L, right: R) -> Self {
        Zip {
            left,
            right,
            done: false,
        }
    }
}

impl<L, R> Cursor for Zip<L, R>
where
    L: Cursor,
    R: Cursor,
{
    type Item = (L::Item, R::Item);

    fn next(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Complete;
        }
        let Step::Yielded(l) = self.left.next() else {
            self.done = true;
            return Step::Complete;
        };
        match self.right.next() {
            Step::Yielded(r) => Step::Yielded((l, r)),
            Step::Complete => {
                self.done = true;
                Step::Complete
            }
        }
    }
}
