//! Core trait for single-pass, pull-based sources.
//!
//! This module defines the [`Cursor`] trait, the one primitive every sequence in this
//! library is built on. A cursor produces its next value on demand, or reports that it
//! is exhausted.
//!
//! # The Cursor Trait
//!
//! [`Cursor`] represents a source that:
//! - Produces values of type `Item`, one per call to `next()`
//! - Reports [`Step::Complete`] once it has nothing left
//! - Keeps reporting [`Step::Complete`] on every later call
//!
//! The last point is the contract all combinators rely on: none of them track
//! exhaustion themselves.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! struct Countdown(u32);
//!
//! impl Cursor for Countdown {
//!     type Item = u32;
//!
//!     fn next(&mut self) -> Step<u32> {
//!         if self.0 == 0 {
//!             return Step::Complete;
//!         }
//!         self.0 -= 1;
//!         Step::Yielded(self.0 + 1)
//!     }
//! }
//!
//! let values: Vec<_> = Seq::new(Countdown(3)).collect();
//! assert_eq!(values, vec![3, 2, 1]);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::step::Step;

/// A single-pass source of values.
///
/// Implementors must keep returning [`Step::Complete`] once they have returned it once.
pub trait Cursor {
    /// Type of the values this cursor produces
    type Item;

    /// Pull the next value, or `Complete` if the cursor is exhausted.
    fn next(&mut self) -> Step<Self::Item>;

    fn boxed<'a>(self) -> Box<dyn Cursor<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

/// One cursor behind a shared handle.
///
/// Every clone of the `Rc` pulls from the same position, so consumers interleave.
impl<C> Cursor for Rc<RefCell<C>>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        let mut cursor = self.as_ref().borrow_mut();
        cursor.next()
    }
}

impl<L, R> Cursor for either::Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
