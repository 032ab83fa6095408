use std::marker::PhantomData;

use crate::{Cursor, Seq, Step};

/// Cursor over a closure that pulls one value per call.
///
/// Once the closure returns `Complete` it is never called again.
pub struct FromFn<F> {
    f: Option<F>,
}

impl<T, F> Cursor for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        let Some(f) = self.f.as_mut() else {
            return Step::Complete;
        };
        match f() {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Complete => {
                self.f = None;
                Step::Complete
            }
        }
    }
}

/// Create a sequence from a closure.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut seq = from_fn(move || {
///     n += 1;
///     if n <= 2 { Step::Yielded(n) } else { Step::Complete }
/// });
/// assert_eq!(seq.next(), Step::Yielded(1));
/// assert_eq!(seq.next(), Step::Yielded(2));
/// assert_eq!(seq.next(), Step::Complete);
/// ```
pub fn from_fn<T, F>(f: F) -> Seq<FromFn<F>>
where
    F: FnMut() -> Step<T>,
{
    Seq::new(FromFn { f: Some(f) })
}

/// Yields one value, then completes.
pub struct Once<T>(Option<T>);

impl<T> Cursor for Once<T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        self.0.take().into()
    }
}

/// Create a sequence holding exactly one value.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once("only");
/// assert_eq!(seq.next(), Step::Yielded("only"));
/// assert_eq!(seq.next(), Step::Complete);
/// ```
pub fn once<T>(value: T) -> Seq<Once<T>> {
    Seq::new(Once(Some(value)))
}

/// Completes immediately.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        Step::Complete
    }
}

pub fn empty<T>() -> Seq<Empty<T>> {
    Seq::new(Empty(PhantomData))
}

/// Yields clones of one value forever.
///
/// Never completes on its own; bound it with [`Seq::take`] or a short-circuiting
/// consumer.
pub struct Repeat<T>(T);

impl<T: Clone> Cursor for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        Step::Yielded(self.0.clone())
    }
}

/// Create a sequence that repeats `value` indefinitely.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = repeat('x');
/// assert!(seq.any(|c| c == 'x'));
/// assert_eq!(seq.take(3).collect::<String>(), "xxx");
/// ```
pub fn repeat<T: Clone>(value: T) -> Seq<Repeat<T>> {
    Seq::new(Repeat(value))
}
