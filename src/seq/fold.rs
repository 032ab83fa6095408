//! Consuming operations: folds, searches and extrema.
//!
//! Everything here pulls the cursor until it has an answer and no further. The
//! short-circuiting operations share one private driver whose early exit is a
//! [`ControlFlow::Break`], kept apart from the public [`Outcome`] that
//! [`Seq::try_fold`] reports to callers.

use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::ControlFlow,
};

use crate::{Cursor, Maybe, Outcome, Seq, Step};

impl<C: Cursor> Seq<C> {
    /// Fold until `f` breaks or the cursor ends.
    ///
    /// On a break the cursor is left just after the value that caused it.
    fn drive<B, R, F>(&mut self, init: B, mut f: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, C::Item) -> ControlFlow<R, B>,
    {
        let mut acc = init;
        loop {
            let Step::Yielded(value) = self.cursor.next() else {
                return ControlFlow::Continue(acc);
            };
            match f(acc, value) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(stop) => {
                    tracing::trace!("sequence short-circuited before exhaustion");
                    return ControlFlow::Break(stop);
                }
            }
        }
    }

    /// Pull until the end, combining each value into the accumulator.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(iter([1, 2, 3, 4]).fold(0, |acc, n| acc + n), 10);
    /// assert_eq!(iter(Vec::<i32>::new()).fold(0, |acc, n| acc + n), 0);
    /// ```
    pub fn fold<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, C::Item) -> B,
    {
        let mut acc = init;
        while let Step::Yielded(value) = self.cursor.next() {
            acc = f(acc, value);
        }
        acc
    }

    /// Fold using the first value as the seed. Absent if the sequence is empty.
    pub fn fold1<F>(&mut self, f: F) -> Maybe<C::Item>
    where
        F: FnMut(C::Item, C::Item) -> C::Item,
    {
        match self.cursor.next() {
            Step::Yielded(first) => Maybe::Present(self.fold(first, f)),
            Step::Complete => Maybe::Absent,
        }
    }

    /// Number of values remaining.
    pub fn count(&mut self) -> usize {
        self.fold(0, |n, _| n + 1)
    }

    /// Call `f` on each remaining value, in order.
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(C::Item),
    {
        self.fold((), |(), value| f(value));
    }

    /// The final value, or absent if there are none left.
    pub fn last(&mut self) -> Maybe<C::Item> {
        self.fold(Maybe::Absent, |_, value| Maybe::Present(value))
    }

    /// Like [`fold`](Seq::fold), but stops at the first failure and returns it.
    ///
    /// After a failure the cursor is positioned just after the value that produced
    /// it; the rest are untouched.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// fn add(acc: i64, token: &str) -> Outcome<i64, &str> {
    ///     parse_integral(token).map(|n| acc + n).ok_or(token)
    /// }
    ///
    /// let mut seq = iter(["1", "2", "a", "b"]);
    /// assert_eq!(seq.try_fold(0, add), Outcome::Failure("a"));
    /// assert_eq!(seq.next(), Step::Yielded("b"));
    /// ```
    pub fn try_fold<B, E, F>(&mut self, init: B, mut f: F) -> Outcome<B, E>
    where
        F: FnMut(B, C::Item) -> Outcome<B, E>,
    {
        let flow = self.drive(init, |acc, value| match f(acc, value) {
            Outcome::Success(next) => ControlFlow::Continue(next),
            Outcome::Failure(err) => ControlFlow::Break(err),
        });
        match flow {
            ControlFlow::Continue(acc) => Outcome::Success(acc),
            ControlFlow::Break(err) => Outcome::Failure(err),
        }
    }

    /// Call `f` on each value until it fails.
    pub fn try_for_each<E, F>(&mut self, mut f: F) -> Outcome<(), E>
    where
        F: FnMut(C::Item) -> Outcome<(), E>,
    {
        self.try_fold((), |(), value| f(value))
    }

    /// The first value satisfying `predicate`; everything before it is discarded.
    pub fn find<P>(&mut self, mut predicate: P) -> Maybe<C::Item>
    where
        P: FnMut(&C::Item) -> bool,
    {
        let flow = self.drive((), |(), value| {
            if predicate(&value) {
                ControlFlow::Break(value)
            } else {
                ControlFlow::Continue(())
            }
        });
        match flow {
            ControlFlow::Break(found) => Maybe::Present(found),
            ControlFlow::Continue(()) => Maybe::Absent,
        }
    }

    /// The first present result of `f`.
    pub fn find_map<U, F>(&mut self, mut f: F) -> Maybe<U>
    where
        F: FnMut(C::Item) -> Maybe<U>,
    {
        let flow = self.drive((), |(), value| match f(value) {
            Maybe::Present(found) => ControlFlow::Break(found),
            Maybe::Absent => ControlFlow::Continue(()),
        });
        match flow {
            ControlFlow::Break(found) => Maybe::Present(found),
            ControlFlow::Continue(()) => Maybe::Absent,
        }
    }

    /// `true` if every value satisfies `predicate`.
    ///
    /// Stops at the first value that does not; later values are not pulled. An empty
    /// sequence is vacuously `true`.
    pub fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(C::Item) -> bool,
    {
        self.drive((), |(), value| {
            if predicate(value) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// `true` if some value satisfies `predicate`, stopping at the first that does.
    pub fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(C::Item) -> bool,
    {
        self.drive((), |(), value| {
            if predicate(value) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Index of the first value satisfying `predicate`, counted from the current position.
    pub fn position<P>(&mut self, mut predicate: P) -> Maybe<usize>
    where
        P: FnMut(C::Item) -> bool,
    {
        match self.drive(0, |index, value| {
            if predicate(value) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(index + 1)
            }
        }) {
            ControlFlow::Break(index) => Maybe::Present(index),
            ControlFlow::Continue(_) => Maybe::Absent,
        }
    }

    /// The `n`th remaining value (zero-based), discarding those before it.
    pub fn nth(&mut self, n: usize) -> Maybe<C::Item> {
        match self.drive(n, |remaining, value| {
            if remaining == 0 {
                ControlFlow::Break(value)
            } else {
                ControlFlow::Continue(remaining - 1)
            }
        }) {
            ControlFlow::Break(value) => Maybe::Present(value),
            ControlFlow::Continue(_) => Maybe::Absent,
        }
    }

    /// The greatest value according to `cmp(candidate, best)`.
    ///
    /// A candidate replaces the current best only when `cmp` returns `Greater`, so the
    /// earliest of several equal maxima wins.
    pub fn max_by<F>(&mut self, mut cmp: F) -> Maybe<C::Item>
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        self.fold1(|best, candidate| match cmp(&candidate, &best) {
            Ordering::Greater => candidate,
            _ => best,
        })
    }

    /// The least value according to `cmp(candidate, best)`.
    ///
    /// A candidate replaces the current best only when `cmp` returns `Less`, so the
    /// earliest of several equal minima wins.
    pub fn min_by<F>(&mut self, mut cmp: F) -> Maybe<C::Item>
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        self.fold1(|best, candidate| match cmp(&candidate, &best) {
            Ordering::Less => candidate,
            _ => best,
        })
    }

    pub fn max(&mut self) -> Maybe<C::Item>
    where
        C::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    pub fn min(&mut self) -> Maybe<C::Item>
    where
        C::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// The value whose key `f(value)` is greatest.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(iter([1, 2, 3, 4]).max_by_key(|v| -v), Maybe::Present(1));
    /// ```
    pub fn max_by_key<K, F>(&mut self, f: F) -> Maybe<C::Item>
    where
        K: Ord,
        F: FnMut(&C::Item) -> K,
    {
        self.max_by_key_with(f, Ord::cmp)
    }

    pub fn min_by_key<K, F>(&mut self, f: F) -> Maybe<C::Item>
    where
        K: Ord,
        F: FnMut(&C::Item) -> K,
    {
        self.min_by_key_with(f, Ord::cmp)
    }

    /// The value whose key is greatest under an explicit key comparator.
    ///
    /// Each key is computed once.
    pub fn max_by_key_with<K, F, G>(&mut self, mut f: F, mut cmp: G) -> Maybe<C::Item>
    where
        F: FnMut(&C::Item) -> K,
        G: FnMut(&K, &K) -> Ordering,
    {
        self.by_ref()
            .map(|value| (f(&value), value))
            .max_by(|(candidate, _), (best, _)| cmp(candidate, best))
            .map(|(_, value)| value)
    }

    pub fn min_by_key_with<K, F, G>(&mut self, mut f: F, mut cmp: G) -> Maybe<C::Item>
    where
        F: FnMut(&C::Item) -> K,
        G: FnMut(&K, &K) -> Ordering,
    {
        self.by_ref()
            .map(|value| (f(&value), value))
            .min_by(|(candidate, _), (best, _)| cmp(candidate, best))
            .map(|(_, value)| value)
    }

    /// Drain the remaining values into any collection.
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use lazyseq::prelude::*;
    ///
    /// let set: BTreeSet<_> = iter([3, 1, 3, 2]).collect();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn collect<B>(&mut self) -> B
    where
        B: FromIterator<C::Item>,
    {
        self.iter().collect()
    }

    pub fn sum<S>(&mut self) -> S
    where
        S: Sum<C::Item>,
    {
        self.iter().sum()
    }

    pub fn product<P>(&mut self) -> P
    where
        P: Product<C::Item>,
    {
        self.iter().product()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use crate::prelude::*;

    fn add_parsed(acc: i64, token: &str) -> Outcome<i64, &str> {
        parse_integral(token).map(|n| acc + n).ok_or(token)
    }

    #[test]
    fn test_fold_sums() {
        assert_eq!(iter([1, 2, 3, 4]).fold(0, |a, b| a + b), 10);
        assert_eq!(empty::<i32>().fold(0, |a, b| a + b), 0);
    }

    #[test]
    fn test_fold1_seeds_with_first() {
        assert_eq!(iter([5, 1, 2]).fold1(|a, b| a - b), Maybe::Present(2));
        assert_eq!(empty::<i32>().fold1(|a, b| a - b), Maybe::Absent);
    }

    #[test]
    fn test_count_for_each_last() {
        assert_eq!(iter("hello".chars()).count(), 5);

        let mut seen = Vec::new();
        iter([1, 2, 3]).for_each(|v| seen.push(v));
        assert_eq!(seen, vec![1, 2, 3]);

        assert_eq!(iter([1, 2, 3]).last(), Maybe::Present(3));
        assert_eq!(empty::<i32>().last(), Maybe::Absent);
    }

    #[test]
    fn test_try_fold_succeeds() {
        assert_eq!(
            iter(["1", "2", "3", "4"]).try_fold(0, add_parsed),
            Outcome::Success(10)
        );
    }

    #[test]
    fn test_try_fold_stops_at_first_failure() {
        let pulled = Cell::new(0);
        let mut seq = iter(["1", "2", "a", "b"]).inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(seq.try_fold(0, add_parsed), Outcome::Failure("a"));
        assert_eq!(pulled.get(), 3);
        assert_eq!(seq.next(), Step::Yielded("b"));
    }

    #[test]
    fn test_try_for_each_reports_failure() {
        let mut seen = Vec::new();
        let result = iter([1, 2, 3, 4]).try_for_each(|v| {
            seen.push(v);
            if v < 3 { Outcome::Success(()) } else { Outcome::Failure(v) }
        });
        assert_eq!(result, Outcome::Failure(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_fold_accepts_std_results() {
        let total = iter(["4", "5"]).try_fold(0, |acc: u32, s: &str| {
            Outcome::from(s.parse::<u32>().map(|n| acc + n))
        });
        assert_eq!(total, Outcome::Success(9));
    }

    #[test]
    fn test_find_discards_preceding_values() {
        let mut seq = iter([1, 2, 3, 4]);
        assert_eq!(seq.find(|v| v % 2 == 0), Maybe::Present(2));
        assert_eq!(seq.next(), Step::Yielded(3));
        assert_eq!(seq.find(|v| *v > 10), Maybe::Absent);
        assert_eq!(seq.next(), Step::Complete);
    }

    #[test]
    fn test_find_map_returns_first_present() {
        let mut seq = iter(["x", "7", "8"]);
        assert_eq!(seq.find_map(parse_integral), Maybe::Present(7));
        assert_eq!(seq.next(), Step::Yielded("8"));
    }

    #[test]
    fn test_all_short_circuits() {
        let mut seq = iter([1, 2, 3, 4]);
        assert!(!seq.all(|n| n < 3));
        assert_eq!(seq.next(), Step::Yielded(4));

        let mut seq = iter([1, 2, 3, 4]);
        assert!(seq.all(|n| n > 0));
        assert_eq!(seq.next(), Step::Complete);

        assert!(empty::<i32>().all(|_| false));
    }

    #[test]
    fn test_any_short_circuits() {
        let mut seq = iter([1, 2, 3, 4]);
        assert!(seq.any(|n| n == 2));
        assert_eq!(seq.next(), Step::Yielded(3));
        assert!(!empty::<i32>().any(|_| true));
    }

    #[test]
    fn test_position_and_nth() {
        let mut seq = iter(['a', 'b', 'c', 'd']);
        assert_eq!(seq.position(|c| c == 'b'), Maybe::Present(1));
        assert_eq!(seq.nth(1), Maybe::Present('d'));
        assert_eq!(seq.nth(0), Maybe::Absent);
    }

    #[test]
    fn test_max_min_natural_order() {
        assert_eq!(iter([1, 2, 3, 4]).max(), Maybe::Present(4));
        assert_eq!(iter([1, 2, 3, 4]).min(), Maybe::Present(1));
        assert_eq!(empty::<i32>().max(), Maybe::Absent);
        assert_eq!(empty::<i32>().min(), Maybe::Absent);
    }

    #[test]
    fn test_max_by_key_returns_element_not_key() {
        assert_eq!(iter([1, 2, 3, 4]).max_by_key(|v| -v), Maybe::Present(1));
        assert_eq!(iter([1, 2, 3, 4]).min_by_key(|v| -v), Maybe::Present(4));
    }

    #[test]
    fn test_ties_keep_earliest() {
        let words = ["bb", "aa", "cc", "d"];
        assert_eq!(iter(words).max_by_key(|w| w.len()), Maybe::Present("bb"));
        assert_eq!(
            iter(["x", "yy", "z"]).min_by(|a, b| a.len().cmp(&b.len())),
            Maybe::Present("x")
        );
        assert_eq!(
            iter([(1, 'a'), (1, 'b')]).max_by(|a, b| a.0.cmp(&b.0)),
            Maybe::Present((1, 'a'))
        );
    }

    #[test]
    fn test_key_with_explicit_comparator() {
        let floats = [2.5_f64, -1.0, 9.75, 3.0];
        let max = iter(floats).max_by_key_with(|v| *v, |a, b| a.total_cmp(b));
        let min = iter(floats).min_by_key_with(|v| v.abs(), |a, b| a.total_cmp(b));
        assert_eq!(max, Maybe::Present(9.75));
        assert_eq!(min, Maybe::Present(-1.0));
    }

    #[test]
    fn test_key_is_computed_once_per_element() {
        let calls = Cell::new(0);
        let _ = iter([3, 1, 2]).max_by_key(|v| {
            calls.set(calls.get() + 1);
            *v
        });
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_collect_sum_product() {
        let v: Vec<_> = iter([1, 2]).collect();
        assert_eq!(v, vec![1, 2]);
        assert_eq!(iter([1, 2, 3]).sum::<i32>(), 6);
        assert_eq!(iter([1, 2, 3, 4]).product::<i32>(), 24);
    }

    proptest! {
        #[test]
        fn prop_fold_matches_sum(values in proptest::collection::vec(-1000i64..1000, 0..64)) {
            prop_assert_eq!(iter(values.clone()).fold(0, |a, b| a + b), values.iter().sum::<i64>());
        }

        #[test]
        fn prop_extrema_match_std(values in proptest::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(iter(values.clone()).max().into_option(), values.iter().copied().max());
            prop_assert_eq!(iter(values.clone()).min().into_option(), values.iter().copied().min());
        }

        #[test]
        fn prop_all_any_match_std(values in proptest::collection::vec(0u8..10, 0..32)) {
            prop_assert_eq!(iter(values.clone()).all(|v| v < 8), values.iter().all(|v| *v < 8));
            prop_assert_eq!(iter(values.clone()).any(|v| v == 3), values.iter().any(|v| *v == 3));
        }
    }
}
