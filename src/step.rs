use crate::Maybe;

/// Result of pulling a cursor once: either the next value or the end of the sequence.
///
/// `Step` is the return type of [`Cursor::next`](crate::Cursor::next). Once a cursor
/// has returned `Complete`, every later pull returns `Complete` as well.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let pulled: Step<i32> = Step::Yielded(42);
/// let ended: Step<i32> = Step::Complete;
///
/// assert_eq!(pulled.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(ended.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The cursor produced a value
    Yielded(T),
    /// The cursor is exhausted
    Complete,
}

impl<T> Step<T> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x = Step::Yielded(42);
    /// assert!(x.is_yielded());
    ///
    /// let y: Step<i32> = Step::Complete;
    /// assert!(!y.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32> = Step::Complete;
    /// assert!(x.is_complete());
    ///
    /// let y = Step::Yielded(42);
    /// assert!(!y.is_complete());
    /// ```
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete)
    }

    /// Converts from `Step<T>` to `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(42).yielded_value(), Some(42));
    /// assert_eq!(Step::<i32>::Complete.yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Complete => None,
        }
    }

    /// Converts from `Step<T>` to [`Maybe<T>`], treating the end of the sequence as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::{Maybe, Step};
    ///
    /// assert_eq!(Step::Yielded(1).into_maybe(), Maybe::Present(1));
    /// assert_eq!(Step::<i32>::Complete.into_maybe(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Step::Yielded(value) => Maybe::Present(value),
            Step::Complete => Maybe::Absent,
        }
    }

    /// Maps a `Step<T>` to `Step<U>` by applying a function to the yielded value.
    ///
    /// The function is never invoked on `Complete`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(42).map_yielded(|v| v * 2), Step::Yielded(84));
    /// assert_eq!(Step::<i32>::Complete.map_yielded(|v| v * 2), Step::Complete);
    /// ```
    #[inline]
    pub fn map_yielded<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Complete => Step::Complete,
        }
    }

    /// Returns the yielded value or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(42).yielded_or(0), 42);
    /// assert_eq!(Step::Complete.yielded_or(0), 0);
    /// ```
    #[inline]
    pub fn yielded_or(self, default: T) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Complete => default,
        }
    }

    /// Returns the yielded value or computes it from a closure.
    #[inline]
    pub fn yielded_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Step::Yielded(value) => value,
            Step::Complete => f(),
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Complete => Step::Complete,
        }
    }

    /// Converts from `&mut Step<T>` to `Step<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// let mut x = Step::Yielded(42);
    /// if let Step::Yielded(v) = x.as_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(x, Step::Yielded(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Step<&mut T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Complete => Step::Complete,
        }
    }

    /// Returns `true` if the step is a `Yielded` value equal to the given value.
    #[inline]
    pub fn contains_yielded<U>(&self, other: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Step::Yielded(v) if other == v)
    }

    /// Returns the contained `Yielded` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Complete` with a custom panic message provided by `msg`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// let x: Step<i32> = Step::Complete;
    /// x.expect_yielded("sequence ended early"); // panics with "sequence ended early"
    /// ```
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Complete => panic!("{}", msg),
        }
    }

    /// Returns the contained `Yielded` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Complete`.
    #[inline]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Complete => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Yielded(value),
            None => Step::Complete,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.yielded_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y = Step::Yielded(42);
        let d: Step<i32> = Step::Complete;

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_yielded_value_and_into_maybe() {
        assert_eq!(Step::Yielded(42).yielded_value(), Some(42));
        assert_eq!(Step::<i32>::Complete.yielded_value(), None);
        assert_eq!(Step::Yielded("a").into_maybe(), Maybe::Present("a"));
        assert_eq!(Step::<&str>::Complete.into_maybe(), Maybe::Absent);
    }

    #[test]
    fn test_map_yielded_skips_complete() {
        let mut calls = 0;
        let mapped = Step::<i32>::Complete.map_yielded(|x| {
            calls += 1;
            x * 2
        });
        assert_eq!(mapped, Step::Complete);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_yielded_or_and_or_else() {
        assert_eq!(Step::Yielded(42).yielded_or(0), 42);
        assert_eq!(Step::Complete.yielded_or(0), 0);
        assert_eq!(Step::Yielded(42).yielded_or_else(|| 0), 42);
        assert_eq!(Step::Complete.yielded_or_else(|| 7), 7);
    }

    #[test]
    fn test_as_ref_and_as_mut() {
        let mut y = Step::Yielded(String::from("a"));
        assert_eq!(y.as_ref(), Step::Yielded(&String::from("a")));
        if let Step::Yielded(v) = y.as_mut() {
            v.push('b');
        }
        assert!(y.contains_yielded(&String::from("ab")));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Step::from(Some(3)), Step::Yielded(3));
        assert_eq!(Step::<i32>::from(None), Step::Complete);
        assert_eq!(Option::from(Step::Yielded(3)), Some(3));
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on a `Complete` value")]
    fn test_unwrap_yielded_panics() {
        Step::<i32>::Complete.unwrap_yielded();
    }

    #[test]
    #[should_panic(expected = "sequence ended")]
    fn test_expect_yielded_panics() {
        Step::<i32>::Complete.expect_yielded("sequence ended");
    }
}
