//! Present-or-absent values.
//!
//! [`Maybe<T>`] is what lookups, comparisons and parsers in this crate return when
//! there may be nothing to report. Absence is its own variant, so every `T` (including
//! `()` or a value that some other API would treat as "empty") can be present.

use crate::Outcome;

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Maybe;
///
/// let found = Maybe::Present(3);
/// let missing: Maybe<i32> = Maybe::Absent;
///
/// assert!(found.is_present());
/// assert!(missing.is_absent());
/// assert_eq!(missing.unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// Nothing to report
    #[default]
    Absent,
    /// A value is present
    Present(T),
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert!(Maybe::Present(()).is_present());
    /// assert!(!Maybe::<()>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Maps the present value through `f`, leaving absence untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Maybe;
    ///
    /// assert_eq!(Maybe::Present(2).map(|v| v * 10), Maybe::Present(20));
    /// assert_eq!(Maybe::<i32>::Absent.map(|v| v * 10), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chains another lookup that may itself be absent.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) if predicate(&value) => Maybe::Present(value),
            _ => Maybe::Absent,
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the present value or computes one from `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is absent.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("{}", msg),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Turns absence into a failure carrying `err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Present(1).ok_or("none"), Outcome::Success(1));
    /// assert_eq!(Maybe::<i32>::Absent.ok_or("none"), Outcome::Failure("none"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Maybe::Present(value) => Outcome::Success(value),
            Maybe::Absent => Outcome::Failure(err),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_predicates_are_complementary() {
        let present = Maybe::Present(0);
        let absent: Maybe<i32> = Maybe::Absent;

        assert!(present.is_present());
        assert!(!present.is_absent());
        assert!(absent.is_absent());
        assert!(!absent.is_present());
    }

    #[test]
    fn test_unit_and_zero_are_presentable() {
        // No value of T doubles as the absence marker.
        assert!(Maybe::Present(()).is_present());
        assert!(Maybe::Present(Maybe::<i32>::Absent).is_present());
        assert_ne!(Maybe::Present(0), Maybe::Absent);
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::Absent);
    }

    #[test]
    fn test_combinators() {
        assert_eq!(Maybe::Present(4).filter(|v| v % 2 == 0), Maybe::Present(4));
        assert_eq!(Maybe::Present(3).filter(|v| v % 2 == 0), Maybe::Absent);
        assert_eq!(
            Maybe::Present("7").and_then(|s| Maybe::from(s.parse::<i32>().ok())),
            Maybe::Present(7)
        );
        assert_eq!(Maybe::<i32>::Absent.unwrap_or_default(), 0);
        assert_eq!(Maybe::Present(5).as_ref(), Maybe::Present(&5));
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Maybe::from(Some(1)).into_option(), Some(1));
        assert_eq!(Option::<i32>::from(Maybe::Absent), None);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
    fn test_unwrap_absent_panics() {
        Maybe::<i32>::Absent.unwrap();
    }
}
