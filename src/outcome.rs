//! Success-or-failure values.
//!
//! [`Outcome<T, E>`] is what fallible accumulation steps return, and what
//! [`Seq::try_fold`](crate::Seq::try_fold) hands back to its caller. It converts
//! losslessly to and from [`Result`], so callers can keep using `?` at their own
//! boundaries.
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! fn parse_step(acc: i64, token: &str) -> Outcome<i64, String> {
//!     token.parse::<i64>().map(|n| acc + n).map_err(|_| token.to_string()).into()
//! }
//!
//! let total = iter(["1", "2", "3"]).try_fold(0, parse_step);
//! assert_eq!(total, Outcome::Success(6));
//! assert_eq!(total.into_result(), Ok(6));
//! ```

use crate::Maybe;

/// Either a success carrying `T` or a failure carrying `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded
    Success(T),
    /// The operation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::Success(1);
    /// assert!(ok.is_success());
    /// assert!(!ok.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success payload, if any.
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(err) => Maybe::Present(err),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(err) => Outcome::Failure(f(err)),
        }
    }

    /// Continues with `f` on success; a failure is passed through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Outcome;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::Failure(n) };
    ///
    /// assert_eq!(Outcome::Success(8).and_then(halve).and_then(halve), Outcome::Success(2));
    /// assert_eq!(Outcome::Success(6).and_then(halve).and_then(halve), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_exclusive() {
        let ok: Outcome<i32, &str> = Outcome::Success(1);
        let err: Outcome<i32, &str> = Outcome::Failure("bad");

        assert!(ok.is_success() && !ok.is_failure());
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn test_payload_accessors() {
        let ok: Outcome<i32, &str> = Outcome::Success(1);
        let err: Outcome<i32, &str> = Outcome::Failure("bad");

        assert_eq!(ok.success(), Maybe::Present(1));
        assert_eq!(ok.failure(), Maybe::Absent);
        assert_eq!(err.success(), Maybe::Absent);
        assert_eq!(err.failure(), Maybe::Present("bad"));
    }

    #[test]
    fn test_map_and_map_failure() {
        let ok: Outcome<i32, &str> = Outcome::Success(2);
        let err: Outcome<i32, &str> = Outcome::Failure("bad");

        assert_eq!(ok.map(|v| v + 1), Outcome::Success(3));
        assert_eq!(err.map(|v| v + 1), Outcome::Failure("bad"));
        assert_eq!(err.map_failure(str::len), Outcome::Failure(3));
        assert_eq!(err.unwrap_or(9), 9);
    }

    #[test]
    fn test_result_conversions() {
        let from_ok: Outcome<i32, String> = Ok(5).into();
        assert_eq!(from_ok, Outcome::Success(5));

        let back: Result<i32, String> = Outcome::Failure("x".to_string()).into();
        assert_eq!(back, Err("x".to_string()));
    }
}
