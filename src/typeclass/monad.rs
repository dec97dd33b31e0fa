//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! `Validation` deliberately has no instance: a dependent step cannot run
//! when its input is missing, so errors could not be accumulated across it.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Feeds the contained value to `function`, flattening the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        function(self?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(n: i32) -> Option<i32> {
        (n % 2 == 0).then_some(n / 2)
    }

    #[rstest]
    #[case(Some(8), Some(2))]
    #[case(Some(6), None)]
    #[case(None, None)]
    fn option_flat_map_chains(#[case] value: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(value.flat_map(half).flat_map(half), expected);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn outcome_then_keeps_first_error() {
        use crate::control::Outcome;

        let first: Outcome<&str, i32> = Outcome::Err("first");
        assert_eq!(first.then(Outcome::<&str, i32>::Ok(2)), Outcome::Err("first"));
    }
}
