//! Validation type - accumulate every failure instead of stopping at the first.
//!
//! `Validation<E, A>` has the same shape as [`Outcome`] but a different
//! combination policy. Combining independent validations with
//! [`Applicative::map2`] (or the helpers in
//! [`crate::combinator::validation`]) evaluates every input and merges all
//! failures with [`Semigroup::combine`]. There is intentionally no `chain`:
//! a dependent step cannot run without its input, which would silently drop
//! the errors it might have reported. Convert to an [`Outcome`] with
//! [`Validation::into_outcome`] when sequencing is needed.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Validation;
//! use outcomes::typeclass::Applicative;
//!
//! let name: Validation<Vec<&str>, &str> = Validation::Invalid(vec!["name is empty"]);
//! let age: Validation<Vec<&str>, u8> = Validation::Invalid(vec!["age is negative"]);
//!
//! let person = name.map2(age, |name, age| (name, age));
//! assert_eq!(person, Validation::Invalid(vec!["name is empty", "age is negative"]));
//! ```

use super::Outcome;
use crate::typeclass::{Applicative, Functor, Semigroup, TypeConstructor};

/// A validated value or the accumulated validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, A> {
    /// The input passed validation.
    Valid(A),
    /// The input failed; `E` holds every failure found.
    Invalid(E),
}

impl<E, A> Validation<E, A> {
    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Applies `function` to the valid value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Applies `function` to the accumulated failures.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Validation<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(function(errors)),
        }
    }

    /// Runs exactly one of the two callbacks and returns its result.
    #[inline]
    pub fn match_case<T, F, G>(self, on_valid: F, on_invalid: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Falls back to `alternative` when invalid; the failures are dropped.
    #[inline]
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            valid @ Self::Valid(_) => valid,
            Self::Invalid(_) => alternative(),
        }
    }

    /// Replaces the valid value with `value`.
    #[inline]
    pub fn replace_pure<B>(self, value: B) -> Validation<E, B> {
        self.map(|_| value)
    }

    /// Discards the valid value.
    #[inline]
    pub fn void_out(self) -> Validation<E, ()> {
        self.replace_pure(())
    }

    /// Returns the valid value, or `fallback`.
    #[inline]
    pub fn default_with(self, fallback: A) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => fallback,
        }
    }

    /// Returns `vec![value]` when valid and an empty vector otherwise.
    #[inline]
    pub fn to_vec(self) -> Vec<A> {
        match self {
            Self::Valid(value) => vec![value],
            Self::Invalid(_) => Vec::new(),
        }
    }

    /// Converts into a first-error-wins [`Outcome`].
    #[inline]
    pub fn into_outcome(self) -> Outcome<E, A> {
        match self {
            Self::Valid(value) => Outcome::Ok(value),
            Self::Invalid(errors) => Outcome::Err(errors),
        }
    }
}

impl<E: Semigroup, A> Validation<E, A> {
    /// Requires both validations to pass, keeping both values.
    ///
    /// Failures from both sides are combined, left first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Validation;
    ///
    /// let left: Validation<String, i32> = Validation::Invalid("a".to_string());
    /// let right: Validation<String, i32> = Validation::Invalid("b".to_string());
    /// assert_eq!(left.and(right), Validation::Invalid("ab".to_string()));
    /// ```
    #[inline]
    pub fn and<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.combine(right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Validation<E, A> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        outcome.match_case(Self::Valid, Self::Invalid)
    }
}

impl<E, A> From<Validation<E, A>> for Outcome<E, A> {
    #[inline]
    fn from(validation: Validation<E, A>) -> Self {
        validation.into_outcome()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E: Semigroup, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and(second)
            .and(third)
            .map(|((a, b), c)| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.and(other).map(|(function, b)| function(b))
    }
}
