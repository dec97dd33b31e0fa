//! Functor type class - mapping over a value in a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::Functor;
//!
//! let x: Option<i32> = Some(5);
//! assert_eq!(x.fmap(|n| n.to_string()), Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` applies a function to the value inside the context while keeping
/// the context itself (present/absent, success/failure) untouched.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::Outcome;
/// use outcomes::typeclass::Functor;
///
/// let parsed: Outcome<String, i32> = Outcome::Ok(21);
/// assert_eq!(parsed.fmap(|n| n * 2), Outcome::Ok(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the contained value with `value`, keeping the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("done"), Some("done"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some(6))]
    #[case(None, None)]
    fn option_fmap(#[case] value: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(value.fmap(|x| x + 1), expected);
    }

    #[rstest]
    fn option_void_keeps_presence() {
        assert_eq!(Some("x").void(), Some(()));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn outcome_replace_through_trait_keeps_error() {
        use crate::control::Outcome;

        let failed: Outcome<&str, i32> = Outcome::Err("boom");
        assert_eq!(Functor::replace(failed, "x"), Outcome::Err("boom"));
    }
}
