//! Applicative type class - combining independent values in a context.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value,
//! and `map2`/`map3`, which combine several independent contexts with a
//! plain function. How failures combine is up to each instance: `Outcome`
//! keeps the first error while `Validation` accumulates all of them.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                          // identity
//! pure(f).apply(pure(x)) == pure(f(x))            // homomorphism
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::Applicative;
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for combining independent computations in a context.
///
/// # Examples
///
/// ```rust
/// use outcomes::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, still requiring the right one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, still requiring the left one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

/// Absence wins: the result is `None` as soon as any argument is `None`.
impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Some(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        let function = self?;
        Some(function(other?))
    }
}
