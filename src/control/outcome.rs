//! Outcome type - the success or failure of a computation.
//!
//! This module provides `Outcome<E, A>`, a value that is either `Ok(A)` or
//! `Err(E)`. It is the first-error-wins building block of the crate:
//! every combinator in [`crate::combinator`] stops at the first `Err` it
//! meets and hands that error back unchanged.
//!
//! Failures are ordinary values. Nothing here catches a panic raised by a
//! user callback; it unwinds through the combinator untouched.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Outcome;
//!
//! fn parse_port(text: &str) -> Outcome<String, u16> {
//!     text.parse::<u16>().map_err(|error| error.to_string()).into()
//! }
//!
//! let port = parse_port("8080")
//!     .chain(|port| {
//!         if port >= 1024 {
//!             Outcome::Ok(port)
//!         } else {
//!             Outcome::Err(format!("port {port} is privileged"))
//!         }
//!     })
//!     .default_with(3000);
//! assert_eq!(port, 8080);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The outcome of a computation that may fail.
///
/// # Type Parameters
///
/// * `E` - The error payload of a failed computation
/// * `A` - The value of a successful computation
///
/// # Examples
///
/// ```rust
/// use outcomes::control::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::Ok(42);
/// assert_eq!(success.map(|x| x * 2), Outcome::Ok(84));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<E, A> {
    /// A successful computation result.
    Ok(A),
    /// A failed computation's error payload.
    Err(E),
}

/// Wraps `value` as a successful outcome.
#[inline]
pub fn ok<E, A>(value: A) -> Outcome<E, A> {
    Outcome::Ok(value)
}

/// Wraps `error` as a failed outcome.
#[inline]
pub fn err<E, A>(error: E) -> Outcome<E, A> {
    Outcome::Err(error)
}

impl<E, A> Outcome<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option` of the success value.
    #[inline]
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an `Option` of the error payload.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows both payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    ///
    /// let value: Outcome<String, String> = Outcome::Ok("text".to_string());
    /// assert_eq!(value.as_ref().map(|s| s.len()), Outcome::Ok(4));
    /// assert!(value.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value, or `fallback` for an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::Err("boom");
    /// assert_eq!(failed.default_with(0), 0);
    /// ```
    #[inline]
    pub fn default_with(self, fallback: A) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns `vec![value]` for an `Ok` and an empty vector otherwise.
    #[inline]
    pub fn to_vec(self) -> Vec<A> {
        match self {
            Self::Ok(value) => vec![value],
            Self::Err(_) => Vec::new(),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value.
    ///
    /// `function` runs exactly once, and only for an `Ok`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `function` to the error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    ///
    /// let failed: Outcome<i32, ()> = Outcome::Err(404);
    /// assert_eq!(failed.map_error(|code| format!("HTTP {code}")), Outcome::Err("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Maps whichever side is present.
    #[inline]
    pub fn bimap<E2, B, F, G>(self, error_function: F, value_function: G) -> Outcome<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value_function(value)),
            Self::Err(error) => Outcome::Err(error_function(error)),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Feeds the success value into the next fallible step.
    ///
    /// An `Err` short-circuits: `function` is never called.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Keeps `next` if `self` is `Ok`, otherwise propagates the error.
    #[inline]
    pub fn replace<B>(self, next: Outcome<E, B>) -> Outcome<E, B> {
        self.chain(|_| next)
    }

    /// Replaces the success value with `value`.
    #[inline]
    pub fn replace_pure<B>(self, value: B) -> Outcome<E, B> {
        self.replace(Outcome::Ok(value))
    }

    /// Discards the success value.
    #[inline]
    pub fn void_out(self) -> Outcome<E, ()> {
        self.replace_pure(())
    }

    /// Falls back to `alternative` when `self` failed.
    ///
    /// `alternative` is only evaluated for an `Err`; the original error is
    /// dropped in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    ///
    /// let primary: Outcome<&str, i32> = Outcome::Err("cache miss");
    /// assert_eq!(primary.or(|| Outcome::Ok(7)), Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn or<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            success @ Self::Ok(_) => success,
            Self::Err(_) => alternative(),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Runs exactly one of the two callbacks and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    ///
    /// let value: Outcome<String, i32> = Outcome::Ok(3);
    /// let text = value.match_case(|n| format!("got {n}"), |error| format!("failed: {error}"));
    /// assert_eq!(text, "got 3");
    /// ```
    #[inline]
    pub fn match_case<T, F, G>(self, on_ok: F, on_err: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Exchanges the two roles: `Ok(a)` becomes `Err(a)` and vice versa.
    #[inline]
    pub fn swap(self) -> Outcome<A, E> {
        match self {
            Self::Ok(value) => Outcome::Err(value),
            Self::Err(error) => Outcome::Ok(error),
        }
    }
}

impl<E, A> Outcome<E, Outcome<E, A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<E, A> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    #[inline]
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

/// Collects into `Ok` of every value, or the first `Err` met.
///
/// Iteration stops at the first `Err`.
impl<E, A, V> FromIterator<Outcome<E, A>> for Outcome<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<E, A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Result::from)
            .collect::<Result<V, E>>()
            .into()
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<E, A> TypeConstructor for Outcome<E, A> {
    type Inner = A;
    type WithType<B> = Outcome<E, B>;
}

impl<E, A> Functor for Outcome<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Applicative for Outcome<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(function(a, b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => Outcome::Ok(function(a, b, c)),
            (Self::Err(error), _, _) | (_, Outcome::Err(error), _) | (_, _, Outcome::Err(error)) => {
                Outcome::Err(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<E, B>) -> Outcome<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Ok(function), Outcome::Ok(b)) => Outcome::Ok(function(b)),
            (Self::Err(error), _) | (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }
}

impl<E, A> Monad for Outcome<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        self.chain(function)
    }
}
