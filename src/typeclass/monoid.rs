//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a   // left identity
//! a.combine(Self::empty()) == a   // right identity
//! ```

use std::collections::BTreeMap;

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use outcomes::typeclass::Monoid;
///
/// let errors = vec![vec!["a"], vec![], vec!["b", "c"]];
/// assert_eq!(Vec::combine_all(errors), vec!["a", "b", "c"]);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Folds every element with `combine`, starting from `empty`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}
