//! Semigroup type class - types with an associative binary operation.
//!
//! `Validation` needs its error type to be a semigroup so that independent
//! failures can be merged: sequences concatenate, maps merge key-wise.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::collections::BTreeMap;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use outcomes::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::<String>::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is treated as "no error yet": `Some` values combine, `None` is skipped.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Key-wise merge. Values present under the same key are combined.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
