//! Memoizing thunk.
//!
//! `Lazy<T, F>` holds a producer and runs it the first time the value is
//! forced. The result is cached for the lifetime of the `Lazy`; later forces
//! return the cached value without calling the producer again.
//!
//! A typical use is caching the outcome of an expensive validation that
//! several consumers inspect:
//!
//! ```rust
//! use outcomes::control::{Lazy, Outcome};
//!
//! let checked = Lazy::new(|| -> Outcome<String, u32> { Outcome::Ok(40 + 2) });
//! assert!(!checked.is_initialized());
//! assert_eq!(*checked.force(), Outcome::Ok(42));
//! assert!(checked.is_initialized());
//! ```
//!
//! # Thread Safety
//!
//! `Lazy` is backed by a `RefCell` and is therefore `!Sync`. Forcing it from
//! inside its own producer panics with a borrow error.

use std::cell::{Ref, RefCell};
use std::fmt;

use super::Outcome;

/// The internal state of a [`Lazy`].
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The producer has not run yet.
    Uninit(F),
    /// The producer ran and its value is cached.
    Init(T),
    /// The producer panicked; the value can never be produced.
    Poisoned,
}

/// Returned by [`Lazy::into_inner`] when the producer had panicked earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyPoisoned;

impl fmt::Display for LazyPoisoned {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("lazy value poisoned by a panicking producer")
    }
}

impl std::error::Error for LazyPoisoned {}

/// A lazily computed, memoized value.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::Lazy;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     calls.set(calls.get() + 1);
///     42
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(*lazy.force(), 42);
/// assert_eq!(*lazy.force(), 42);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

static_assertions::assert_not_impl_any!(Lazy<i32>: Sync);

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Wraps `producer` without running it.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(producer)),
        }
    }

    /// Returns the value, running the producer on first use.
    ///
    /// # Panics
    ///
    /// Panics if the producer panicked on an earlier force, or if called
    /// re-entrantly from within the producer.
    pub fn force(&self) -> Ref<'_, T> {
        if !self.is_initialized() {
            self.initialize();
        }
        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            LazyState::Uninit(_) | LazyState::Poisoned => {
                panic!("Lazy instance has been poisoned")
            }
        })
    }

    /// Consumes the `Lazy`, running the producer if it has not run yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::{Lazy, Outcome};
    ///
    /// let lazy = Lazy::new(|| 7);
    /// assert_eq!(lazy.into_inner(), Outcome::Ok(7));
    /// ```
    pub fn into_inner(self) -> Outcome<LazyPoisoned, T> {
        match self.state.into_inner() {
            LazyState::Init(value) => Outcome::Ok(value),
            LazyState::Uninit(producer) => Outcome::Ok(producer()),
            LazyState::Poisoned => Outcome::Err(LazyPoisoned),
        }
    }

    /// Defers `function` until the mapped value is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Lazy;
    ///
    /// let doubled = Lazy::new(|| 21).map(|x| x * 2);
    /// assert_eq!(*doubled.force(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || function(self.run()))
    }

    /// Defers combining two lazy values until the result is forced.
    pub fn zip_with<U, V, OtherFunction, CombineFunction>(
        self,
        other: Lazy<U, OtherFunction>,
        function: CombineFunction,
    ) -> Lazy<V, impl FnOnce() -> V>
    where
        OtherFunction: FnOnce() -> U,
        CombineFunction: FnOnce(T, U) -> V,
    {
        Lazy::new(move || function(self.run(), other.run()))
    }

    fn run(self) -> T {
        match self.into_inner() {
            Outcome::Ok(value) => value,
            Outcome::Err(poisoned) => panic!("{poisoned}"),
        }
    }

    fn initialize(&self) {
        let mut state = self.state.borrow_mut();
        let previous = std::mem::replace(&mut *state, LazyState::Poisoned);
        // Poisoned stays in place if the producer unwinds.
        *state = match previous {
            LazyState::Uninit(producer) => LazyState::Init(producer()),
            settled => settled,
        };
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates an already initialized `Lazy`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the cached value without forcing.
    #[inline]
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        })
        .ok()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns whether the producer panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}
