//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Outcome<E, _>`
//! directly. `TypeConstructor` records the element type of a container and
//! how to rebuild the same container around a different element type, which
//! is enough to state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::TypeConstructor;
//!
//! fn element_of<T: TypeConstructor<Inner = i32>>(_: &T) {}
//! element_of(&Some(1));
//! ```

/// A container with one varying element type.
///
/// * `Inner` is the element type currently stored.
/// * `WithType<B>` is the same container holding `B` instead.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same container shape around a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
