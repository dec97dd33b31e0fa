//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over a value in a context
//! - [`Applicative`]: Combining independent values in a context
//! - [`Monad`]: Sequencing dependent computations
//! - [`Semigroup`]: Associative binary operations, used to merge errors
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior so the traits above can be stated once for every container.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::typeclass::{Applicative, Semigroup};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
