//! # outcomes
//!
//! Composable fallible computations for Rust.
//!
//! ## Overview
//!
//! The crate is built around [`control::Outcome`], a two-case value that is
//! either a success (`Ok`) or a failure (`Err`), and the combinators that
//! chain functions returning it. It includes:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Control Structures**: Outcome, Validation, Lazy
//! - **Combinators**: sequence, `map_m`, `reduce_m`, lift, record building
//! - **Async Combinators**: the same helpers over futures of outcomes
//! - **Decoders**: JSON decoders reporting [`error::StructuredError`]s
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: Outcome, Validation and Lazy
//! - `combinator`: Kleisli combinators and record building
//! - `async`: Future-based combinators
//! - `decoder`: JSON decoders
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn parse(text: &str) -> Outcome<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("40").chain(|x| parse("2").map(|y| x + y));
//! assert_eq!(total, Outcome::Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type class traits, the control types and
/// [`error::StructuredError`].
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "decoder")]
    pub use crate::decoder::Decoder;

    pub use crate::error::StructuredError;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "decoder")]
pub mod decoder;
