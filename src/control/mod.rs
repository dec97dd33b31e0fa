//! Control structures for composing fallible computations.
//!
//! - [`Outcome`]: success or failure, first error wins
//! - [`Validation`]: success or accumulated failures
//! - [`Lazy`]: memoizing thunk
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::{Outcome, Validation};
//!
//! let checked: Outcome<String, i32> = Outcome::Ok(3);
//! let validated: Validation<String, i32> = checked.into();
//! assert!(validated.is_valid());
//! ```

mod lazy;
mod outcome;
mod validation;

pub use lazy::{Lazy, LazyPoisoned, LazyState};
pub use outcome::{Outcome, err, ok};
pub use validation::Validation;
