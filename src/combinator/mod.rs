//! Kleisli combinators: folding many outcomes into one.
//!
//! The functions re-exported at this level follow the first-error-wins
//! policy of [`Outcome`](crate::control::Outcome). Submodules hold the same
//! shapes for other policies:
//!
//! - [`maybe`]: over `Option`, `None` wins
//! - [`validation`]: over [`Validation`](crate::control::Validation), every
//!   failure is accumulated
//! - [`list`]: the plain, infallible list helpers
//!
//! # Examples
//!
//! ```rust
//! use outcomes::combinator::{map_m, reduce_m, when};
//! use outcomes::control::Outcome;
//!
//! fn check_stock(item: &str) -> Outcome<String, u32> {
//!     match item {
//!         "apple" => Outcome::Ok(3),
//!         "pear" => Outcome::Ok(0),
//!         other => Outcome::Err(format!("unknown item {other}")),
//!     }
//! }
//!
//! let stock = map_m(check_stock, ["apple", "pear"]);
//! assert_eq!(stock, Outcome::Ok(vec![3, 0]));
//!
//! let total = stock.chain(|counts| reduce_m(|sum, n| Outcome::Ok(sum + n), 0, counts));
//! assert_eq!(total.clone(), Outcome::Ok(3));
//!
//! let guard = when(total.default_with(0) == 0, Outcome::Err("out of stock".to_string()));
//! assert_eq!(guard, Outcome::Ok(()));
//! ```

pub mod list;
pub mod maybe;
pub mod validation;

mod lift;
mod record;
mod sequence;

pub use lift::{lift2, lift3, lift4, lift5, lift6};
pub use record::{Record, RecordBuilder, record};
pub use sequence::{
    errors, for_m, join, map_and_unzip_with, map_m, oks, reduce_m, sequence, unless, when,
    zip_with_m,
};
