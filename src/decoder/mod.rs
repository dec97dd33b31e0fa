//! JSON decoders producing path-annotated outcomes.
//!
//! A [`Decoder<A>`] turns a borrowed [`serde_json::Value`] into
//! `Outcome<StructuredError, A>`. Primitive decoders check the JSON type;
//! structural decoders ([`field`], [`array`], [`dict`]) wrap any inner
//! failure with the key or index where it happened, so the final error reads
//! like `at field 'items', index 2, field 'price': expected a number, got string`.
//!
//! Records are assembled with [`build!`](crate::build):
//!
//! ```rust
//! use outcomes::build;
//! use outcomes::decoder::{Decoder, field, integer, string};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let user = Decoder::new(|value| {
//!     build!(User {
//!         name: field("name", string()).decode(value),
//!         age: field("age", integer()).decode(value),
//!     })
//! });
//!
//! let decoded = user.decode(&json!({ "name": "Ada", "age": 36 }));
//! assert_eq!(decoded.ok(), Some(User { name: "Ada".to_string(), age: 36 }));
//!
//! let failed = user.decode(&json!({ "name": "Ada", "age": "old" }));
//! assert_eq!(
//!     failed.err().map(|error| error.to_string()),
//!     Some("at field 'age': expected an integer, got string".to_string())
//! );
//! ```

mod primitives;
mod structure;

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::control::Outcome;
use crate::error::StructuredError;

pub use primitives::{boolean, fail, integer, null, number, string, succeed, value};
pub use structure::{array, dict, field, nullable, one_of, optional_field};

/// The result of running a decoder.
pub type Decoded<A> = Outcome<StructuredError, A>;

/// A reusable conversion from JSON to `A`.
///
/// Cloning is cheap; clones share the same decoding function.
pub struct Decoder<A> {
    run: Rc<dyn Fn(&Value) -> Decoded<A>>,
}

impl<A> Clone for Decoder<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Decoder<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Decoder(<fn>)")
    }
}

impl<A: 'static> Decoder<A> {
    /// Wraps a decoding function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Decoded<A> + 'static,
    {
        Self {
            run: Rc::new(function),
        }
    }

    /// Runs the decoder.
    pub fn decode(&self, value: &Value) -> Decoded<A> {
        (self.run)(value)
    }

    /// Parses `text` as JSON and runs the decoder.
    ///
    /// A parse error becomes a [`StructuredError::Failure`].
    pub fn decode_str(&self, text: &str) -> Decoded<A> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.decode(&value),
            Err(error) => Outcome::Err(StructuredError::failure(format!("invalid JSON: {error}"))),
        }
    }

    /// Transforms the decoded value.
    #[must_use]
    pub fn map<B: 'static, F>(self, function: F) -> Decoder<B>
    where
        F: Fn(A) -> B + 'static,
    {
        Decoder::new(move |value| self.decode(value).map(&function))
    }

    /// Refines the decoded value with a check that may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::control::Outcome;
    /// use outcomes::decoder::integer;
    /// use outcomes::error::StructuredError;
    /// use serde_json::json;
    ///
    /// let port = integer().try_map(|n| match u16::try_from(n) {
    ///     Ok(port) => Outcome::Ok(port),
    ///     Err(_) => Outcome::Err(StructuredError::failure(format!("{n} is not a port"))),
    /// });
    /// assert_eq!(port.decode(&json!(8080)).ok(), Some(8080));
    /// assert!(port.decode(&json!(-1)).is_err());
    /// ```
    #[must_use]
    pub fn try_map<B: 'static, F>(self, function: F) -> Decoder<B>
    where
        F: Fn(A) -> Decoded<B> + 'static,
    {
        Decoder::new(move |value| self.decode(value).chain(&function))
    }

    /// Picks the next decoder from the decoded value and runs it on the same input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::decoder::{field, fail, number, string};
    /// use serde_json::json;
    ///
    /// let area = field("shape", string()).chain(|shape| match shape.as_str() {
    ///     "square" => field("side", number()).map(|side| side * side),
    ///     other => fail(format!("unknown shape {other}")),
    /// });
    /// assert_eq!(area.decode(&json!({ "shape": "square", "side": 3.0 })).ok(), Some(9.0));
    /// ```
    #[must_use]
    pub fn chain<B: 'static, F>(self, function: F) -> Decoder<B>
    where
        F: Fn(A) -> Decoder<B> + 'static,
    {
        Decoder::new(move |value| self.decode(value).chain(|decoded| function(decoded).decode(value)))
    }

    /// Tries `alternative` when `self` fails.
    ///
    /// If both fail, both failures are kept in a [`StructuredError::OneOf`].
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        one_of(vec![self, alternative])
    }
}
