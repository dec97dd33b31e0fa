//! Decoders for JSON objects and arrays, and alternatives.

use std::collections::BTreeMap;

use serde_json::Value;

use super::primitives::mismatch;
use super::Decoder;
use crate::combinator;
use crate::control::Outcome;
use crate::error::StructuredError;

/// Decodes the field `key` of an object.
///
/// A missing key and any failure of `decoder` are reported under
/// [`StructuredError::Field`].
///
/// # Examples
///
/// ```rust
/// use outcomes::decoder::{field, string};
/// use serde_json::json;
///
/// let name = field("name", string());
/// assert_eq!(
///     name.decode(&json!({})).err().map(|e| e.to_string()),
///     Some("at field 'name': missing field".to_string())
/// );
/// ```
pub fn field<A: 'static>(key: impl Into<String>, decoder: Decoder<A>) -> Decoder<A> {
    let key = key.into();
    Decoder::new(move |value| match value {
        Value::Object(entries) => match entries.get(&key) {
            Some(entry) => decoder
                .decode(entry)
                .map_error(|error| error.at_field(key.as_str())),
            None => Outcome::Err(StructuredError::failure("missing field").at_field(key.as_str())),
        },
        other => mismatch("an object", other),
    })
}

/// Like [`field`], but a missing or `null` field decodes to `None`.
pub fn optional_field<A: 'static>(key: impl Into<String>, decoder: Decoder<A>) -> Decoder<Option<A>> {
    let key = key.into();
    Decoder::new(move |value| match value {
        Value::Object(entries) => match entries.get(&key) {
            None | Some(Value::Null) => Outcome::Ok(None),
            Some(entry) => decoder
                .decode(entry)
                .map(Some)
                .map_error(|error| error.at_field(key.as_str())),
        },
        other => mismatch("an object", other),
    })
}

/// `null` decodes to `None`; anything else goes through `decoder`.
pub fn nullable<A: 'static>(decoder: Decoder<A>) -> Decoder<Option<A>> {
    Decoder::new(move |value| match value {
        Value::Null => Outcome::Ok(None),
        other => decoder.decode(other).map(Some),
    })
}

/// Decodes every element of an array.
///
/// The first failing element is reported under [`StructuredError::Index`].
///
/// # Examples
///
/// ```rust
/// use outcomes::decoder::{array, integer};
/// use serde_json::json;
///
/// let numbers = array(integer());
/// assert_eq!(numbers.decode(&json!([1, 2])).ok(), Some(vec![1, 2]));
/// assert_eq!(
///     numbers.decode(&json!([1, "x", true])).err().map(|e| e.to_string()),
///     Some("at index 1: expected an integer, got string".to_string())
/// );
/// ```
pub fn array<A: 'static>(decoder: Decoder<A>) -> Decoder<Vec<A>> {
    Decoder::new(move |value| match value {
        Value::Array(elements) => combinator::map_m(
            |(index, element)| {
                decoder
                    .decode(element)
                    .map_error(|error| error.at_index(index))
            },
            elements.iter().enumerate(),
        ),
        other => mismatch("an array", other),
    })
}

/// Decodes every value of an object, keyed by field name.
pub fn dict<A: 'static>(decoder: Decoder<A>) -> Decoder<BTreeMap<String, A>> {
    Decoder::new(move |value| match value {
        Value::Object(entries) => combinator::record(entries.iter().map(|(key, entry)| {
            let decoded = decoder
                .decode(entry)
                .map_error(|error| error.at_field(key.as_str()));
            (key.clone(), decoded)
        })),
        other => mismatch("an object", other),
    })
}

/// Tries each decoder in order and returns the first success.
///
/// When every alternative fails, all failures are kept, in order, in a
/// [`StructuredError::OneOf`]. Nested `OneOf`s are flattened.
pub fn one_of<A: 'static>(decoders: Vec<Decoder<A>>) -> Decoder<A> {
    Decoder::new(move |value| {
        let mut failures = Vec::new();
        for decoder in &decoders {
            match decoder.decode(value) {
                Outcome::Ok(decoded) => return Outcome::Ok(decoded),
                Outcome::Err(StructuredError::OneOf(mut nested)) => failures.append(&mut nested),
                Outcome::Err(error) => failures.push(error),
            }
        }
        Outcome::Err(StructuredError::OneOf(failures))
    })
}
