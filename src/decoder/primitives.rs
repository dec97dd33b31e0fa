//! Decoders for JSON scalars.

use serde_json::Value;

use super::{Decoded, Decoder};
use crate::control::Outcome;
use crate::error::StructuredError;

pub(super) const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(super) fn mismatch<A>(expected: &str, value: &Value) -> Decoded<A> {
    Outcome::Err(StructuredError::failure(format!(
        "expected {expected}, got {}",
        kind(value)
    )))
}

/// Accepts a JSON string.
pub fn string() -> Decoder<String> {
    Decoder::new(|value| match value {
        Value::String(text) => Outcome::Ok(text.clone()),
        other => mismatch("a string", other),
    })
}

/// Accepts any JSON number as `f64`.
pub fn number() -> Decoder<f64> {
    Decoder::new(|value| match value.as_f64() {
        Some(number) => Outcome::Ok(number),
        None => mismatch("a number", value),
    })
}

/// Accepts a JSON number that fits in an `i64` without a fractional part.
///
/// # Examples
///
/// ```rust
/// use outcomes::decoder::integer;
/// use serde_json::json;
///
/// assert_eq!(integer().decode(&json!(3)).ok(), Some(3));
/// assert_eq!(
///     integer().decode(&json!(1.5)).err().map(|e| e.to_string()),
///     Some("expected an integer, got number".to_string())
/// );
/// ```
pub fn integer() -> Decoder<i64> {
    Decoder::new(|value| match value.as_i64() {
        Some(number) => Outcome::Ok(number),
        None => mismatch("an integer", value),
    })
}

/// Accepts `true` or `false`.
pub fn boolean() -> Decoder<bool> {
    Decoder::new(|value| match value {
        Value::Bool(flag) => Outcome::Ok(*flag),
        other => mismatch("a boolean", other),
    })
}

/// Accepts only `null`.
pub fn null() -> Decoder<()> {
    Decoder::new(|value| match value {
        Value::Null => Outcome::Ok(()),
        other => mismatch("null", other),
    })
}

/// Accepts anything, returning a copy of the raw value.
pub fn value() -> Decoder<Value> {
    Decoder::new(|value| Outcome::Ok(value.clone()))
}

/// Ignores the input and always succeeds with `result`.
pub fn succeed<A: Clone + 'static>(result: A) -> Decoder<A> {
    Decoder::new(move |_| Outcome::Ok(result.clone()))
}

/// Ignores the input and always fails with `message`.
pub fn fail<A: 'static>(message: impl Into<String>) -> Decoder<A> {
    let message = message.into();
    Decoder::new(move |_| Outcome::Err(StructuredError::failure(message.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(true), "boolean")]
    #[case(json!(1), "number")]
    #[case(json!("s"), "string")]
    #[case(json!([]), "array")]
    #[case(json!({}), "object")]
    fn kind_names_every_json_type(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(kind(&value), expected);
    }

    #[rstest]
    fn string_rejects_number() {
        assert_eq!(
            string().decode(&json!(5)),
            Outcome::Err(StructuredError::failure("expected a string, got number"))
        );
    }

    #[rstest]
    fn number_accepts_integers() {
        assert_eq!(number().decode(&json!(2)).ok(), Some(2.0));
    }

    #[rstest]
    fn boolean_and_null() {
        assert_eq!(boolean().decode(&json!(false)).ok(), Some(false));
        assert!(null().decode(&json!(0)).is_err());
    }

    #[rstest]
    fn succeed_and_fail_ignore_input() {
        assert_eq!(succeed(7).decode(&json!("x")).ok(), Some(7));
        assert_eq!(
            fail::<i32>("nope").decode(&json!(7)),
            Outcome::Err(StructuredError::failure("nope"))
        );
    }
}
