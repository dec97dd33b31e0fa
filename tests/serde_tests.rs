#![cfg(feature = "serde")]

//! Integration tests for serde support.

use outcomes::control::{Outcome, Validation};
use outcomes::error::StructuredError;
use rstest::rstest;

#[rstest]
fn test_outcome_json_roundtrip() {
    let ok: Outcome<String, i32> = Outcome::Ok(42);
    let err: Outcome<String, i32> = Outcome::Err("error".to_string());

    let ok_json = serde_json::to_string(&ok).unwrap();
    let err_json = serde_json::to_string(&err).unwrap();

    assert_eq!(ok_json, r#"{"Ok":42}"#);
    assert_eq!(serde_json::from_str::<Outcome<String, i32>>(&ok_json).unwrap(), ok);
    assert_eq!(serde_json::from_str::<Outcome<String, i32>>(&err_json).unwrap(), err);
}

#[rstest]
fn test_validation_json_roundtrip() {
    let invalid: Validation<Vec<String>, u8> = Validation::Invalid(vec!["a".to_string()]);
    let json = serde_json::to_string(&invalid).unwrap();
    assert_eq!(json, r#"{"Invalid":["a"]}"#);
    assert_eq!(serde_json::from_str::<Validation<Vec<String>, u8>>(&json).unwrap(), invalid);
}

#[rstest]
fn test_structured_error_json_roundtrip() {
    let error = StructuredError::OneOf(vec![
        StructuredError::failure("expected a string").at_field("name"),
        StructuredError::failure("expected null").at_index(2),
    ]);
    let json = serde_json::to_string(&error).unwrap();
    let restored: StructuredError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, error);
}
