//! Structured, path-aware error values.
//!
//! Three shapes recur when decoding or validating nested data:
//!
//! - a scalar [`StructuredError::Failure`] carrying a message,
//! - a path-qualified failure ([`StructuredError::Field`] or
//!   [`StructuredError::Index`]) saying where in the input it happened,
//! - an aggregate: [`StructuredError::OneOf`] when every alternative failed,
//!   [`StructuredError::Multiple`] when several independent parts failed.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::error::StructuredError;
//!
//! let error = StructuredError::failure("expected a string")
//!     .at_field("foo")
//!     .at_index(3);
//! assert_eq!(error.to_string(), "at index 3, field 'foo': expected a string");
//! ```

use std::fmt;

/// An error that knows where in a nested structure it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructuredError {
    /// A single descriptive failure.
    Failure(String),
    /// A failure inside the record field `key`.
    Field {
        /// The field name.
        key: String,
        /// The failure found under that field.
        error: Box<StructuredError>,
    },
    /// A failure at position `index` of a sequence.
    Index {
        /// The zero-based position.
        index: usize,
        /// The failure found at that position.
        error: Box<StructuredError>,
    },
    /// Every alternative failed; one entry per alternative, in order.
    OneOf(Vec<StructuredError>),
    /// Several independent parts failed.
    Multiple(Vec<StructuredError>),
}

impl StructuredError {
    /// Creates a scalar failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Qualifies `self` with the record field it occurred under.
    #[must_use]
    pub fn at_field(self, key: impl Into<String>) -> Self {
        Self::Field {
            key: key.into(),
            error: Box::new(self),
        }
    }

    /// Qualifies `self` with the sequence position it occurred at.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        Self::Index {
            index,
            error: Box::new(self),
        }
    }

    /// Follows path qualifiers down to the error they wrap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::error::StructuredError;
    ///
    /// let error = StructuredError::failure("missing").at_field("id").at_index(0);
    /// assert_eq!(error.innermost(), &StructuredError::failure("missing"));
    /// ```
    pub fn innermost(&self) -> &Self {
        let mut current = self;
        while let Self::Field { error, .. } | Self::Index { error, .. } = current {
            current = &**error;
        }
        current
    }

    /// Returns the number of leaf failures.
    pub fn count(&self) -> usize {
        match self {
            Self::Failure(_) => 1,
            Self::Field { error, .. } | Self::Index { error, .. } => error.count(),
            Self::OneOf(errors) | Self::Multiple(errors) => errors.iter().map(Self::count).sum(),
        }
    }

    fn write_path(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self;
        let mut first = true;
        loop {
            let separator = if first { "at " } else { ", " };
            match current {
                Self::Field { key, error } => {
                    write!(formatter, "{separator}field '{key}'")?;
                    current = &**error;
                }
                Self::Index { index, error } => {
                    write!(formatter, "{separator}index {index}")?;
                    current = &**error;
                }
                leaf => return write!(formatter, ": {leaf}"),
            }
            first = false;
        }
    }

    fn write_list(
        formatter: &mut fmt::Formatter<'_>,
        heading: &str,
        errors: &[Self],
    ) -> fmt::Result {
        formatter.write_str(heading)?;
        for error in errors {
            let rendered = error.to_string();
            let mut lines = rendered.lines();
            if let Some(first_line) = lines.next() {
                write!(formatter, "\n  - {first_line}")?;
            }
            for line in lines {
                write!(formatter, "\n    {line}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(message) => formatter.write_str(message),
            Self::Field { .. } | Self::Index { .. } => self.write_path(formatter),
            Self::OneOf(errors) => Self::write_list(
                formatter,
                &format!("none of {} alternatives matched:", errors.len()),
                errors,
            ),
            Self::Multiple(errors) => {
                Self::write_list(formatter, &format!("{} errors:", errors.len()), errors)
            }
        }
    }
}

impl std::error::Error for StructuredError {}

impl From<String> for StructuredError {
    fn from(message: String) -> Self {
        Self::Failure(message)
    }
}

impl From<&str> for StructuredError {
    fn from(message: &str) -> Self {
        Self::failure(message)
    }
}

/// Merges into a flat [`StructuredError::Multiple`], preserving order.
#[cfg(feature = "typeclass")]
impl crate::typeclass::Semigroup for StructuredError {
    fn combine(self, other: Self) -> Self {
        let mut errors = match self {
            Self::Multiple(errors) => errors,
            single => vec![single],
        };
        match other {
            Self::Multiple(mut more) => errors.append(&mut more),
            single => errors.push(single),
        }
        Self::Multiple(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn failure_displays_message() {
        assert_eq!(StructuredError::failure("boom").to_string(), "boom");
    }

    #[rstest]
    fn one_of_lists_alternatives() {
        let error = StructuredError::OneOf(vec![
            StructuredError::failure("expected a string"),
            StructuredError::failure("expected a number").at_field("id"),
        ]);
        assert_eq!(
            error.to_string(),
            "none of 2 alternatives matched:\n  - expected a string\n  - at field 'id': expected a number"
        );
    }

    #[rstest]
    fn nested_aggregates_are_indented() {
        let error = StructuredError::Multiple(vec![StructuredError::OneOf(vec![
            StructuredError::failure("a"),
        ])]);
        assert_eq!(
            error.to_string(),
            "1 errors:\n  - none of 1 alternatives matched:\n      - a"
        );
    }

    #[rstest]
    fn count_sums_leaves() {
        let error = StructuredError::Multiple(vec![
            StructuredError::failure("a").at_index(0),
            StructuredError::OneOf(vec![StructuredError::failure("b"), StructuredError::failure("c")]),
        ]);
        assert_eq!(error.count(), 3);
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn combine_flattens_multiple() {
        use crate::typeclass::Semigroup;

        let left = StructuredError::Multiple(vec![StructuredError::failure("a")]);
        let right = StructuredError::failure("b");
        let merged = left.combine(right).combine(StructuredError::failure("c"));

        assert_eq!(
            merged,
            StructuredError::Multiple(vec![
                StructuredError::failure("a"),
                StructuredError::failure("b"),
                StructuredError::failure("c"),
            ])
        );
    }
}
