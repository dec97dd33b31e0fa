//! Sequencing named fields.
//!
//! Three shapes are supported, all reporting the first failing field in
//! declaration order:
//!
//! - [`build!`](crate::build) for a struct with heterogeneous field types,
//! - [`RecordBuilder`] for string-keyed fields sharing one value type,
//! - [`record`] for any iterator of `(key, outcome)` pairs.

use crate::control::Outcome;

/// Sequences the fields of a struct literal whose values are outcomes.
///
/// Every field expression is evaluated first, before any field name is
/// bound, so an expression may mention a variable that shares its name with
/// another field. The fields are then checked in the order written. The
/// result is `Ok` of the struct when every field is `Ok`, or the `Err` of the
/// first failing field.
///
/// Only the `path::Name { field: expr, .. }` form is accepted. Generic
/// arguments on the struct path (`Pair::<i32> { .. }`) and field shorthand
/// (`Point { x, y }`) are not supported; annotate the result type instead and
/// write every field as `name: expr`.
///
/// # Examples
///
/// ```rust
/// use outcomes::build;
/// use outcomes::control::Outcome;
///
/// #[derive(Debug, PartialEq)]
/// struct Foo {
///     bar: i32,
///     baz: String,
/// }
///
/// let good: Outcome<&str, Foo> = build!(Foo {
///     bar: Outcome::Ok(1),
///     baz: Outcome::Ok("hi".to_string()),
/// });
/// assert_eq!(good, Outcome::Ok(Foo { bar: 1, baz: "hi".to_string() }));
///
/// let bad: Outcome<&str, Foo> = build!(Foo {
///     bar: Outcome::Ok(1),
///     baz: Outcome::Err("bad baz"),
/// });
/// assert_eq!(bad, Outcome::Err("bad baz"));
/// ```
#[macro_export]
macro_rules! build {
    ($($target:ident)::+ { $($field:ident : $value:expr),+ $(,)? }) => {{
        match ($($value,)+) {
            ($($field,)+) => (move || {
                $(
                    let $field = match $field {
                        $crate::control::Outcome::Ok(value) => value,
                        $crate::control::Outcome::Err(error) => {
                            return $crate::control::Outcome::Err(error);
                        }
                    };
                )+
                $crate::control::Outcome::Ok($($target)::+ { $($field),+ })
            })(),
        }
    }};
}

/// Sequences `(key, outcome)` pairs into any collection of `(key, value)`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use outcomes::combinator::record;
/// use outcomes::control::Outcome;
///
/// let fields = vec![("x", Outcome::<&str, i32>::Ok(1)), ("y", Outcome::Ok(2))];
/// let map: Outcome<&str, BTreeMap<&str, i32>> = record(fields);
/// assert_eq!(map.map(|m| m["y"]), Outcome::Ok(2));
/// ```
pub fn record<K, E, A, C, I>(fields: I) -> Outcome<E, C>
where
    I: IntoIterator<Item = (K, Outcome<E, A>)>,
    C: FromIterator<(K, A)>,
{
    fields
        .into_iter()
        .map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

/// String-keyed values in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<A> {
    fields: Vec<(String, A)>,
}

impl<A> Record<A> {
    /// Looks a field up by name.
    pub fn get(&self, key: &str) -> Option<&A> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<A> IntoIterator for Record<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Accumulates named outcomes, then sequences them with [`RecordBuilder::build`].
///
/// Setting a key twice keeps its original position and the newer outcome.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::RecordBuilder;
/// use outcomes::control::Outcome;
///
/// let record = RecordBuilder::new()
///     .field("bar", Outcome::Ok(1))
///     .field("baz", Outcome::<&str, i32>::Err("bad baz"))
///     .build();
/// assert_eq!(record, Outcome::Err("bad baz"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder<E, A> {
    fields: Vec<(String, Outcome<E, A>)>,
}

impl<E, A> Default for RecordBuilder<E, A> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<E, A> RecordBuilder<E, A> {
    /// Starts an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Outcome<E, A>) -> Self {
        let key = key.into();
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// `Ok` of every field, or the first failing field's `Err`.
    pub fn build(self) -> Outcome<E, Record<A>> {
        record(self.fields).map(|fields| Record { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[rstest]
    fn build_reports_first_declared_failure() {
        let result: Outcome<&str, Point> = build!(Point {
            x: Outcome::Err("bad x"),
            y: Outcome::Err("bad y"),
        });
        assert_eq!(result, Outcome::Err("bad x"));
    }

    #[rstest]
    fn build_evaluates_every_field_expression() {
        let mut evaluated = Vec::new();
        let mut field = |name: &'static str, value: Outcome<&'static str, i32>| {
            evaluated.push(name);
            value
        };
        let result: Outcome<&str, Point> = build!(Point {
            x: field("x", Outcome::Err("bad x")),
            y: field("y", Outcome::Ok(2)),
        });
        assert_eq!(result, Outcome::Err("bad x"));
        assert_eq!(evaluated, vec!["x", "y"]);
    }

    #[rstest]
    fn build_field_name_does_not_shadow_outer_variable() {
        let x: Outcome<&str, i32> = Outcome::Ok(1);
        let result = build!(Point {
            x: Outcome::Ok(10),
            y: x,
        });
        assert_eq!(result, Outcome::Ok(Point { x: 10, y: 1 }));
    }

    #[rstest]
    fn builder_reports_first_inserted_failure() {
        let record = RecordBuilder::<&str, i32>::new()
            .field("z", Outcome::Err("bad z"))
            .field("a", Outcome::Err("bad a"))
            .field("m", Outcome::Ok(0))
            .build();
        assert_eq!(record.map(|record| record.len()), Outcome::Err("bad z"));
    }

    #[rstest]
    fn record_reports_first_failing_pair() {
        let fields = vec![
            ("first", Outcome::Ok(1)),
            ("second", Outcome::Err("bad second")),
            ("third", Outcome::Err("bad third")),
        ];
        let collected: Outcome<&str, Vec<(&str, i32)>> = record(fields);
        assert_eq!(collected, Outcome::Err("bad second"));
    }

    #[rstest]
    fn builder_keeps_insertion_order() {
        let record = RecordBuilder::<&str, i32>::new()
            .field("b", Outcome::Ok(2))
            .field("a", Outcome::Ok(1))
            .build();
        let Outcome::Ok(record) = record else {
            panic!("expected every field to succeed");
        };
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(record.get("a"), Some(&1));
        assert_eq!(record.len(), 2);
    }

    #[rstest]
    fn builder_overwrites_duplicate_key_in_place() {
        let record = RecordBuilder::<&str, i32>::new()
            .field("a", Outcome::Err("stale"))
            .field("b", Outcome::Ok(2))
            .field("a", Outcome::Ok(1))
            .build()
            .map(|record| record.into_iter().collect::<Vec<_>>());
        assert_eq!(
            record,
            Outcome::Ok(vec![("a".to_string(), 1), ("b".to_string(), 2)])
        );
    }

    #[rstest]
    fn empty_builder_is_ok() {
        let record = RecordBuilder::<&str, i32>::new().build();
        assert_eq!(record.map(|record| record.is_empty()), Outcome::Ok(true));
    }
}
