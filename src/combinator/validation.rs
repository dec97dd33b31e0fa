//! Accumulate-all combinators over [`Validation`].
//!
//! Unlike the first-error-wins functions in the parent module, these always
//! look at every input and merge every failure with [`Semigroup::combine`],
//! in input order.

use crate::control::{Outcome, Validation};
use crate::typeclass::{Applicative, Semigroup};

/// `Valid` of every value, or `Invalid` of all failures combined.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::validation;
/// use outcomes::control::Validation;
///
/// let checks: Vec<Validation<Vec<&str>, i32>> = vec![
///     Validation::Invalid(vec!["e1"]),
///     Validation::Valid(2),
///     Validation::Invalid(vec!["e2"]),
/// ];
/// assert_eq!(validation::sequence(checks), Validation::Invalid(vec!["e1", "e2"]));
/// ```
pub fn sequence<E, A, I>(validations: I) -> Validation<E, Vec<A>>
where
    E: Semigroup,
    I: IntoIterator<Item = Validation<E, A>>,
{
    let mut values = Vec::new();
    let mut failures: Option<E> = None;
    for validation in validations {
        match validation {
            Validation::Valid(value) => values.push(value),
            Validation::Invalid(errors) => {
                failures = Some(match failures {
                    Some(previous) => previous.combine(errors),
                    None => errors,
                });
            }
        }
    }
    match failures {
        Some(errors) => Validation::Invalid(errors),
        None => Validation::Valid(values),
    }
}

/// Validates every item and accumulates all failures.
pub fn map_m<E, A, B, F, I>(function: F, items: I) -> Validation<E, Vec<B>>
where
    E: Semigroup,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Validation<E, B>,
{
    sequence(items.into_iter().map(function))
}

/// Treats independent outcomes as validations, keeping every error.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::validation;
/// use outcomes::control::{Outcome, Validation};
///
/// let fields: Vec<Outcome<Vec<&str>, i32>> = vec![Outcome::Err(vec!["a"]), Outcome::Err(vec!["b"])];
/// assert_eq!(validation::collect_outcomes(fields), Validation::Invalid(vec!["a", "b"]));
/// ```
pub fn collect_outcomes<E, A, I>(outcomes: I) -> Validation<E, Vec<A>>
where
    E: Semigroup,
    I: IntoIterator<Item = Outcome<E, A>>,
{
    sequence(outcomes.into_iter().map(Validation::from))
}

/// Applies `function` when both inputs are valid; otherwise combines failures.
pub fn lift2<E, T1, T2, R, F>(
    function: F,
    first: Validation<E, T1>,
    second: Validation<E, T2>,
) -> Validation<E, R>
where
    E: Semigroup,
    F: FnOnce(T1, T2) -> R,
{
    first.map2(second, function)
}

/// Three-argument [`lift2`].
pub fn lift3<E, T1, T2, T3, R, F>(
    function: F,
    first: Validation<E, T1>,
    second: Validation<E, T2>,
    third: Validation<E, T3>,
) -> Validation<E, R>
where
    E: Semigroup,
    F: FnOnce(T1, T2, T3) -> R,
{
    first.map3(second, third, function)
}

/// Four-argument [`lift2`].
pub fn lift4<E, T1, T2, T3, T4, R, F>(
    function: F,
    first: Validation<E, T1>,
    second: Validation<E, T2>,
    third: Validation<E, T3>,
    fourth: Validation<E, T4>,
) -> Validation<E, R>
where
    E: Semigroup,
    F: FnOnce(T1, T2, T3, T4) -> R,
{
    first
        .and(second)
        .and(third)
        .and(fourth)
        .map(|(((a, b), c), d)| function(a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    type FieldErrors = BTreeMap<&'static str, Vec<&'static str>>;

    fn non_empty(field: &'static str, text: &'static str) -> Validation<FieldErrors, &'static str> {
        if text.is_empty() {
            Validation::Invalid(BTreeMap::from([(field, vec!["must not be empty"])]))
        } else {
            Validation::Valid(text)
        }
    }

    #[rstest]
    fn lift3_merges_keyed_errors() {
        let result = lift3(
            |first, last, email| format!("{first} {last} <{email}>"),
            non_empty("first", ""),
            non_empty("last", "Lovelace"),
            non_empty("email", ""),
        );
        assert_eq!(
            result,
            Validation::Invalid(BTreeMap::from([
                ("email", vec!["must not be empty"]),
                ("first", vec!["must not be empty"]),
            ]))
        );
    }

    #[rstest]
    fn lift4_all_valid() {
        let result: Validation<Vec<&str>, i32> = lift4(
            |a, b, c, d| a * b * c * d,
            Validation::Valid(1),
            Validation::Valid(2),
            Validation::Valid(3),
            Validation::Valid(4),
        );
        assert_eq!(result, Validation::Valid(24));
    }

    #[rstest]
    fn map_m_visits_every_item() {
        let mut visited = 0;
        let result = map_m(
            |x: i32| -> Validation<Vec<i32>, i32> {
                visited += 1;
                if x % 2 == 0 { Validation::Valid(x) } else { Validation::Invalid(vec![x]) }
            },
            [1, 2, 3, 4, 5],
        );
        assert_eq!(result, Validation::Invalid(vec![1, 3, 5]));
        assert_eq!(visited, 5);
    }

    #[rstest]
    fn sequence_empty_is_valid() {
        let result = sequence(Vec::<Validation<Vec<&str>, i32>>::new());
        assert_eq!(result, Validation::Valid(vec![]));
    }
}
