//! The same traversals over `Option`, where `None` is the only failure.

use crate::control::Outcome;
use crate::typeclass::{Applicative, Monad};

/// `Some` of every value in order, or `None` if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::maybe;
///
/// assert_eq!(maybe::sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(maybe::sequence(vec![Some(1), None]), None);
/// ```
pub fn sequence<A, I>(options: I) -> Option<Vec<A>>
where
    I: IntoIterator<Item = Option<A>>,
{
    let mut collected = Some(Vec::new());
    for option in options {
        collected = collected.map2(option, |mut values, value| {
            values.push(value);
            values
        });
        if collected.is_none() {
            break;
        }
    }
    collected
}

/// Applies `function` to every item and sequences the results.
pub fn map_m<A, B, F, I>(function: F, items: I) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    sequence(items.into_iter().map(function))
}

/// Left fold that stops at the first step returning `None`.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::maybe;
///
/// let total = maybe::reduce_m(|sum: u8, x: u8| sum.checked_add(x), 0, [100, 100]);
/// assert_eq!(total, Some(200));
/// assert_eq!(maybe::reduce_m(|sum: u8, x: u8| sum.checked_add(x), 0, [200, 100]), None);
/// ```
pub fn reduce_m<S, A, F, I>(mut function: F, seed: S, items: I) -> Option<S>
where
    I: IntoIterator<Item = A>,
    F: FnMut(S, A) -> Option<S>,
{
    let mut state = Some(seed);
    for item in items {
        state = state.flat_map(|current| function(current, item));
        if state.is_none() {
            break;
        }
    }
    state
}

/// Keeps the `Some` payloads, dropping every `None`.
pub fn cat_maybes<A, I>(options: I) -> Vec<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    options.into_iter().flatten().collect()
}

/// Forgets the error of an outcome.
pub fn from_outcome<E, A>(outcome: Outcome<E, A>) -> Option<A> {
    outcome.ok()
}

/// Turns `None` into `Err(error)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::maybe;
/// use outcomes::control::Outcome;
///
/// assert_eq!(maybe::to_outcome(None::<i32>, "missing"), Outcome::Err("missing"));
/// ```
pub fn to_outcome<E, A>(option: Option<A>, error: E) -> Outcome<E, A> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_m_stops_at_first_none() {
        let mut seen = Vec::new();
        let result = map_m(
            |x: i32| {
                seen.push(x);
                (x != 2).then_some(x)
            },
            [1, 2, 3],
        );
        assert_eq!(result, None);
        assert_eq!(seen, vec![1, 2]);
    }

    #[rstest]
    fn sequence_empty_is_some_empty() {
        assert_eq!(sequence(Vec::<Option<i32>>::new()), Some(vec![]));
    }

    #[rstest]
    fn reduce_m_skips_items_after_none() {
        let mut seen = Vec::new();
        let result = reduce_m(
            |sum: i32, x: i32| {
                seen.push(x);
                (x > 0).then_some(sum + x)
            },
            0,
            [1, -1, 5],
        );
        assert_eq!(result, None);
        assert_eq!(seen, vec![1, -1]);
    }

    #[rstest]
    fn cat_maybes_keeps_order() {
        assert_eq!(cat_maybes([Some(3), None, Some(1)]), vec![3, 1]);
    }

    #[rstest]
    fn from_outcome_drops_error() {
        assert_eq!(from_outcome(Outcome::<&str, i32>::Err("e")), None);
        assert_eq!(from_outcome(Outcome::<&str, i32>::Ok(1)), Some(1));
    }
}
