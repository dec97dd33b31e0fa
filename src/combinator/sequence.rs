//! First-error-wins traversals over collections of outcomes.
//!
//! Every function here stops at the first `Err` and returns it unchanged.
//! Inputs are consumed lazily, so callbacks are never invoked for elements
//! after that first failure.

use super::list;
use crate::control::Outcome;

/// Collects every success value in input order, or returns the first `Err`.
///
/// An empty input yields `Ok(vec![])`.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::sequence;
/// use outcomes::control::Outcome;
///
/// let all: Vec<Outcome<&str, i32>> = vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
/// assert_eq!(sequence(all), Outcome::Ok(vec![1, 2, 3]));
///
/// let some: Vec<Outcome<&str, i32>> =
///     vec![Outcome::Ok(1), Outcome::Err("e1"), Outcome::Ok(3), Outcome::Err("e2")];
/// assert_eq!(sequence(some), Outcome::Err("e1"));
/// ```
pub fn sequence<E, A, I>(outcomes: I) -> Outcome<E, Vec<A>>
where
    I: IntoIterator<Item = Outcome<E, A>>,
{
    outcomes.into_iter().collect()
}

/// Applies `function` to every item and sequences the results.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::map_m;
/// use outcomes::control::Outcome;
///
/// let parse = |text: &str| -> Outcome<String, i32> {
///     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
/// };
/// assert_eq!(map_m(parse, ["1", "2"]), Outcome::Ok(vec![1, 2]));
/// assert_eq!(map_m(parse, ["1", "x"]), Outcome::Err("not a number: x".to_string()));
/// ```
pub fn map_m<E, A, B, F, I>(function: F, items: I) -> Outcome<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<E, B>,
{
    sequence(items.into_iter().map(function))
}

/// [`map_m`] with the arguments swapped.
pub fn for_m<E, A, B, F, I>(items: I, function: F) -> Outcome<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<E, B>,
{
    map_m(function, items)
}

/// Pairs two inputs positionally, applies `function`, and sequences.
///
/// Only the first `min(len(lefts), len(rights))` pairs are considered.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::zip_with_m;
/// use outcomes::control::Outcome;
///
/// let result = zip_with_m(
///     |text: &str, n: usize| -> Outcome<String, usize> { Outcome::Ok(text.len() + n) },
///     ["ab", "cde"],
///     [1, 2, 3],
/// );
/// assert_eq!(result, Outcome::Ok(vec![3, 5]));
/// ```
pub fn zip_with_m<E, A, B, C, F, L, R>(mut function: F, lefts: L, rights: R) -> Outcome<E, Vec<C>>
where
    L: IntoIterator<Item = A>,
    R: IntoIterator<Item = B>,
    F: FnMut(A, B) -> Outcome<E, C>,
{
    sequence(
        lefts
            .into_iter()
            .zip(rights)
            .map(|(left, right)| function(left, right)),
    )
}

/// Maps every item to a pair and splits the successes into two lists.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::map_and_unzip_with;
/// use outcomes::control::Outcome;
///
/// let split = map_and_unzip_with(
///     |n: i32| -> Outcome<String, (i32, bool)> { Outcome::Ok((n * 10, n % 2 == 0)) },
///     [1, 2],
/// );
/// assert_eq!(split, Outcome::Ok((vec![10, 20], vec![false, true])));
/// ```
pub fn map_and_unzip_with<E, A, B, C, F, I>(function: F, items: I) -> Outcome<E, (Vec<B>, Vec<C>)>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<E, (B, C)>,
{
    map_m(function, items).map(list::unzip)
}

/// Left fold in which every step may fail.
///
/// Stops at the first `Err`; `function` is not called for later items.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::reduce_m;
/// use outcomes::control::Outcome;
///
/// let total = reduce_m(
///     |sum: i32, x: i32| if x < 0 { Outcome::Err("negative") } else { Outcome::Ok(sum + x) },
///     0,
///     [1, 2, 3],
/// );
/// assert_eq!(total, Outcome::Ok(6));
/// ```
pub fn reduce_m<E, S, A, F, I>(mut function: F, seed: S, items: I) -> Outcome<E, S>
where
    I: IntoIterator<Item = A>,
    F: FnMut(S, A) -> Outcome<E, S>,
{
    let mut state = seed;
    for item in items {
        match function(state, item) {
            Outcome::Ok(next) => state = next,
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(state)
}

/// Flattens one level of nesting.
pub fn join<E, A>(outer: Outcome<E, Outcome<E, A>>) -> Outcome<E, A> {
    outer.chain(|inner| inner)
}

/// Returns `action` when `condition` holds, `Ok(())` otherwise.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::when;
/// use outcomes::control::Outcome;
///
/// assert_eq!(when(false, Outcome::Err("boom")), Outcome::Ok(()));
/// assert_eq!(when(true, Outcome::Err("boom")), Outcome::Err("boom"));
/// ```
pub fn when<E>(condition: bool, action: Outcome<E, ()>) -> Outcome<E, ()> {
    if condition { action } else { Outcome::Ok(()) }
}

/// Returns `action` when `condition` does not hold.
pub fn unless<E>(condition: bool, action: Outcome<E, ()>) -> Outcome<E, ()> {
    when(!condition, action)
}

/// Every error payload, in input order.
pub fn errors<E, A, I>(outcomes: I) -> Vec<E>
where
    I: IntoIterator<Item = Outcome<E, A>>,
{
    outcomes.into_iter().filter_map(Outcome::err).collect()
}

/// Every success value, in input order.
pub fn oks<E, A, I>(outcomes: I) -> Vec<A>
where
    I: IntoIterator<Item = Outcome<E, A>>,
{
    outcomes.into_iter().filter_map(Outcome::ok).collect()
}
