//! Asynchronous mirrors of the Kleisli combinators.
//!
//! The collection combinators ([`sequence`], [`map_m`], [`for_m`],
//! [`zip_with_m`], [`map_and_unzip_with`]) create every future up front and
//! drive them concurrently with [`join_all`]. Nothing is cancelled when one
//! of them fails: every sibling runs to completion, and the reported error
//! is the first `Err` in input order.
//!
//! [`reduce_m`] is strictly sequential: a step is only created after the
//! previous one resolved, and the fold stops at the first `Err`.
//!
//! No executor is bundled; any runtime can poll these futures.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::control::Outcome;
//! use outcomes::future;
//!
//! async fn fetch(id: u32) -> Outcome<String, String> {
//!     Outcome::Ok(format!("user-{id}"))
//! }
//!
//! let users = futures::executor::block_on(future::map_m(fetch, [1, 2]));
//! assert_eq!(users, Outcome::Ok(vec!["user-1".to_string(), "user-2".to_string()]));
//! ```

use std::future::Future;

use futures::future::{join, join_all, join3};

use crate::combinator;
use crate::control::Outcome;

/// Awaits every future concurrently, then sequences their outcomes.
pub async fn sequence<E, A, I, Fut>(futures: I) -> Outcome<E, Vec<A>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<E, A>>,
{
    combinator::sequence(join_all(futures).await)
}

/// Starts `function` for every item, awaits all of them, then sequences.
pub async fn map_m<E, A, B, F, Fut, I>(function: F, items: I) -> Outcome<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Outcome<E, B>>,
{
    sequence(items.into_iter().map(function)).await
}

/// [`map_m`] with the arguments swapped.
pub async fn for_m<E, A, B, F, Fut, I>(items: I, function: F) -> Outcome<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Outcome<E, B>>,
{
    map_m(function, items).await
}

/// Pairs the inputs positionally and runs `function` on every pair concurrently.
///
/// Only `min(len(lefts), len(rights))` futures are created.
pub async fn zip_with_m<E, A, B, C, F, Fut, L, R>(
    mut function: F,
    lefts: L,
    rights: R,
) -> Outcome<E, Vec<C>>
where
    L: IntoIterator<Item = A>,
    R: IntoIterator<Item = B>,
    F: FnMut(A, B) -> Fut,
    Fut: Future<Output = Outcome<E, C>>,
{
    sequence(
        lefts
            .into_iter()
            .zip(rights)
            .map(|(left, right)| function(left, right)),
    )
    .await
}

/// Concurrent [`map_m`] whose successes are split into two lists.
pub async fn map_and_unzip_with<E, A, B, C, F, Fut, I>(
    function: F,
    items: I,
) -> Outcome<E, (Vec<B>, Vec<C>)>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Outcome<E, (B, C)>>,
{
    map_m(function, items)
        .await
        .map(combinator::list::unzip)
}

/// Sequential left fold; each step starts after the previous one resolved.
///
/// # Examples
///
/// ```rust
/// use outcomes::control::Outcome;
/// use outcomes::future;
///
/// let total = futures::executor::block_on(future::reduce_m(
///     |sum: i32, x: i32| async move {
///         if x < 0 { Outcome::Err("negative") } else { Outcome::Ok(sum + x) }
///     },
///     0,
///     [1, 2, -3, 4],
/// ));
/// assert_eq!(total, Outcome::Err("negative"));
/// ```
pub async fn reduce_m<E, S, A, F, Fut, I>(mut function: F, seed: S, items: I) -> Outcome<E, S>
where
    I: IntoIterator<Item = A>,
    F: FnMut(S, A) -> Fut,
    Fut: Future<Output = Outcome<E, S>>,
{
    let mut state = seed;
    for item in items {
        match function(state, item).await {
            Outcome::Ok(next) => state = next,
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(state)
}

/// Awaits both futures concurrently and combines their values.
pub async fn lift2<E, T1, T2, R, F, Fut1, Fut2>(function: F, first: Fut1, second: Fut2) -> Outcome<E, R>
where
    F: FnOnce(T1, T2) -> R,
    Fut1: Future<Output = Outcome<E, T1>>,
    Fut2: Future<Output = Outcome<E, T2>>,
{
    let (first, second) = join(first, second).await;
    combinator::lift2(function, first, second)
}

/// Awaits three futures concurrently and combines their values.
pub async fn lift3<E, T1, T2, T3, R, F, Fut1, Fut2, Fut3>(
    function: F,
    first: Fut1,
    second: Fut2,
    third: Fut3,
) -> Outcome<E, R>
where
    F: FnOnce(T1, T2, T3) -> R,
    Fut1: Future<Output = Outcome<E, T1>>,
    Fut2: Future<Output = Outcome<E, T2>>,
    Fut3: Future<Output = Outcome<E, T3>>,
{
    let (first, second, third) = join3(first, second, third).await;
    combinator::lift3(function, first, second, third)
}
