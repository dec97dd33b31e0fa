//! Plain list helpers the fallible combinators are built from.
//!
//! These are free functions over any `IntoIterator`; nothing is added to the
//! standard collections.

/// Combines two sequences position by position.
///
/// Stops at the end of the shorter input. Extra elements of the longer one
/// are dropped without being passed to `function`.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::list::zip_with;
///
/// let sums = zip_with(|a, b| a + b, vec![1, 2, 3], vec![10, 20]);
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub fn zip_with<A, B, C, F, L, R>(mut function: F, lefts: L, rights: R) -> Vec<C>
where
    L: IntoIterator<Item = A>,
    R: IntoIterator<Item = B>,
    F: FnMut(A, B) -> C,
{
    lefts
        .into_iter()
        .zip(rights)
        .map(|(left, right)| function(left, right))
        .collect()
}

/// Splits a sequence of pairs into a pair of sequences, keeping positions.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::list::unzip;
///
/// let (names, ages) = unzip(vec![("ada", 36), ("alan", 41)]);
/// assert_eq!(names, vec!["ada", "alan"]);
/// assert_eq!(ages, vec![36, 41]);
/// ```
pub fn unzip<A, B, I>(pairs: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    pairs.into_iter().unzip()
}

/// Groups consecutive equal elements.
///
/// # Examples
///
/// ```rust
/// use outcomes::combinator::list::group;
///
/// assert_eq!(group(vec![1, 1, 2, 1]), vec![vec![1, 1], vec![2], vec![1]]);
/// ```
pub fn group<A, I>(items: I) -> Vec<Vec<A>>
where
    A: PartialEq,
    I: IntoIterator<Item = A>,
{
    let mut groups: Vec<Vec<A>> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some(current) if current.last() == Some(&item) => current.push(item),
            _ => groups.push(vec![item]),
        }
    }
    groups
}
