//! Assertion functions for comparing reducer outputs with expected results.

use crate::ranking::RankTable;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// Useful for reducers whose output follows `HashMap` iteration order
/// (map-based distinct, mode).
///
/// # Panics
///
/// Panics if the collections differ in content (ignoring order).
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2], &[1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();

        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that a rank table holds exactly `expected`, in iteration order.
///
/// # Panics
///
/// Panics on the first rank or group that differs.
///
/// # Example
///
/// ```
/// use ironfold::*;
/// use ironfold::testing::assert_rank_table;
///
/// let table = vec![2, 1, 2].into_iter().combine_globally(&Rank::natural());
/// assert_rank_table(&table, &[(1, vec![1]), (2, vec![2, 2])]);
/// ```
pub fn assert_rank_table<R: Debug + PartialEq>(actual: &RankTable<R>, expected: &[(usize, R)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Rank table size mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, ((ar, av), (er, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            ar == *er && av == ev,
            "Rank table mismatch at position {i}:\n  Expected: ({er}, {ev:?})\n  Actual: ({ar}, {av:?})\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that every element of a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}
