//! Mode detection: the keys tied for the highest occurrence count.

use crate::combiners::ToSet;
use crate::reducer::{CombineFn, KeyOwned, fold_group};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Count occurrences per derived key and keep every key tied for the maximum.
///
/// - Accumulator: `HashMap<K, u64>` (merge adds counts)
/// - Output: `D::Output` over the winning keys (defaults to `HashSet<K>`)
///
/// An empty input yields an empty result. The order in which winning keys
/// reach the downstream reducer is `HashMap` iteration order.
///
/// ```
/// use ironfold::*;
/// use std::collections::HashSet;
///
/// let modes = vec![Some(1), Some(1), Some(2), Some(2), Some(3), Some(4), None, None]
///     .into_iter()
///     .combine_globally(&Mode::new());
/// assert_eq!(modes, HashSet::from([Some(1), Some(2), None]));
///
/// let by_abs = vec![1, -1, 2, -2, 3, 4]
///     .into_iter()
///     .combine_globally(&Mode::by_key(|x: i32| x.abs()));
/// assert_eq!(by_abs, HashSet::from([1, 2]));
/// ```
pub struct Mode<T, K, D = ToSet<K>> {
    key: KeyOwned<T, K>,
    downstream: D,
}

impl<T: 'static> Mode<T, T> {
    /// Mode of the elements themselves.
    pub fn new() -> Self {
        Self::by_key(|t: T| t)
    }
}

impl<T: 'static> Default for Mode<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Mode<T, K> {
    /// Mode of a key derived from every element.
    pub fn by_key<F>(key: F) -> Self
    where
        F: Fn(T) -> K + Send + Sync + 'static,
    {
        Self {
            key: Arc::new(key),
            downstream: ToSet::new(),
        }
    }
}

impl<T, K, D> Mode<T, K, D> {
    pub fn downstream<D2>(self, downstream: D2) -> Mode<T, K, D2> {
        Mode {
            key: self.key,
            downstream,
        }
    }
}

impl<T, K, D: Clone> Clone for Mode<T, K, D> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            downstream: self.downstream.clone(),
        }
    }
}

impl<T, K, D> CombineFn<T> for Mode<T, K, D>
where
    K: Eq + Hash,
    D: CombineFn<K>,
{
    type Acc = HashMap<K, u64>;
    type Output = D::Output;

    fn create(&self) -> HashMap<K, u64> {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut HashMap<K, u64>, v: T) {
        *acc.entry((self.key)(v)).or_insert(0) += 1;
    }

    fn merge(&self, acc: &mut HashMap<K, u64>, other: HashMap<K, u64>) {
        for (k, n) in other {
            *acc.entry(k).or_insert(0) += n;
        }
    }

    fn finish(&self, acc: HashMap<K, u64>) -> D::Output {
        let max = acc.values().copied().max().unwrap_or(0);
        let winners = acc
            .into_iter()
            .filter(|&(_, n)| n == max)
            .map(|(k, _)| k);
        fold_group(&self.downstream, winners)
    }
}
