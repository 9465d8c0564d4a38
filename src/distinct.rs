//! Distinct selectors.
//!
//! Two deliberately different policies:
//!
//! - [`RankDistinct`] -- derive a key per element, rank the keys and keep the
//!   **first key of every tie group**. Output follows sorted key order.
//! - [`DistinctBy`] -- keep the **last element seen** for every derived key
//!   (last write wins). Output order is `HashMap` iteration order, i.e.
//!   unspecified.
//!
//! They disagree whenever distinct elements share a key: rank-based distinct
//! yields keys in sort order, map-based distinct yields whichever element
//! arrived last.
//!
//! # Examples
//! ```
//! use ironfold::*;
//!
//! let by_abs = vec![-1, 2, 2, 1, 1]
//!     .into_iter()
//!     .combine_globally(&RankDistinct::by_key(|x: i32| x.abs()));
//! assert_eq!(by_abs, vec![1, 2]);
//!
//! let last = vec![(1, 1), (1, 2)]
//!     .into_iter()
//!     .combine_globally(&DistinctBy::new(|p: &(i32, i32)| p.0));
//! assert_eq!(last, vec![(1, 2)]);
//! ```

use crate::combiners::ToVec;
use crate::order::{Comparator, Natural};
use crate::ranking::ranked_groups;
use crate::reducer::{CombineFn, KeyOwned, KeyRef, LiftableCombiner, append, fold_group};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/* ===================== RankDistinct ===================== */

/// One representative key per tie group of the ranked keys.
///
/// - Accumulator: `Vec<T>`
/// - Output: `D::Output` (defaults to `Vec<K>` in ascending key order)
pub struct RankDistinct<T, K, D = ToVec<K>> {
    key: KeyOwned<T, K>,
    comparator: Comparator<K>,
    downstream: D,
}

impl<T: Natural + 'static> RankDistinct<T, T> {
    /// Identity key, natural order.
    pub fn natural() -> Self {
        Self::by(Comparator::natural())
    }
}

impl<T: 'static> RankDistinct<T, T> {
    /// Identity key, explicit order.
    pub fn by(comparator: Comparator<T>) -> Self {
        Self {
            key: Arc::new(|t: T| t),
            comparator,
            downstream: ToVec::new(),
        }
    }
}

impl<T, K: Natural + 'static> RankDistinct<T, K> {
    /// Rank `key(element)` in the key's natural order.
    pub fn by_key<F>(key: F) -> Self
    where
        F: Fn(T) -> K + Send + Sync + 'static,
    {
        Self::by_key_with(key, Comparator::natural())
    }
}

impl<T, K> RankDistinct<T, K> {
    /// Rank `key(element)` with an explicit key order.
    pub fn by_key_with<F>(key: F, comparator: Comparator<K>) -> Self
    where
        F: Fn(T) -> K + Send + Sync + 'static,
    {
        Self {
            key: Arc::new(key),
            comparator,
            downstream: ToVec::new(),
        }
    }
}

impl<T, K, D> RankDistinct<T, K, D> {
    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<K>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn downstream<D2>(self, downstream: D2) -> RankDistinct<T, K, D2> {
        RankDistinct {
            key: self.key,
            comparator: self.comparator,
            downstream,
        }
    }
}

impl<T, K, D: Clone> Clone for RankDistinct<T, K, D> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            comparator: self.comparator.clone(),
            downstream: self.downstream.clone(),
        }
    }
}

impl<T, K, D> CombineFn<T> for RankDistinct<T, K, D>
where
    D: CombineFn<K>,
{
    type Acc = Vec<T>;
    type Output = D::Output;

    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn merge(&self, acc: &mut Vec<T>, other: Vec<T>) {
        append(acc, other);
    }

    fn finish(&self, acc: Vec<T>) -> D::Output {
        let keys: Vec<K> = acc.into_iter().map(|t| (self.key)(t)).collect();
        let firsts = ranked_groups(keys, &self.comparator, false)
            .filter_map(|(_, members)| members.into_iter().next());
        fold_group(&self.downstream, firsts)
    }
}

impl<T, K, D> LiftableCombiner<T> for RankDistinct<T, K, D>
where
    D: CombineFn<K>,
{
    fn build_from_group(&self, values: Vec<T>) -> Vec<T> {
        values
    }
}

/* ===================== DistinctBy ===================== */

/// Last-seen element per derived key.
///
/// - Accumulator: `HashMap<K, T>`; `add_input` overwrites.
/// - `merge`: union where the right-hand (later) accumulator wins collisions.
/// - Output: `D::Output` over the surviving elements in `HashMap` order.
pub struct DistinctBy<T, K, D = ToVec<T>> {
    key: KeyRef<T, K>,
    downstream: D,
}

impl<T, K> DistinctBy<T, K> {
    pub fn new<F>(key: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            key: Arc::new(key),
            downstream: ToVec::new(),
        }
    }
}

impl<T: Clone + 'static> DistinctBy<T, T> {
    /// Deduplicate on the element itself.
    pub fn identity() -> Self {
        Self::new(T::clone)
    }
}

impl<T, K, D> DistinctBy<T, K, D> {
    pub fn downstream<D2>(self, downstream: D2) -> DistinctBy<T, K, D2> {
        DistinctBy {
            key: self.key,
            downstream,
        }
    }
}

impl<T, K, D: Clone> Clone for DistinctBy<T, K, D> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            downstream: self.downstream.clone(),
        }
    }
}

impl<T, K, D> CombineFn<T> for DistinctBy<T, K, D>
where
    K: Eq + Hash,
    D: CombineFn<T>,
{
    type Acc = HashMap<K, T>;
    type Output = D::Output;

    fn create(&self) -> HashMap<K, T> {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut HashMap<K, T>, v: T) {
        acc.insert((self.key)(&v), v);
    }

    fn merge(&self, acc: &mut HashMap<K, T>, other: HashMap<K, T>) {
        acc.extend(other);
    }

    fn finish(&self, acc: HashMap<K, T>) -> D::Output {
        fold_group(&self.downstream, acc.into_values())
    }
}
