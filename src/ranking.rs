//! Ranking reducers.
//!
//! - [`Rank`] -- sort by a comparator, group ties, number the groups and fold
//!   every group through a downstream reducer. Produces a [`RankTable`].
//! - [`RankOf`] -- rank, then index the result by (a key derived from) each
//!   element instead of by rank.
//!
//! Two numbering policies are supported:
//!
//! | policy   | rank of a new tie group                          | `[1,2,3,4,4,3,2,1]` |
//! |----------|--------------------------------------------------|---------------------|
//! | standard | `1 +` number of elements sorted before the group | `1, 3, 5, 7`        |
//! | dense    | previous rank `+ 1`                              | `1, 2, 3, 4`        |
//!
//! Ties are detected with the comparator (`Ordering::Equal`), never by
//! position, so physical input order never influences rank numbers.
//!
//! # Examples
//! ```
//! use ironfold::*;
//!
//! let input = vec![1, 2, 3, 4, 4, 3, 2, 1];
//!
//! let standard = input.clone().into_iter().combine_globally(&Rank::natural());
//! assert_eq!(
//!     standard.into_entries(),
//!     vec![(1, vec![1, 1]), (3, vec![2, 2]), (5, vec![3, 3]), (7, vec![4, 4])]
//! );
//!
//! let dense = input.into_iter().combine_globally(&Rank::natural().dense());
//! assert_eq!(dense.ranks().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```

use crate::combiners::ToVec;
use crate::order::{Comparator, Natural};
use crate::reducer::{CombineFn, KeyOwned, LiftableCombiner, append, fold_group};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

/* ===================== RankTable ===================== */

/// Ordered mapping from rank number to the downstream result for that rank.
///
/// Iteration follows the rank-order comparator the table was built with
/// (ascending by default). Lookup by rank is a binary search over a
/// rank-sorted index, whatever the iteration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RankEntries<R>")]
pub struct RankTable<R> {
    entries: Vec<(usize, R)>,
    /// Positions in `entries`, ascending by rank.
    #[serde(skip)]
    by_rank: Vec<usize>,
}

#[derive(Deserialize)]
struct RankEntries<R> {
    entries: Vec<(usize, R)>,
}

impl<R> From<RankEntries<R>> for RankTable<R> {
    fn from(raw: RankEntries<R>) -> Self {
        Self::indexed(raw.entries)
    }
}

impl<R> RankTable<R> {
    pub(crate) fn ordered(mut entries: Vec<(usize, R)>, rank_order: &Comparator<usize>) -> Self {
        entries.sort_by(|a, b| rank_order.compare(&a.0, &b.0));
        Self::indexed(entries)
    }

    fn indexed(entries: Vec<(usize, R)>) -> Self {
        let mut by_rank: Vec<usize> = (0..entries.len()).collect();
        by_rank.sort_unstable_by_key(|&i| entries[i].0);
        Self { entries, by_rank }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The result recorded for `rank`, if any group received that rank.
    pub fn get(&self, rank: usize) -> Option<&R> {
        self.by_rank
            .binary_search_by_key(&rank, |&i| self.entries[i].0)
            .ok()
            .map(|p| &self.entries[self.by_rank[p]].1)
    }

    pub fn first(&self) -> Option<(usize, &R)> {
        self.entries.first().map(|(r, v)| (*r, v))
    }

    pub fn ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(r, _)| *r)
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &R)> {
        self.entries.iter().map(|(r, v)| (*r, v))
    }

    pub fn into_entries(self) -> Vec<(usize, R)> {
        self.entries
    }

    pub fn into_values(self) -> Vec<R> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl<R> IntoIterator for RankTable<R> {
    type Item = (usize, R);
    type IntoIter = std::vec::IntoIter<(usize, R)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/* ===================== tie grouping ===================== */

/// Split an already sorted vector into runs the comparator reports equal.
/// Each run is returned with the sorted index of its first element.
pub(crate) fn tie_groups<T>(sorted: Vec<T>, cmp: &Comparator<T>) -> Vec<(usize, Vec<T>)> {
    let total = sorted.len();
    let starts: Vec<usize> = (0..total)
        .filter(|&i| i == 0 || cmp.compare(&sorted[i - 1], &sorted[i]) != Ordering::Equal)
        .collect();

    let mut it = sorted.into_iter();
    starts
        .iter()
        .enumerate()
        .map(|(g, &start)| {
            let end = starts.get(g + 1).copied().unwrap_or(total);
            (start, it.by_ref().take(end - start).collect())
        })
        .collect()
}

/// Attach rank numbers to tie groups.
fn number_groups<T>(
    groups: Vec<(usize, Vec<T>)>,
    dense: bool,
) -> impl Iterator<Item = (usize, Vec<T>)> {
    groups
        .into_iter()
        .enumerate()
        .map(move |(g, (start, members))| (if dense { g + 1 } else { start + 1 }, members))
}

/// Sort and rank in one step; shared by every rank-based reducer.
pub(crate) fn ranked_groups<T>(
    mut items: Vec<T>,
    cmp: &Comparator<T>,
    dense: bool,
) -> impl Iterator<Item = (usize, Vec<T>)> {
    items.sort_by(|a, b| cmp.compare(a, b));
    let groups = tie_groups(items, cmp);
    trace!(groups = groups.len(), dense, "ranked tie groups");
    number_groups(groups, dense)
}

/* ===================== Rank<T, D> ===================== */

/// Rank elements and fold each rank's members through `downstream`.
///
/// - Accumulator: `Vec<T>` (sorting happens in `finish`)
/// - Output: [`RankTable<D::Output>`]
///
/// Defaults: natural order (nulls last), standard ranking, ascending rank
/// order, [`ToVec`] downstream.
#[derive(Clone, Debug)]
pub struct Rank<T, D = ToVec<T>> {
    comparator: Comparator<T>,
    rank_order: Comparator<usize>,
    dense: bool,
    downstream: D,
}

impl<T: Natural + 'static> Rank<T> {
    /// Rank by natural order.
    pub fn natural() -> Self {
        Self::by(Comparator::natural())
    }
}

impl<T> Rank<T> {
    /// Rank by an explicit comparator.
    pub fn by(comparator: Comparator<T>) -> Self {
        Self {
            comparator,
            rank_order: Comparator::natural(),
            dense: false,
            downstream: ToVec::new(),
        }
    }
}

impl<T, D> Rank<T, D> {
    /// Switch to dense ranking (no gaps after ties).
    #[must_use]
    pub fn dense(self) -> Self {
        self.dense_rank(true)
    }

    #[must_use]
    pub fn dense_rank(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    /// Order in which the resulting table lists its ranks.
    #[must_use]
    pub fn rank_order(mut self, rank_order: Comparator<usize>) -> Self {
        self.rank_order = rank_order;
        self
    }

    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the per-rank reducer.
    pub fn downstream<D2>(self, downstream: D2) -> Rank<T, D2> {
        Rank {
            comparator: self.comparator,
            rank_order: self.rank_order,
            dense: self.dense,
            downstream,
        }
    }

    pub fn is_dense(&self) -> bool {
        self.dense
    }
}

impl<T, D> CombineFn<T> for Rank<T, D>
where
    D: CombineFn<T>,
{
    type Acc = Vec<T>;
    type Output = RankTable<D::Output>;

    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn merge(&self, acc: &mut Vec<T>, other: Vec<T>) {
        append(acc, other);
    }

    fn finish(&self, acc: Vec<T>) -> RankTable<D::Output> {
        let entries = ranked_groups(acc, &self.comparator, self.dense)
            .map(|(rank, members)| (rank, fold_group(&self.downstream, members)))
            .collect();
        RankTable::ordered(entries, &self.rank_order)
    }
}

impl<T, D> LiftableCombiner<T> for Rank<T, D>
where
    D: CombineFn<T>,
{
    fn build_from_group(&self, values: Vec<T>) -> Vec<T> {
        values
    }
}

/* ===================== RankOf<T, K> ===================== */

/// Rank elements, then map each element's derived key to its rank.
///
/// - Accumulator: `Vec<T>`
/// - Output: `HashMap<K, usize>`
///
/// When two elements derive the same key, the one sorted later overwrites
/// the earlier entry.
///
/// ```
/// use ironfold::*;
///
/// let ranks = vec!["b", "a", "c", "a"].into_iter().combine_globally(&RankOf::natural());
/// assert_eq!(ranks["a"], 1);
/// assert_eq!(ranks["b"], 3);
/// ```
pub struct RankOf<T, K> {
    comparator: Comparator<T>,
    dense: bool,
    key: KeyOwned<T, K>,
}

impl<T: Natural + 'static> RankOf<T, T> {
    pub fn natural() -> Self {
        Self::by(Comparator::natural())
    }
}

impl<T: 'static> RankOf<T, T> {
    pub fn by(comparator: Comparator<T>) -> Self {
        Self {
            comparator,
            dense: false,
            key: Arc::new(|t: T| t),
        }
    }
}

impl<T, K> RankOf<T, K> {
    #[must_use]
    pub fn dense(mut self) -> Self {
        self.dense = true;
        self
    }

    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Index the result by `key(element)` instead of the element itself.
    pub fn key<K2, F>(self, key: F) -> RankOf<T, K2>
    where
        F: Fn(T) -> K2 + Send + Sync + 'static,
    {
        RankOf {
            comparator: self.comparator,
            dense: self.dense,
            key: Arc::new(key),
        }
    }
}

impl<T, K> Clone for RankOf<T, K> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            dense: self.dense,
            key: Arc::clone(&self.key),
        }
    }
}

impl<T, K> CombineFn<T> for RankOf<T, K>
where
    K: Eq + Hash,
{
    type Acc = Vec<T>;
    type Output = HashMap<K, usize>;

    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn merge(&self, acc: &mut Vec<T>, other: Vec<T>) {
        append(acc, other);
    }

    fn finish(&self, acc: Vec<T>) -> HashMap<K, usize> {
        let mut out = HashMap::new();
        for (rank, members) in ranked_groups(acc, &self.comparator, self.dense) {
            for m in members {
                out.insert((self.key)(m), rank);
            }
        }
        out
    }
}
