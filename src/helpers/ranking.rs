//! Ranking entry points: `rank`, `dense_rank`, `map_obj_to_rank` and friends.

use crate::order::{Comparator, Natural};
use crate::ranking::{Rank, RankOf};

/// Standard ranking in natural order, members collected into a `Vec`.
pub fn rank<T: Natural + 'static>() -> Rank<T> {
    Rank::natural()
}

/// Dense ranking in natural order.
pub fn dense_rank<T: Natural + 'static>() -> Rank<T> {
    Rank::natural().dense()
}

/// Standard ranking by `comparator`.
pub fn rank_by<T>(comparator: Comparator<T>) -> Rank<T> {
    Rank::by(comparator)
}

/// Dense ranking by `comparator`.
pub fn dense_rank_by<T>(comparator: Comparator<T>) -> Rank<T> {
    Rank::by(comparator).dense()
}

/// Standard ranking by `comparator`, then `mapper(element) -> rank`.
///
/// ```
/// use ironfold::*;
///
/// let words = vec!["pear", "fig", "apple", "kiwi"];
/// let ranks = words
///     .into_iter()
///     .combine_globally(&map_obj_to_rank(Comparator::by_key(|w: &&str| w.len()), |w| w));
/// assert_eq!(ranks["fig"], 1);
/// assert_eq!(ranks["pear"], 2);
/// assert_eq!(ranks["kiwi"], 2);
/// assert_eq!(ranks["apple"], 4);
/// ```
pub fn map_obj_to_rank<T, K, F>(comparator: Comparator<T>, mapper: F) -> RankOf<T, K>
where
    T: 'static,
    F: Fn(T) -> K + Send + Sync + 'static,
{
    RankOf::by(comparator).key(mapper)
}

/// Dense ranking by `comparator`, then `mapper(element) -> rank`.
pub fn map_obj_to_dense_rank<T, K, F>(comparator: Comparator<T>, mapper: F) -> RankOf<T, K>
where
    T: 'static,
    F: Fn(T) -> K + Send + Sync + 'static,
{
    RankOf::by(comparator).dense().key(mapper)
}
