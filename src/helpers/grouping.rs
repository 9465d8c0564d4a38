//! Distinct, mode and n-tile entry points.

use crate::distinct::{DistinctBy, RankDistinct};
use crate::error::Result;
use crate::mode::Mode;
use crate::ntile::NTile;
use crate::order::{Comparator, Natural};

/// One element per tie group in natural order.
pub fn rank_distinct<T: Natural + 'static>() -> RankDistinct<T, T> {
    RankDistinct::natural()
}

/// One key per tie group of `mapper(element)` in the key's natural order.
pub fn rank_distinct_by<T, K, F>(mapper: F) -> RankDistinct<T, K>
where
    K: Natural + 'static,
    F: Fn(T) -> K + Send + Sync + 'static,
{
    RankDistinct::by_key(mapper)
}

/// Last-seen element per `mapper(element)`.
pub fn distinct_by<T, K, F>(mapper: F) -> DistinctBy<T, K>
where
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    DistinctBy::new(mapper)
}

/// Elements tied for the highest occurrence count.
pub fn mode<T: 'static>() -> Mode<T, T> {
    Mode::new()
}

/// Keys tied for the highest occurrence count.
pub fn mode_by<T, K, F>(mapper: F) -> Mode<T, K>
where
    F: Fn(T) -> K + Send + Sync + 'static,
{
    Mode::by_key(mapper)
}

/// `tiles` buckets in natural order.
///
/// # Errors
/// [`ReduceError::InvalidArgument`](crate::ReduceError::InvalidArgument) when `tiles == 0`.
pub fn ntile<T: Natural + 'static>(tiles: usize) -> Result<NTile<T>> {
    NTile::new(tiles)
}

/// `tiles` buckets in `comparator` order.
///
/// # Errors
/// [`ReduceError::InvalidArgument`](crate::ReduceError::InvalidArgument) when `tiles == 0`.
pub fn ntile_by<T>(tiles: usize, comparator: Comparator<T>) -> Result<NTile<T>> {
    NTile::by(tiles, comparator)
}
