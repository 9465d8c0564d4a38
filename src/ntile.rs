//! N-tile bucketing: split the sorted input into `N` contiguous, near-equal buckets.
//!
//! Bucket size is `ceil(len / N)`; buckets are filled in sorted order and
//! partitioning stops once the elements run out, so fewer than `N` buckets
//! come back when `len < N` (or when the ceiling leaves the tail empty).
//!
//! The result is a plain `Vec` of bucket results: bucket `i` (1-based) is at
//! index `i - 1`.
//!
//! ```
//! use ironfold::*;
//!
//! let tiles = vec![None, Some(1), Some(1), Some(2), Some(3), None]
//!     .into_iter()
//!     .combine_globally(&NTile::new(2)?);
//! assert_eq!(tiles, vec![vec![Some(1), Some(1), Some(2)], vec![Some(3), None, None]]);
//! # Ok::<_, ironfold::ReduceError>(())
//! ```

use crate::combiners::ToVec;
use crate::error::{ReduceError, Result};
use crate::order::{Comparator, Natural};
use crate::reducer::{CombineFn, LiftableCombiner, append, fold_group};
use std::num::NonZeroUsize;
use tracing::trace;

/// Sort, then cut into `tiles` contiguous buckets, folding each through `downstream`.
///
/// - Accumulator: `Vec<T>`
/// - Output: `Vec<D::Output>` (at most `tiles` entries)
#[derive(Clone, Debug)]
pub struct NTile<T, D = ToVec<T>> {
    tiles: NonZeroUsize,
    comparator: Comparator<T>,
    downstream: D,
}

impl<T: Natural + 'static> NTile<T> {
    /// `tiles` buckets in natural order.
    ///
    /// # Errors
    /// [`ReduceError::InvalidArgument`] when `tiles == 0`.
    pub fn new(tiles: usize) -> Result<Self> {
        Self::by(tiles, Comparator::natural())
    }
}

impl<T> NTile<T> {
    /// `tiles` buckets in `comparator` order.
    ///
    /// # Errors
    /// [`ReduceError::InvalidArgument`] when `tiles == 0`.
    pub fn by(tiles: usize, comparator: Comparator<T>) -> Result<Self> {
        let tiles = NonZeroUsize::new(tiles)
            .ok_or_else(|| ReduceError::invalid_argument("tile count must be positive"))?;
        Ok(Self {
            tiles,
            comparator,
            downstream: ToVec::new(),
        })
    }
}

impl<T, D> NTile<T, D> {
    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn downstream<D2>(self, downstream: D2) -> NTile<T, D2> {
        NTile {
            tiles: self.tiles,
            comparator: self.comparator,
            downstream,
        }
    }

    pub fn tiles(&self) -> usize {
        self.tiles.get()
    }
}

/// `ceil(len / tiles)`, never zero.
pub(crate) fn bucket_size(len: usize, tiles: NonZeroUsize) -> usize {
    len.div_ceil(tiles.get()).max(1)
}

impl<T, D> CombineFn<T> for NTile<T, D>
where
    D: CombineFn<T>,
{
    type Acc = Vec<T>;
    type Output = Vec<D::Output>;

    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn merge(&self, acc: &mut Vec<T>, other: Vec<T>) {
        append(acc, other);
    }

    fn finish(&self, mut acc: Vec<T>) -> Vec<D::Output> {
        acc.sort_by(|a, b| self.comparator.compare(a, b));
        let size = bucket_size(acc.len(), self.tiles);
        trace!(len = acc.len(), tiles = self.tiles.get(), size, "n-tile buckets");

        let mut out = Vec::with_capacity(self.tiles.get());
        let mut it = acc.into_iter().peekable();
        while it.peek().is_some() {
            out.push(fold_group(&self.downstream, it.by_ref().take(size)));
        }
        out
    }
}

impl<T, D> LiftableCombiner<T> for NTile<T, D>
where
    D: CombineFn<T>,
{
    fn build_from_group(&self, values: Vec<T>) -> Vec<T> {
        values
    }
}
