//! # Ironfold
//!
//! Composable **reducers** for Rust: ranking with tie handling, distinct
//! selection, mode detection, n-tile bucketing, cumulative sums and
//! multi-value maps, all built on one `create / add_input / merge / finish`
//! contract and all able to hand each group they form to a nested
//! *downstream* reducer.
//!
//! ## Key Features
//!
//! - **One contract** - [`CombineFn`] with associated accumulator and output types
//! - **Standard and dense ranking** - with configurable rank order and per-rank reducers
//! - **Two distinct policies** - first-in-rank-order ([`RankDistinct`]) and last-seen ([`DistinctBy`])
//! - **Mode, n-tile, cumulative sums** - Kahan-compensated for floats, exact for decimals
//! - **Composable** - every grouping reducer takes a downstream reducer, including another grouping reducer
//! - **Sequential and parallel execution** - fold an iterator directly or split the input across rayon workers
//!
//! ## Quick Start
//!
//! ```
//! use ironfold::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let scores = vec![90, 75, 90, 60, 75, 75];
//!
//! // Fold any iterator in one pass.
//! let ranked = scores.clone().into_iter().combine_globally(&rank());
//! assert_eq!(ranked.ranks().collect::<Vec<_>>(), vec![1, 2, 5]);
//!
//! // The same reducer, split across worker threads.
//! let parallel = Runner::default().reduce(&rank(), scores)?;
//! assert_eq!(parallel, ranked);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Reducers
//!
//! A reducer ([`CombineFn`]) owns no data. It creates empty accumulators,
//! folds elements into them, merges accumulators built from neighbouring
//! partitions and finally turns one accumulator into the result. Most
//! reducers here keep the raw elements and do their real work (sorting,
//! grouping) in `finish`.
//!
//! ### Ordering
//!
//! Rank-based reducers sort with a [`Comparator`]. The default is the
//! [`Natural`] order: ascending, with `None` after every `Some` and floats
//! totally ordered.
//!
//! ### Downstream reducers
//!
//! Grouping reducers fold each group through a downstream reducer. The
//! defaults collect into a `Vec` (or a `HashSet` for [`Mode`]); swap in
//! [`Count`], [`Sum`], [`Mapping`] or any other [`CombineFn`]:
//!
//! ```
//! use ironfold::*;
//!
//! let lengths_per_rank = vec!["bb", "a", "cc", "ddd"]
//!     .into_iter()
//!     .combine_globally(
//!         &rank_by(Comparator::by_key(|s: &&str| s.len()))
//!             .downstream(Mapping::new(|s: &str| s.to_uppercase(), ToVec::new())),
//!     );
//! assert_eq!(lengths_per_rank.get(2), Some(&vec!["BB".to_string(), "CC".to_string()]));
//! ```
//!
//! ### Execution
//!
//! [`CombineExt::combine_globally`] folds an iterator on the current thread.
//! [`Runner`] applies a reducer to a `Vec`, either sequentially or by
//! splitting it into contiguous partitions on a rayon pool and merging the
//! partial accumulators in order.
//!
//! ## Testing
//!
//! The [`testing`] module ships assertions, a partition harness and fixtures
//! for code built on these reducers.

pub mod combiners;
pub mod cumulative;
pub mod distinct;
pub mod error;
pub mod helpers;
pub mod mode;
pub mod multimap;
pub mod ntile;
pub mod order;
pub mod ranking;
pub mod reducer;
pub mod runner;
pub mod testing;

// General re-exports
pub use combiners::{Count, GroupBy, Mapping, Max, Min, Sum, ToSet, ToVec};
pub use cumulative::{CumulativeSum, Kahan, RunningTotal};
pub use distinct::{DistinctBy, RankDistinct};
pub use error::{ReduceError, Result};
pub use helpers::*;
pub use mode::Mode;
pub use multimap::{EntriesToMultiValueMap, MultiValueMap};
pub use ntile::NTile;
pub use order::{Comparator, Natural};
pub use ranking::{Rank, RankOf, RankTable};
pub use reducer::{CombineExt, CombineFn, LiftableCombiner, fold_group};
pub use runner::{ExecMode, Runner};
