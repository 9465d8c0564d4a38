//! Testing utilities for code built on ironfold reducers.
//!
//! - **Assertions**: compare outputs with expected results, including
//!   [`RankTable`](crate::RankTable)s
//! - **Harness**: [`reduce_in_parts`] accumulates explicit partitions and
//!   merges them, to check that a reducer's result does not depend on how its
//!   input was split
//! - **Fixtures**: [`Bid`] records with a multi-key comparator and a few
//!   sample sequences
//!
//! # Quick Start
//!
//! ```
//! use ironfold::*;
//! use ironfold::testing::*;
//!
//! let table = paired_ints().into_iter().combine_globally(&Rank::natural().dense());
//! assert_rank_table(
//!     &table,
//!     &[(1, vec![1, 1]), (2, vec![2, 2]), (3, vec![3, 3]), (4, vec![4, 4])],
//! );
//! assert_eq!(table, reduce_in_parts(&Rank::natural().dense(), paired_ints(), &[3, 5]));
//! ```

pub mod assertions;
pub mod fixtures;
pub mod harness;

pub use assertions::*;
pub use fixtures::*;
pub use harness::*;
