//! Built-in downstream combiners and adapters.
//!
//! These are small implementations of [`CombineFn`](crate::CombineFn) meant to
//! be plugged into the grouping reducers as their *downstream*:
//!
//! - [`ToVec<T>`] -- collect into a `Vec<T>` (encounter order).
//! - [`ToSet<T>`] -- collect into a `HashSet<T>`.
//! - [`Count`] -- number of elements.
//! - [`Sum<T>`] -- plain sum.
//! - [`Min<T>`] / [`Max<T>`] -- extreme values (`None` when empty).
//! - [`Mapping`] -- transform elements before another reducer.
//! - [`GroupBy`] -- per-key nested reducers.
//!
//! # Examples
//! ```
//! use ironfold::*;
//!
//! // Rank, then count the members of each rank.
//! let counts = vec![3, 1, 3, 2]
//!     .into_iter()
//!     .combine_globally(&Rank::natural().downstream(Count));
//! assert_eq!(counts.get(3), Some(&2));
//!
//! // Group by parity and rank inside every group.
//! let by_parity = (1..=4)
//!     .combine_globally(&GroupBy::new(|x: &i32| x % 2, Rank::natural()));
//! assert_eq!(by_parity[&0].get(2), Some(&vec![4]));
//! ```

mod adapters;
mod basic;

pub use adapters::{GroupBy, Mapping};
pub use basic::{Count, Max, Min, Sum, ToSet, ToVec};
