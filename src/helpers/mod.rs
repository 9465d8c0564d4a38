//! Free-function entry points for every reducer.
//!
//! Each function returns a configured reducer with the documented defaults;
//! the builder methods on the returned value adjust the rest:
//!
//! ```
//! use ironfold::*;
//!
//! let table = vec![5, 3, 5, 1]
//!     .into_iter()
//!     .combine_globally(&rank().dense().downstream(Count));
//! assert_eq!(table.into_entries(), vec![(1, 1), (2, 1), (3, 2)]);
//! ```

mod grouping;
mod ranking;
mod sums;

pub use grouping::*;
pub use ranking::*;
pub use sums::*;
