//! Pre-built datasets and comparators for common testing scenarios.

use crate::order::Comparator;
use serde::{Deserialize, Serialize};

/// A tender bid, used to exercise multi-key comparators.
///
/// Days are relative to "today": `-1` yesterday, `0` today, `1` tomorrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub num: u32,
    pub price: u32,
    pub shipping_day: Option<i32>,
    pub experience: Option<u32>,
    pub sent_day: i32,
}

impl Bid {
    #[must_use]
    pub const fn new(
        num: u32,
        price: u32,
        shipping_day: Option<i32>,
        experience: Option<u32>,
        sent_day: i32,
    ) -> Self {
        Self {
            num,
            price,
            shipping_day,
            experience,
            sent_day,
        }
    }
}

/// Seven bids that a [`bid_comparator`] puts in strictly ascending `num` order.
///
/// ```
/// use ironfold::testing::{bid_comparator, sample_bids};
///
/// let mut bids = sample_bids();
/// bids.reverse();
/// let cmp = bid_comparator();
/// bids.sort_by(|a, b| cmp.compare(a, b));
/// assert_eq!(bids.iter().map(|b| b.num).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
#[must_use]
pub fn sample_bids() -> Vec<Bid> {
    vec![
        Bid::new(1, 1, Some(1), None, 0),
        Bid::new(2, 2, Some(0), None, 0),
        Bid::new(3, 2, Some(1), None, 0),
        Bid::new(4, 3, Some(1), Some(2), 0),
        Bid::new(5, 3, Some(1), Some(1), 0),
        Bid::new(6, 4, Some(1), None, -1),
        Bid::new(7, 4, Some(1), None, 0),
    ]
}

/// Cheapest first, then earliest shipping (unknown last), then most
/// experienced (unknown last), then earliest sent.
#[must_use]
pub fn bid_comparator() -> Comparator<Bid> {
    Comparator::by_key(|b: &Bid| b.price)
        .then_by_key(|b: &Bid| b.shipping_day)
        .then(Comparator::by_key_with(
            |b: &Bid| b.experience,
            Comparator::<u32>::natural().reversed().nulls_last(),
        ))
        .then_by_key(|b: &Bid| b.sent_day)
}

/// `[1, 2, 3, 4, 4, 3, 2, 1]`: four tie groups of two.
#[must_use]
pub fn paired_ints() -> Vec<i32> {
    vec![1, 2, 3, 4, 4, 3, 2, 1]
}

/// `[1, 1, 2, 2, 3, 4, None, None]`: a three-way tie for the most frequent value.
#[must_use]
pub fn tied_options() -> Vec<Option<i32>> {
    vec![
        Some(1),
        Some(1),
        Some(2),
        Some(2),
        Some(3),
        Some(4),
        None,
        None,
    ]
}
