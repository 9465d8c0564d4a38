//! Cumulative (running) sums over the sorted input.
//!
//! Elements are sorted by a comparator, a numeric value is extracted from
//! each and the running total *after* every element is emitted to the
//! downstream reducer (by default collected into a `Vec`).
//!
//! Numeric behaviour depends on the total's type ([`RunningTotal`]):
//!
//! - integers: plain wrapping addition
//! - `f32` / `f64`: Kahan compensated summation
//! - `BigDecimal` (feature `decimal`): exact, unbounded addition. Totals keep
//!   every digit of every input.
//!
//! ```
//! use ironfold::*;
//!
//! let totals = vec![3.1, 1.0, 2.1]
//!     .into_iter()
//!     .combine_globally(&CumulativeSum::new(|x: &f64| *x));
//! assert_eq!(totals, vec![1.0, 3.1, 6.2]);
//! ```

use crate::combiners::ToVec;
use crate::order::{Comparator, Natural};
use crate::reducer::{CombineFn, KeyRef, LiftableCombiner, append, fold_group};
use std::sync::Arc;

/// A numeric type that can be summed step by step.
///
/// `State` is whatever the summation needs between steps; `accumulate` adds
/// one value and returns the new total.
pub trait RunningTotal: Sized {
    type State: Default;

    fn accumulate(state: &mut Self::State, v: Self) -> Self;
}

macro_rules! wrapping_total {
    ($($t:ty),* $(,)?) => {$(
        impl RunningTotal for $t {
            type State = $t;

            #[inline]
            fn accumulate(state: &mut $t, v: $t) -> $t {
                *state = state.wrapping_add(v);
                *state
            }
        }
    )*};
}

wrapping_total!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Kahan running sum: `sum` plus the low-order bits lost so far.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kahan<F> {
    sum: F,
    compensation: F,
}

macro_rules! kahan_total {
    ($($t:ty),*) => {$(
        impl Kahan<$t> {
            #[inline]
            pub fn add(&mut self, value: $t) {
                let y = value - self.compensation;
                let t = self.sum + y;
                self.compensation = (t - self.sum) - y;
                self.sum = t;
            }

            #[inline]
            pub fn value(&self) -> $t {
                self.sum
            }
        }

        impl RunningTotal for $t {
            type State = Kahan<$t>;

            #[inline]
            fn accumulate(state: &mut Kahan<$t>, v: $t) -> $t {
                state.add(v);
                state.value()
            }
        }
    )*};
}

kahan_total!(f32, f64);

#[cfg(feature = "decimal")]
impl RunningTotal for bigdecimal::BigDecimal {
    type State = bigdecimal::BigDecimal;

    fn accumulate(state: &mut Self::State, v: Self) -> Self {
        *state += v;
        state.clone()
    }
}

/// Sort, then emit the running total of `extract(element)` per element.
///
/// - Accumulator: `Vec<T>`
/// - Output: `D::Output` over the running totals (defaults to `Vec<N>`)
pub struct CumulativeSum<T, N, D = ToVec<N>> {
    extract: KeyRef<T, N>,
    comparator: Comparator<T>,
    downstream: D,
}

impl<T: Natural + 'static, N> CumulativeSum<T, N> {
    /// Running totals of `extract(element)` in the elements' natural order.
    pub fn new<F>(extract: F) -> Self
    where
        F: Fn(&T) -> N + Send + Sync + 'static,
    {
        Self::by(Comparator::natural(), extract)
    }
}

impl<T, N> CumulativeSum<T, N> {
    /// Running totals of `extract(element)` in `comparator` order.
    pub fn by<F>(comparator: Comparator<T>, extract: F) -> Self
    where
        F: Fn(&T) -> N + Send + Sync + 'static,
    {
        Self {
            extract: Arc::new(extract),
            comparator,
            downstream: ToVec::new(),
        }
    }
}

impl<T, N, D> CumulativeSum<T, N, D> {
    #[must_use]
    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn downstream<D2>(self, downstream: D2) -> CumulativeSum<T, N, D2> {
        CumulativeSum {
            extract: self.extract,
            comparator: self.comparator,
            downstream,
        }
    }
}

impl<T, N, D: Clone> Clone for CumulativeSum<T, N, D> {
    fn clone(&self) -> Self {
        Self {
            extract: Arc::clone(&self.extract),
            comparator: self.comparator.clone(),
            downstream: self.downstream.clone(),
        }
    }
}

impl<T, N, D> CombineFn<T> for CumulativeSum<T, N, D>
where
    N: RunningTotal,
    D: CombineFn<N>,
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

    fn finish(&self, mut acc: Vec<T>) -> D::Output {
        acc.sort_by(|a, b| self.comparator.compare(a, b));
        let mut state = N::State::default();
        let totals = acc
            .iter()
            .map(|t| N::accumulate(&mut state, (self.extract)(t)));
        fold_group(&self.downstream, totals)
    }
}

impl<T, N, D> LiftableCombiner<T> for CumulativeSum<T, N, D>
where
    N: RunningTotal,
    D: CombineFn<N>,
{
    fn build_from_group(&self, values: Vec<T>) -> Vec<T> {
        values
    }
}
