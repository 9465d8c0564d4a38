//! The reducer contract every algorithm in this crate is built on.
//!
//! A reducer consumes elements one at a time into a private accumulator,
//! merges accumulators built from disjoint partitions, and finally turns the
//! accumulator into its externally visible result:
//!
//! ```text
//! create() -> Acc
//! add_input(&mut Acc, V)
//! merge(&mut Acc, Acc)      // right-hand partition folded into the left
//! finish(Acc) -> Output     // called once per top-level reduction
//! ```
//!
//! Reducers compose: ranking, distinct, mode, n-tile and the cumulative sums
//! all take a *downstream* reducer and run it over each group they produce
//! (see [`fold_group`]).

/// A reusable reduction: `create / add_input / merge / finish`.
///
/// `merge` must be associative. For order-sensitive reducers the right-hand
/// accumulator must hold the partition that followed the left-hand one.
pub trait CombineFn<V> {
    /// Mutable state built up while elements are consumed.
    type Acc;
    /// The externally visible result.
    type Output;

    fn create(&self) -> Self::Acc;
    fn add_input(&self, acc: &mut Self::Acc, v: V);
    fn merge(&self, acc: &mut Self::Acc, other: Self::Acc);
    fn finish(&self, acc: Self::Acc) -> Self::Output;
}

/// Combiners that can build an accumulator from a whole materialised group
/// in one step, skipping per-element `add_input` calls.
pub trait LiftableCombiner<V>: CombineFn<V> {
    fn build_from_group(&self, values: Vec<V>) -> Self::Acc;
}

/// Run a reducer's full `create -> add_input* -> finish` cycle over one group.
pub fn fold_group<V, C, I>(comb: &C, items: I) -> C::Output
where
    C: CombineFn<V> + ?Sized,
    I: IntoIterator<Item = V>,
{
    let mut acc = comb.create();
    for v in items {
        comb.add_input(&mut acc, v);
    }
    comb.finish(acc)
}

/// Sequential driver for any iterator: `iter.combine_globally(&reducer)`.
///
/// This is the single-partition equivalent of [`Runner::reduce`](crate::Runner::reduce).
pub trait CombineExt: Iterator + Sized {
    fn combine_globally<C>(self, comb: &C) -> C::Output
    where
        C: CombineFn<Self::Item>,
    {
        fold_group(comb, self)
    }
}

impl<I: Iterator> CombineExt for I {}

/// Accumulator shared by the reducers that materialise their whole input
/// before finishing (ranking, n-tile, cumulative sums, rank-based distinct).
pub(crate) fn append<V>(acc: &mut Vec<V>, other: Vec<V>) {
    if acc.is_empty() {
        *acc = other;
    } else {
        acc.extend(other);
    }
}

/// Key extractor that borrows the element (the element itself is kept).
pub(crate) type KeyRef<T, K> = std::sync::Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Key extractor that consumes the element (only the key is kept).
pub(crate) type KeyOwned<T, K> = std::sync::Arc<dyn Fn(T) -> K + Send + Sync>;
