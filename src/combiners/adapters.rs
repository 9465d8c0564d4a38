//! Combiner adapters: `Mapping` (transform, then reduce) and `GroupBy` (per-key reducers)

use crate::reducer::CombineFn;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/* ===================== Mapping ===================== */

/// Apply `f` to every element before handing it to `downstream`.
///
/// ```
/// use ironfold::*;
///
/// let squares = vec![1, 2, 2, 3]
///     .into_iter()
///     .combine_globally(&Mapping::new(|x: i32| x * x, ToSet::new()));
/// assert_eq!(squares.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Mapping<U, F, D> {
    f: F,
    downstream: D,
    _u: PhantomData<fn() -> U>,
}

impl<U, F, D> Mapping<U, F, D> {
    pub fn new(f: F, downstream: D) -> Self {
        Self {
            f,
            downstream,
            _u: PhantomData,
        }
    }
}

impl<V, U, F, D> CombineFn<V> for Mapping<U, F, D>
where
    F: Fn(V) -> U,
    D: CombineFn<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn create(&self) -> D::Acc {
        self.downstream.create()
    }

    fn add_input(&self, acc: &mut D::Acc, v: V) {
        self.downstream.add_input(acc, (self.f)(v));
    }

    fn merge(&self, acc: &mut D::Acc, other: D::Acc) {
        self.downstream.merge(acc, other);
    }

    fn finish(&self, acc: D::Acc) -> D::Output {
        self.downstream.finish(acc)
    }
}

/* ===================== GroupBy ===================== */

/// Partition elements by key and run an independent `downstream` reducer per key.
///
/// Each key owns a live downstream accumulator, so partition merges call the
/// downstream's own `merge` rather than re-folding materialised groups.
///
/// - Accumulator: `HashMap<K, D::Acc>`
/// - Output: `HashMap<K, D::Output>`
#[derive(Clone, Debug)]
pub struct GroupBy<K, F, D> {
    key: F,
    downstream: D,
    _k: PhantomData<fn() -> K>,
}

impl<K, F, D> GroupBy<K, F, D> {
    pub fn new(key: F, downstream: D) -> Self {
        Self {
            key,
            downstream,
            _k: PhantomData,
        }
    }
}

impl<T, K, F, D> CombineFn<T> for GroupBy<K, F, D>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    D: CombineFn<T>,
{
    type Acc = HashMap<K, D::Acc>;
    type Output = HashMap<K, D::Output>;

    fn create(&self) -> Self::Acc {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut Self::Acc, v: T) {
        let k = (self.key)(&v);
        let slot = acc.entry(k).or_insert_with(|| self.downstream.create());
        self.downstream.add_input(slot, v);
    }

    fn merge(&self, acc: &mut Self::Acc, other: Self::Acc) {
        for (k, a) in other {
            let slot = acc.entry(k).or_insert_with(|| self.downstream.create());
            self.downstream.merge(slot, a);
        }
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.into_iter()
            .map(|(k, a)| (k, self.downstream.finish(a)))
            .collect()
    }
}
