//! Multi-value maps: gather every value seen for a key, then reduce per key.
//!
//! Values keep encounter order within a key; when two partial maps merge the
//! left partition's values come first. `Option` keys and values are fine,
//! `None` is just another key.
//!
//! ```
//! use ironfold::*;
//!
//! let m = vec![(1, 1), (1, 2), (2, 3)]
//!     .into_iter()
//!     .combine_globally(&MultiValueMap::pairs());
//! assert_eq!(m[&1], vec![1, 2]);
//! assert_eq!(m[&2], vec![3]);
//!
//! let from_entries = vec![[(1, "a")], [(1, "b")]]
//!     .into_iter()
//!     .combine_globally(&EntriesToMultiValueMap::new());
//! assert_eq!(from_entries[&1], vec!["a", "b"]);
//! ```

use crate::combiners::ToVec;
use crate::reducer::{CombineFn, KeyOwned, fold_group};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

type Buckets<K, V> = HashMap<K, Vec<V>>;

fn push_value<K: Eq + Hash, V>(acc: &mut Buckets<K, V>, k: K, v: V) {
    acc.entry(k).or_default().push(v);
}

fn merge_buckets<K: Eq + Hash, V>(acc: &mut Buckets<K, V>, other: Buckets<K, V>) {
    for (k, vs) in other {
        acc.entry(k).or_default().extend(vs);
    }
}

fn finish_buckets<K, V, D>(downstream: &D, acc: Buckets<K, V>) -> HashMap<K, D::Output>
where
    K: Eq + Hash,
    D: CombineFn<V>,
{
    acc.into_iter()
        .map(|(k, vs)| (k, fold_group(downstream, vs)))
        .collect()
}

/* ===================== MultiValueMap ===================== */

/// Split every element into `(key, value)` and collect values per key.
///
/// - Accumulator: `HashMap<K, Vec<V>>`
/// - Output: `HashMap<K, D::Output>` (defaults to `HashMap<K, Vec<V>>`)
pub struct MultiValueMap<T, K, V, D = ToVec<V>> {
    split: KeyOwned<T, (K, V)>,
    downstream: D,
}

impl<K: 'static, V: 'static> MultiValueMap<(K, V), K, V> {
    /// Elements already are `(key, value)` pairs.
    pub fn pairs() -> Self {
        Self::by(|kv: (K, V)| kv)
    }
}

impl<T, K, V> MultiValueMap<T, K, V> {
    pub fn by<F>(split: F) -> Self
    where
        F: Fn(T) -> (K, V) + Send + Sync + 'static,
    {
        Self {
            split: Arc::new(split),
            downstream: ToVec::new(),
        }
    }
}

impl<T, K, V, D> MultiValueMap<T, K, V, D> {
    pub fn downstream<D2>(self, downstream: D2) -> MultiValueMap<T, K, V, D2> {
        MultiValueMap {
            split: self.split,
            downstream,
        }
    }
}

impl<T, K, V, D: Clone> Clone for MultiValueMap<T, K, V, D> {
    fn clone(&self) -> Self {
        Self {
            split: Arc::clone(&self.split),
            downstream: self.downstream.clone(),
        }
    }
}

impl<T, K, V, D> CombineFn<T> for MultiValueMap<T, K, V, D>
where
    K: Eq + Hash,
    D: CombineFn<V>,
{
    type Acc = Buckets<K, V>;
    type Output = HashMap<K, D::Output>;

    fn create(&self) -> Buckets<K, V> {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut Buckets<K, V>, t: T) {
        let (k, v) = (self.split)(t);
        push_value(acc, k, v);
    }

    fn merge(&self, acc: &mut Buckets<K, V>, other: Buckets<K, V>) {
        merge_buckets(acc, other);
    }

    fn finish(&self, acc: Buckets<K, V>) -> Self::Output {
        finish_buckets(&self.downstream, acc)
    }
}

/* ===================== EntriesToMultiValueMap ===================== */

/// Like [`MultiValueMap`], but every element is itself a collection of
/// entries: a `HashMap<K, V>`, a `Vec<(K, V)>`, a single-entry array...
#[derive(Debug)]
pub struct EntriesToMultiValueMap<M, K, V, D = ToVec<V>> {
    downstream: D,
    _p: PhantomData<fn(M) -> (K, V)>,
}

impl<M, K, V> EntriesToMultiValueMap<M, K, V> {
    pub const fn new() -> Self {
        Self {
            downstream: ToVec::new(),
            _p: PhantomData,
        }
    }
}

impl<M, K, V> Default for EntriesToMultiValueMap<M, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, K, V, D> EntriesToMultiValueMap<M, K, V, D> {
    pub fn downstream<D2>(self, downstream: D2) -> EntriesToMultiValueMap<M, K, V, D2> {
        EntriesToMultiValueMap {
            downstream,
            _p: PhantomData,
        }
    }
}

impl<M, K, V, D: Clone> Clone for EntriesToMultiValueMap<M, K, V, D> {
    fn clone(&self) -> Self {
        Self {
            downstream: self.downstream.clone(),
            _p: PhantomData,
        }
    }
}

impl<M, K, V, D> CombineFn<M> for EntriesToMultiValueMap<M, K, V, D>
where
    M: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
    D: CombineFn<V>,
{
    type Acc = Buckets<K, V>;
    type Output = HashMap<K, D::Output>;

    fn create(&self) -> Buckets<K, V> {
        HashMap::new()
    }

    fn add_input(&self, acc: &mut Buckets<K, V>, entries: M) {
        for (k, v) in entries {
            push_value(acc, k, v);
        }
    }

    fn merge(&self, acc: &mut Buckets<K, V>, other: Buckets<K, V>) {
        merge_buckets(acc, other);
    }

    fn finish(&self, acc: Buckets<K, V>) -> Self::Output {
        finish_buckets(&self.downstream, acc)
    }
}
