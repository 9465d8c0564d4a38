//! Basic combiners used as downstream reducers: `ToVec`, `ToSet`, `Count`, `Sum`, `Min`, `Max`

use crate::reducer::{CombineFn, LiftableCombiner, append};
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== ToVec<T> ===================== */

/// Collect elements into a `Vec<T>` in encounter order.
///
/// This is the default downstream for ranking, n-tile, rank-based distinct
/// and the cumulative sums.
#[derive(Clone, Copy, Debug)]
pub struct ToVec<T>(pub PhantomData<fn(T)>);
impl<T> ToVec<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for ToVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CombineFn<T> for ToVec<T> {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn create(&self) -> Vec<T> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn merge(&self, acc: &mut Vec<T>, other: Vec<T>) {
        append(acc, other);
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

impl<T> LiftableCombiner<T> for ToVec<T> {
    fn build_from_group(&self, values: Vec<T>) -> Vec<T> {
        values
    }
}

/* ===================== ToSet<T> ===================== */

/// Collect elements into a `HashSet<T>`.
///
/// Default downstream of [`Mode`](crate::Mode).
#[derive(Clone, Copy, Debug)]
pub struct ToSet<T>(pub PhantomData<fn(T)>);
impl<T> ToSet<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for ToSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> CombineFn<T> for ToSet<T> {
    type Acc = HashSet<T>;
    type Output = HashSet<T>;

    fn create(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn add_input(&self, acc: &mut HashSet<T>, v: T) {
        acc.insert(v);
    }

    fn merge(&self, acc: &mut HashSet<T>, other: HashSet<T>) {
        if acc.is_empty() {
            *acc = other;
        } else {
            acc.extend(other);
        }
    }

    fn finish(&self, acc: HashSet<T>) -> HashSet<T> {
        acc
    }
}

impl<T: Eq + Hash> LiftableCombiner<T> for ToSet<T> {
    fn build_from_group(&self, values: Vec<T>) -> HashSet<T> {
        values.into_iter().collect()
    }
}

/* ===================== Count ===================== */

/// Number of elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V> for Count {
    type Acc = u64;
    type Output = u64;

    fn create(&self) -> u64 {
        0
    }
    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }
    fn merge(&self, acc: &mut u64, other: u64) {
        *acc += other;
    }
    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

impl<V> LiftableCombiner<V> for Count {
    fn build_from_group(&self, values: Vec<V>) -> u64 {
        values.len() as u64
    }
}

/* ===================== Sum<T> ===================== */

/// Plain (non-cumulative) sum.
///
/// Requires `T: Add<Output=T> + Default`.
#[derive(Clone, Copy, Debug)]
pub struct Sum<T>(pub PhantomData<fn(T)>);
impl<T> Sum<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for Sum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CombineFn<T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    type Acc = T;
    type Output = T;

    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn merge(&self, acc: &mut T, other: T) {
        *acc = take(acc) + other;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Min<T> / Max<T> ===================== */

/// Minimum value; `None` for an empty input.
#[derive(Clone, Copy, Debug)]
pub struct Min<T>(pub PhantomData<fn(T)>);
impl<T> Min<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for Min<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> CombineFn<T> for Min<T> {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(b) = other {
            self.add_input(acc, b);
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// Maximum value; `None` for an empty input.
#[derive(Clone, Copy, Debug)]
pub struct Max<T>(pub PhantomData<fn(T)>);
impl<T> Max<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Default for Max<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> CombineFn<T> for Max<T> {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v
                }
            }
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(b) = other {
            self.add_input(acc, b);
        }
    }

    fn finish(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}
