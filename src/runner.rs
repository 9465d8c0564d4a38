//! Execution driver: apply a reducer to a whole input, sequentially or
//! split across rayon workers.
//!
//! The parallel path cuts the input into contiguous partitions, builds one
//! accumulator per partition on the pool, then merges neighbouring
//! accumulators in rounds of at most `fanout` until one remains. Partition
//! order is preserved throughout, so the right-hand side of every `merge` is
//! always the input that came later.
//!
//! A runner with an explicit thread count builds its rayon pool on first use
//! and reuses it for every later call, clones included.

use crate::error::{ReduceError, Result};
use crate::reducer::{CombineFn, LiftableCombiner, fold_group};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExecMode {
    Sequential,
    Parallel {
        #[serde(default)]
        threads: Option<usize>,
        #[serde(default)]
        partitions: Option<usize>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Runner {
    pub mode: ExecMode,
    pub default_partitions: usize,
    /// Merge at most this many accumulators per round; `None` merges all at once.
    pub fanout: Option<usize>,
    #[serde(skip)]
    pool: PoolCache,
}

/// Lazily built pool, tagged with the thread count it was built for.
///
/// Not part of a runner's configuration: it never serializes and always
/// compares equal.
#[derive(Clone, Default)]
struct PoolCache(OnceLock<(usize, Arc<rayon::ThreadPool>)>);

impl PartialEq for PoolCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for PoolCache {}

impl fmt::Debug for PoolCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some((threads, _)) => write!(f, "PoolCache({threads} threads)"),
            None => f.write_str("PoolCache(unbuilt)"),
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: None,
            },
            default_partitions: 2 * num_cpus::get().max(2),
            fanout: None,
            pool: PoolCache::default(),
        }
    }
}

impl Runner {
    pub fn sequential() -> Self {
        Self {
            mode: ExecMode::Sequential,
            ..Self::default()
        }
    }

    pub fn parallel(threads: Option<usize>, partitions: Option<usize>) -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads,
                partitions,
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = Some(fanout);
        self
    }

    /// Parse a JSON runner configuration; absent fields take their defaults.
    ///
    /// ```
    /// use ironfold::{ExecMode, Runner};
    ///
    /// let r = Runner::from_json(r#"{"mode": {"kind": "parallel", "partitions": 4}, "fanout": 2}"#)?;
    /// assert_eq!(r.mode, ExecMode::Parallel { threads: None, partitions: Some(4) });
    /// assert_eq!(r.fanout, Some(2));
    /// # Ok::<_, ironfold::ReduceError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let runner: Runner = serde_json::from_str(json).inspect_err(|e| {
            warn!(error = %e, "rejected runner configuration");
        })?;
        runner.validate()?;
        Ok(runner)
    }

    pub fn validate(&self) -> Result<()> {
        let problem = if self.default_partitions == 0 {
            Some("default_partitions must be at least 1")
        } else if let ExecMode::Parallel { threads, partitions } = self.mode {
            if threads == Some(0) {
                Some("threads must be at least 1")
            } else if partitions == Some(0) {
                Some("partitions must be at least 1")
            } else {
                None
            }
        } else {
            None
        };
        let problem = problem.or(match self.fanout {
            Some(f) if f < 2 => Some("fanout must be at least 2"),
            _ => None,
        });

        match problem {
            Some(msg) => {
                warn!(runner = ?self, "{msg}");
                Err(ReduceError::invalid_argument(msg))
            }
            None => Ok(()),
        }
    }

    /// Reduce `input` with `comb`, building partition accumulators element by element.
    pub fn reduce<V, C>(&self, comb: &C, input: Vec<V>) -> Result<C::Output>
    where
        V: Send,
        C: CombineFn<V> + Sync,
        C::Acc: Send,
        C::Output: Send,
    {
        self.drive(comb, input, |chunk| {
            let mut acc = comb.create();
            for v in chunk {
                comb.add_input(&mut acc, v);
            }
            acc
        })
    }

    /// Like [`reduce`](Self::reduce), but each partition accumulator is built
    /// in one step with [`LiftableCombiner::build_from_group`].
    pub fn reduce_lifted<V, C>(&self, comb: &C, input: Vec<V>) -> Result<C::Output>
    where
        V: Send,
        C: LiftableCombiner<V> + Sync,
        C::Acc: Send,
        C::Output: Send,
    {
        self.drive(comb, input, |chunk| comb.build_from_group(chunk))
    }

    fn drive<V, C, L>(&self, comb: &C, input: Vec<V>, local: L) -> Result<C::Output>
    where
        V: Send,
        C: CombineFn<V> + Sync,
        C::Acc: Send,
        C::Output: Send,
        L: Fn(Vec<V>) -> C::Acc + Send + Sync,
    {
        self.validate()?;
        let (threads, partitions) = match self.mode {
            ExecMode::Sequential => return Ok(fold_group(comb, input)),
            ExecMode::Parallel {
                threads,
                partitions,
            } => (threads, partitions),
        };

        let parts = partitions
            .unwrap_or(self.default_partitions)
            .max(1)
            .min(input.len().max(1));
        debug!(
            len = input.len(),
            partitions = parts,
            fanout = ?self.fanout,
            "parallel reduce"
        );

        let chunks = split_vec(input, parts);
        let fanout = self.fanout;
        let run = move || {
            let locals: Vec<C::Acc> = chunks.into_par_iter().map(&local).collect();
            comb.finish(merge_ordered::<V, C>(comb, locals, fanout))
        };

        match threads {
            Some(t) => Ok(self.thread_pool(t)?.install(run)),
            None => Ok(run()),
        }
    }

    /// The cached pool for `threads`, building it on first use.
    ///
    /// If `mode` was changed to a different thread count after the cache was
    /// filled, a one-off pool is built for that call.
    fn thread_pool(&self, threads: usize) -> Result<Arc<rayon::ThreadPool>> {
        if let Some((built_for, pool)) = self.pool.0.get() {
            if *built_for == threads {
                return Ok(Arc::clone(pool));
            }
            debug!(cached = built_for, threads, "thread count changed, building uncached pool");
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map(Arc::new)
            .map_err(|e| ReduceError::Execution(e.to_string()))?;
        debug!(threads, "built rayon pool");
        let _ = self.pool.0.set((threads, Arc::clone(&pool)));
        Ok(pool)
    }
}

/// Split into at most `n` contiguous chunks of `ceil(len / n)` elements.
fn split_vec<T>(v: Vec<T>, n: usize) -> Vec<Vec<T>> {
    let len = v.len();
    if n <= 1 || len <= 1 {
        return vec![v];
    }
    chunks_of(v, len.div_ceil(n))
}

fn chunks_of<T>(mut v: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(v.len().div_ceil(size.max(1)));
    while v.len() > size {
        let tail = v.split_off(size);
        out.push(v);
        v = tail;
    }
    out.push(v);
    out
}

fn merge_run<V, C: CombineFn<V>>(comb: &C, run: Vec<C::Acc>) -> C::Acc {
    let mut it = run.into_iter();
    let mut acc = it.next().unwrap_or_else(|| comb.create());
    for other in it {
        comb.merge(&mut acc, other);
    }
    acc
}

/// Merge neighbouring accumulators in rounds of `fanout`, keeping input order.
fn merge_ordered<V, C>(comb: &C, mut accs: Vec<C::Acc>, fanout: Option<usize>) -> C::Acc
where
    C: CombineFn<V> + Sync,
    C::Acc: Send,
{
    let Some(fanout) = fanout else {
        return merge_run::<V, C>(comb, accs);
    };
    let fanout = fanout.max(2);
    while accs.len() > 1 {
        accs = chunks_of(accs, fanout)
            .into_par_iter()
            .map(|run| merge_run::<V, C>(comb, run))
            .collect();
    }
    merge_run::<V, C>(comb, accs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_order_and_sizes() {
        let parts = split_vec((0..10).collect::<Vec<_>>(), 3);
        assert_eq!(parts, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]);
        assert_eq!(split_vec(vec![1], 4), vec![vec![1]]);
        assert_eq!(split_vec(Vec::<i32>::new(), 4), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn thread_pool_is_built_once_per_runner() -> anyhow::Result<()> {
        let r = Runner::parallel(Some(2), Some(4));
        let first = r.thread_pool(2)?;
        for _ in 0..3 {
            assert_eq!(r.reduce(&crate::combiners::Count, (0..100).collect::<Vec<u32>>())?, 100);
        }
        assert!(Arc::ptr_eq(&first, &r.thread_pool(2)?));
        assert_eq!(first.current_num_threads(), 2);

        let cloned = r.clone();
        assert!(Arc::ptr_eq(&first, &cloned.thread_pool(2)?));
        assert_eq!(cloned, r);

        let other = r.thread_pool(3)?;
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(other.current_num_threads(), 3);
        assert!(Arc::ptr_eq(&first, &r.thread_pool(2)?));
        Ok(())
    }

    #[test]
    fn fanout_below_two_is_rejected() {
        let r = Runner::sequential().with_fanout(1);
        assert!(matches!(r.validate(), Err(ReduceError::InvalidArgument(_))));
    }
}
