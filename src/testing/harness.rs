//! Drive a reducer through explicit partition splits.

use crate::reducer::CombineFn;

/// Cut `input` at `cuts`, accumulate every piece separately, merge the
/// pieces left to right and finish.
///
/// Cut positions are sorted and clamped to `input.len()`, so any list of
/// indices is accepted; repeated cuts produce empty partitions, which is
/// useful for checking that `merge` tolerates empty accumulators.
///
/// ```
/// use ironfold::*;
/// use ironfold::testing::reduce_in_parts;
///
/// let whole = vec![3, 1, 2].into_iter().combine_globally(&Rank::natural());
/// let split = reduce_in_parts(&Rank::natural(), vec![3, 1, 2], &[1, 1, 2]);
/// assert_eq!(whole, split);
/// ```
pub fn reduce_in_parts<V, C>(comb: &C, input: Vec<V>, cuts: &[usize]) -> C::Output
where
    C: CombineFn<V>,
{
    let mut cuts: Vec<usize> = cuts.iter().map(|&c| c.min(input.len())).collect();
    cuts.sort_unstable();

    let mut parts = Vec::with_capacity(cuts.len() + 1);
    let mut rest = input;
    for &cut in cuts.iter().rev() {
        parts.push(rest.split_off(cut));
    }
    parts.push(rest);
    parts.reverse();

    let mut acc = comb.create();
    for part in parts {
        let mut local = comb.create();
        for v in part {
            comb.add_input(&mut local, v);
        }
        comb.merge(&mut acc, local);
    }
    comb.finish(acc)
}
