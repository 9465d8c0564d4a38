use anyhow::Result;
use ironfold::testing::{assert_collections_equal, reduce_in_parts};
use ironfold::*;
use std::collections::HashSet;

#[test]
fn sum_min_max_basic() -> Result<()> {
    let xs: Vec<i32> = (0..100).collect();

    assert_eq!(xs.clone().into_iter().combine_globally(&Sum::<i32>::new()), 4950);
    assert_eq!(xs.clone().into_iter().combine_globally(&Min::<i32>::new()), Some(0));
    assert_eq!(xs.clone().into_iter().combine_globally(&Max::<i32>::new()), Some(99));
    assert_eq!(xs.into_iter().combine_globally(&Count), 100);
    Ok(())
}

#[test]
fn min_max_of_nothing_is_none() -> Result<()> {
    assert_eq!(Vec::<u8>::new().into_iter().combine_globally(&Min::new()), None);
    assert_eq!(Vec::<u8>::new().into_iter().combine_globally(&Max::new()), None);
    Ok(())
}

#[test]
fn merges_across_partitions() -> Result<()> {
    let xs: Vec<i32> = vec![5, -3, 8, 0, 2];
    assert_eq!(reduce_in_parts(&Min::new(), xs.clone(), &[1, 3]), Some(-3));
    assert_eq!(reduce_in_parts(&Max::new(), xs.clone(), &[0, 5]), Some(8));
    assert_eq!(reduce_in_parts(&Sum::<i32>::new(), xs.clone(), &[2, 2]), 12);
    assert_eq!(reduce_in_parts(&Count, xs.clone(), &[4]), 5);
    assert_collections_equal(&reduce_in_parts(&ToVec::new(), xs.clone(), &[2, 4]), &xs);
    Ok(())
}

#[test]
fn to_set_dedups() -> Result<()> {
    let s = vec![1, 2, 2, 3, 1].into_iter().combine_globally(&ToSet::new());
    assert_eq!(s, HashSet::from([1, 2, 3]));
    Ok(())
}

#[test]
fn mapping_feeds_transformed_values() -> Result<()> {
    let lens = vec!["a", "bb", "cc", "ddd"]
        .into_iter()
        .combine_globally(&Mapping::new(|s: &str| s.len(), ToSet::new()));
    assert_eq!(lens, HashSet::from([1, 2, 3]));
    Ok(())
}

#[test]
fn group_by_runs_nested_reducers() -> Result<()> {
    let by_parity = (1..=9).combine_globally(&GroupBy::new(|x: &i32| x % 2 == 0, dense_rank()));
    assert_eq!(by_parity.len(), 2);
    assert_eq!(by_parity[&true].ranks().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(by_parity[&false].get(5), Some(&vec![9]));
    Ok(())
}

#[test]
fn group_by_merges_per_key_accumulators() -> Result<()> {
    let g = GroupBy::new(|s: &&str| s.len(), Count);
    let out = reduce_in_parts(&g, vec!["a", "bb", "c", "dd", "eee"], &[2]);
    assert_eq!(out[&1], 2);
    assert_eq!(out[&2], 2);
    assert_eq!(out[&3], 1);
    Ok(())
}

#[test]
fn fold_group_runs_full_cycle() -> Result<()> {
    let total = fold_group(&Sum::<u64>::new(), [1, 2, 3]);
    assert_eq!(total, 6);
    Ok(())
}
