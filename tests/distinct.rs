use anyhow::Result;
use ironfold::testing::{assert_collections_equal, assert_collections_unordered_equal};
use ironfold::*;

#[test]
fn rank_distinct_keeps_first_key_per_tie() -> Result<()> {
    let out = vec![-1, 2, 2, 1, 1]
        .into_iter()
        .combine_globally(&rank_distinct_by(|x: i32| x.abs()));
    assert_collections_equal(&out, &[1, 2]);
    Ok(())
}

#[test]
fn rank_distinct_natural_sorts_and_dedups() -> Result<()> {
    let out = vec![Some(3), None, Some(1), Some(3), None]
        .into_iter()
        .combine_globally(&rank_distinct());
    assert_collections_equal(&out, &[Some(1), Some(3), None]);
    Ok(())
}

#[test]
fn rank_distinct_uses_comparator_equality() -> Result<()> {
    // Case-insensitive order: "B" and "b" tie, the first in sorted order survives.
    let out = vec!["b", "a", "B"]
        .into_iter()
        .combine_globally(&RankDistinct::by(Comparator::by_key(|s: &&str| s.to_lowercase())));
    assert_collections_equal(&out, &["a", "b"]);
    Ok(())
}

#[test]
fn rank_distinct_feeds_downstream() -> Result<()> {
    let n = vec![5, 5, 4, 3, 3, 3]
        .into_iter()
        .combine_globally(&rank_distinct().downstream(Count));
    assert_eq!(n, 3);
    Ok(())
}

#[test]
fn rank_distinct_key_with_explicit_order() -> Result<()> {
    let out = vec!["pear", "fig", "plum", "apple"]
        .into_iter()
        .combine_globally(&RankDistinct::by_key_with(
            |s: &str| s.len(),
            Comparator::<usize>::natural().reversed(),
        ));
    assert_collections_equal(&out, &[5, 4, 3]);
    Ok(())
}

#[test]
fn distinct_by_last_write_wins() -> Result<()> {
    let out = vec![(1, 1), (1, 2)]
        .into_iter()
        .combine_globally(&distinct_by(|p: &(i32, i32)| p.0));
    assert_collections_equal(&out, &[(1, 2)]);
    Ok(())
}

#[test]
fn distinct_by_keeps_one_per_key() -> Result<()> {
    let out = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)]
        .into_iter()
        .combine_globally(&distinct_by(|p: &(&'static str, i32)| p.0));
    assert_collections_unordered_equal(&out, &[("a", 3), ("b", 5), ("c", 4)]);
    Ok(())
}

#[test]
fn distinct_by_merge_prefers_right_side() -> Result<()> {
    let d = distinct_by(|p: &(i32, &str)| p.0);
    let mut left = d.create();
    d.add_input(&mut left, (1, "left"));
    d.add_input(&mut left, (2, "only-left"));
    let mut right = d.create();
    d.add_input(&mut right, (1, "right"));
    d.merge(&mut left, right);

    let out = d.finish(left);
    assert_collections_unordered_equal(&out, &[(1, "right"), (2, "only-left")]);
    Ok(())
}

#[test]
fn policies_disagree_on_shared_keys() -> Result<()> {
    let input = vec![(1, 'x'), (1, 'y'), (0, 'z')];

    let ranked = input
        .clone()
        .into_iter()
        .combine_globally(&RankDistinct::by(Comparator::by_key(|p: &(i32, char)| p.0)));
    let last_seen = input
        .into_iter()
        .combine_globally(&distinct_by(|p: &(i32, char)| p.0));

    assert_collections_equal(&ranked, &[(0, 'z'), (1, 'x')]);
    assert_collections_unordered_equal(&last_seen, &[(0, 'z'), (1, 'y')]);
    Ok(())
}

#[test]
fn identity_distinct_with_set_downstream() -> Result<()> {
    let out = vec![3, 1, 3]
        .into_iter()
        .combine_globally(&DistinctBy::identity().downstream(ToSet::new()));
    assert_eq!(out.len(), 2);
    assert!(out.contains(&1) && out.contains(&3));
    Ok(())
}

#[test]
fn empty_input_is_empty() -> Result<()> {
    let a = Vec::<i32>::new().into_iter().combine_globally(&rank_distinct());
    let b = Vec::<i32>::new()
        .into_iter()
        .combine_globally(&distinct_by(|x: &i32| *x));
    assert!(a.is_empty() && b.is_empty());
    Ok(())
}
