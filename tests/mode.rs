use anyhow::Result;
use ironfold::testing::{assert_collections_unordered_equal, tied_options};
use ironfold::*;
use std::collections::HashSet;

#[test]
fn three_way_tie_includes_none() -> Result<()> {
    let modes = tied_options().into_iter().combine_globally(&mode());
    assert_eq!(modes, HashSet::from([Some(1), Some(2), None]));
    Ok(())
}

#[test]
fn single_winner() -> Result<()> {
    let modes = vec!["a", "b", "a", "c", "a"]
        .into_iter()
        .combine_globally(&mode());
    assert_eq!(modes, HashSet::from(["a"]));
    Ok(())
}

#[test]
fn empty_input_has_no_mode() -> Result<()> {
    let modes = Vec::<u8>::new().into_iter().combine_globally(&mode());
    assert!(modes.is_empty());
    Ok(())
}

#[test]
fn mode_of_derived_key() -> Result<()> {
    let modes = vec!["apple", "avocado", "banana", "blueberry", "cherry"]
        .into_iter()
        .combine_globally(&mode_by(|s: &str| s.chars().next()));
    assert_eq!(modes, HashSet::from([Some('a'), Some('b')]));
    Ok(())
}

#[test]
fn downstream_receives_winning_keys() -> Result<()> {
    let modes = tied_options()
        .into_iter()
        .combine_globally(&mode().downstream(ToVec::new()));
    assert_collections_unordered_equal(&modes, &[Some(1), Some(2), None]);

    let count = tied_options()
        .into_iter()
        .combine_globally(&mode().downstream(Count));
    assert_eq!(count, 3);
    Ok(())
}

#[test]
fn merged_counts_decide_the_winner() -> Result<()> {
    // Each half alone has a different mode; together 2 wins.
    let m = mode();
    let mut left = m.create();
    for v in [1, 1, 2] {
        m.add_input(&mut left, v);
    }
    let mut right = m.create();
    for v in [3, 3, 2, 2] {
        m.add_input(&mut right, v);
    }
    m.merge(&mut left, right);
    assert_eq!(m.finish(left), HashSet::from([2]));
    Ok(())
}
