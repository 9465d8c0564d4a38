//! Integration tests demonstrating the testing utilities.

use anyhow::Result;
use ironfold::testing::*;
use ironfold::*;

#[test]
fn rank_table_assertion_passes_on_match() -> Result<()> {
    let table = paired_ints().into_iter().combine_globally(&rank());
    assert_rank_table(
        &table,
        &[(1, vec![1, 1]), (3, vec![2, 2]), (5, vec![3, 3]), (7, vec![4, 4])],
    );
    Ok(())
}

#[test]
#[should_panic(expected = "Rank table mismatch")]
fn rank_table_assertion_reports_mismatch() {
    let table = vec![1, 2].into_iter().combine_globally(&rank());
    assert_rank_table(&table, &[(1, vec![1]), (3, vec![2])]);
}

#[test]
#[should_panic(expected = "Collection content mismatch")]
fn unordered_assertion_reports_missing() {
    assert_collections_unordered_equal(&[1, 2, 3], &[1, 2, 4]);
}

#[test]
fn reduce_in_parts_matches_whole_for_every_cut() -> Result<()> {
    let input = paired_ints();
    let whole = input.clone().into_iter().combine_globally(&dense_rank());
    for cut in 0..=input.len() {
        let split = reduce_in_parts(&dense_rank(), input.clone(), &[cut]);
        assert_eq!(split, whole, "cut at {cut}");
    }
    Ok(())
}

#[test]
fn fixtures_are_consistent() -> Result<()> {
    let bids = sample_bids();
    assert_eq!(bids.len(), 7);
    assert_all(&bids, |b| b.price >= 1);

    let modes = tied_options().into_iter().combine_globally(&mode().downstream(Count));
    assert_eq!(modes, 3);
    Ok(())
}

#[test]
fn bids_serialize() -> Result<()> {
    let bid = sample_bids().remove(3);
    let json = serde_json::to_string(&bid)?;
    let back: Bid = serde_json::from_str(&json)?;
    assert_eq!(back, bid);
    Ok(())
}
