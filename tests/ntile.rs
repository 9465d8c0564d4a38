use anyhow::Result;
use ironfold::testing::assert_collections_equal;
use ironfold::*;

fn sample() -> Vec<Option<i32>> {
    vec![None, Some(1), Some(1), Some(2), Some(3), None]
}

#[test]
fn two_tiles_nulls_last() -> Result<()> {
    let tiles = sample().into_iter().combine_globally(&ntile(2)?);
    assert_collections_equal(
        &tiles,
        &[vec![Some(1), Some(1), Some(2)], vec![Some(3), None, None]],
    );
    Ok(())
}

#[test]
fn reversed_nulls_last_order_puts_nulls_first() -> Result<()> {
    let cmp = Comparator::<i32>::natural().nulls_last().reversed();
    let tiles = sample().into_iter().combine_globally(&ntile_by(2, cmp)?);
    assert_collections_equal(
        &tiles,
        &[vec![None, None, Some(3)], vec![Some(2), Some(1), Some(1)]],
    );
    Ok(())
}

#[test]
fn zero_tiles_is_rejected() {
    let err = ntile::<i32>(0).unwrap_err();
    assert!(matches!(err, ReduceError::InvalidArgument(_)));
    assert!(NTile::by(0, Comparator::<u8>::natural()).is_err());
}

#[test]
fn single_tile_holds_everything_sorted() -> Result<()> {
    let tiles = vec![3, 1, 2].into_iter().combine_globally(&ntile(1)?);
    assert_collections_equal(&tiles, &[vec![1, 2, 3]]);
    Ok(())
}

#[test]
fn fewer_elements_than_tiles() -> Result<()> {
    let tiles = vec![2, 1].into_iter().combine_globally(&ntile(5)?);
    assert_collections_equal(&tiles, &[vec![1], vec![2]]);
    Ok(())
}

#[test]
fn uneven_split_fills_front_buckets() -> Result<()> {
    let tiles = (1..=7).combine_globally(&ntile(3)?);
    assert_collections_equal(&tiles, &[vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    Ok(())
}

#[test]
fn empty_input_has_no_buckets() -> Result<()> {
    let tiles = Vec::<i32>::new().into_iter().combine_globally(&ntile(3)?);
    assert!(tiles.is_empty());
    Ok(())
}

#[test]
fn downstream_reduces_each_bucket() -> Result<()> {
    let sums = (1..=6).combine_globally(&ntile(3)?.downstream(Sum::<i32>::new()));
    assert_collections_equal(&sums, &[3, 7, 11]);

    let maxes = (1..=6).combine_globally(&ntile(2)?.downstream(Max::<i32>::new()));
    assert_collections_equal(&maxes, &[Some(3), Some(6)]);
    Ok(())
}
