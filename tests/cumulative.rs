use anyhow::Result;
use approx::assert_relative_eq;
use ironfold::testing::assert_collections_equal;
use ironfold::*;

#[test]
fn double_totals_are_compensated() -> Result<()> {
    let totals = vec![1.0, 2.1, 3.1]
        .into_iter()
        .combine_globally(&summing_f64(|x: &f64| *x));
    assert_collections_equal(&totals, &[1.0, 3.1, 6.2]);
    Ok(())
}

#[test]
fn kahan_beats_naive_over_many_small_terms() -> Result<()> {
    let input = vec![0.1_f64; 10_000];
    let totals = input.clone().into_iter().combine_globally(&summing_f64(|x: &f64| *x));
    let last = totals.last().copied().unwrap_or_default();
    assert_relative_eq!(last, 1000.0, epsilon = 1e-9);

    let naive: f64 = input.iter().sum();
    assert!((last - 1000.0).abs() <= (naive - 1000.0).abs());
    Ok(())
}

#[test]
fn integer_totals_follow_sorted_order() -> Result<()> {
    let totals = vec![3, 1, 2]
        .into_iter()
        .combine_globally(&summing_i32(|x: &i32| *x));
    assert_collections_equal(&totals, &[1, 3, 6]);

    let longs = vec![5_i64, 10]
        .into_iter()
        .combine_globally(&summing_i64(|x: &i64| *x * 1_000_000_000_000));
    assert_collections_equal(&longs, &[5_000_000_000_000, 15_000_000_000_000]);
    Ok(())
}

#[test]
fn integer_overflow_wraps() -> Result<()> {
    let totals = vec![i32::MAX, 1]
        .into_iter()
        .combine_globally(&summing_i32(|x: &i32| *x));
    assert_collections_equal(&totals, &[1, i32::MIN]);
    Ok(())
}

#[test]
fn empty_input_gives_no_totals() -> Result<()> {
    let totals = Vec::<i32>::new()
        .into_iter()
        .combine_globally(&summing_i32(|x: &i32| *x));
    assert!(totals.is_empty());
    Ok(())
}

#[test]
fn comparator_orders_extracted_values() -> Result<()> {
    let items = vec![("b", 10), ("a", 1), ("c", 100)];
    let totals = items.into_iter().combine_globally(&CumulativeSum::by(
        Comparator::by_key(|p: &(&'static str, i32)| p.0).reversed(),
        |p: &(&'static str, i32)| p.1,
    ));
    assert_collections_equal(&totals, &[100, 110, 111]);
    Ok(())
}

#[test]
fn downstream_sees_running_totals() -> Result<()> {
    let top = vec![1.5_f32, 2.5, 1.0]
        .into_iter()
        .combine_globally(&CumulativeSum::new(|x: &f32| *x).downstream(Count));
    assert_eq!(top, 3);
    Ok(())
}

#[cfg(feature = "decimal")]
fn decimals(digits: &[&str]) -> Result<Vec<bigdecimal::BigDecimal>> {
    use std::str::FromStr;

    Ok(digits
        .iter()
        .map(|s| bigdecimal::BigDecimal::from_str(s))
        .collect::<std::result::Result<_, _>>()?)
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_totals_are_exact() -> Result<()> {
    use bigdecimal::BigDecimal;

    let totals = decimals(&["0.1", "0.2", "0.3"])?
        .into_iter()
        .combine_globally(&summing_decimal(|d: &BigDecimal| d.clone()));
    assert_collections_equal(&totals, &decimals(&["0.1", "0.3", "0.6"])?);
    Ok(())
}

#[cfg(feature = "decimal")]
#[test]
fn large_and_fractional_decimals_keep_every_digit() -> Result<()> {
    use bigdecimal::BigDecimal;

    let totals = decimals(&["1e28", "0.5"])?
        .into_iter()
        .combine_globally(&summing_decimal(|d: &BigDecimal| d.clone()));
    assert_collections_equal(
        &totals,
        &decimals(&["0.5", "10000000000000000000000000000.5"])?,
    );
    let whole = decimals(&["1e28"])?.remove(0);
    assert_eq!(totals[1].clone() - whole, decimals(&["0.5"])?.remove(0));
    Ok(())
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_totals_exceed_fixed_width_range() -> Result<()> {
    use bigdecimal::BigDecimal;

    let input = decimals(&[
        "79228162514264337593543950335",
        "1",
        "0.000000000000000000000000000001",
    ])?;
    let totals = input
        .into_iter()
        .combine_globally(&summing_decimal(|d: &BigDecimal| d.clone()));
    assert_collections_equal(
        &totals,
        &decimals(&[
            "0.000000000000000000000000000001",
            "1.000000000000000000000000000001",
            "79228162514264337593543950336.000000000000000000000000000001",
        ])?,
    );
    assert!(totals[2] > decimals(&["79228162514264337593543950336"])?.remove(0));
    Ok(())
}
