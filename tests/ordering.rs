use anyhow::Result;
use ironfold::*;
use std::cmp::Ordering;

#[test]
fn natural_puts_none_after_values() -> Result<()> {
    let c = Comparator::<Option<u8>>::natural();
    let mut xs = vec![None, Some(3), None, Some(0)];
    xs.sort_by(|a, b| c.compare(a, b));
    assert_eq!(xs, vec![Some(0), Some(3), None, None]);
    Ok(())
}

#[test]
fn nulls_first_and_last_wrap_any_order() -> Result<()> {
    let desc_nulls_first = Comparator::<i32>::natural().reversed().nulls_first();
    let mut xs = vec![Some(1), None, Some(5)];
    xs.sort_by(|a, b| desc_nulls_first.compare(a, b));
    assert_eq!(xs, vec![None, Some(5), Some(1)]);

    let desc_nulls_last = Comparator::<i32>::natural().reversed().nulls_last();
    xs.sort_by(|a, b| desc_nulls_last.compare(a, b));
    assert_eq!(xs, vec![Some(5), Some(1), None]);
    Ok(())
}

#[test]
fn then_breaks_ties_in_sequence() -> Result<()> {
    let c = Comparator::by_key(|p: &(i32, i32)| p.0)
        .then(Comparator::by_key(|p: &(i32, i32)| p.1).reversed());
    assert_eq!(c.compare(&(1, 9), &(2, 0)), Ordering::Less);
    assert_eq!(c.compare(&(1, 9), &(1, 0)), Ordering::Less);
    assert_eq!(c.compare(&(1, 0), &(1, 0)), Ordering::Equal);

    let by_len_then_alpha = Comparator::by_key(|s: &String| s.len()).then_by_key(|s: &String| s.clone());
    assert_eq!(
        by_len_then_alpha.compare(&"ab".to_string(), &"b".to_string()),
        Ordering::Greater
    );
    Ok(())
}

#[test]
fn nan_sorts_greatest() -> Result<()> {
    let c = Comparator::<f64>::natural();
    assert_eq!(c.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    assert_eq!(c.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    Ok(())
}

#[test]
fn comparators_are_shareable() -> Result<()> {
    let c = Comparator::<i32>::natural().reversed();
    let c2 = c.clone();
    let handle = std::thread::spawn(move || c2.compare(&1, &2));
    assert_eq!(handle.join().ok(), Some(Ordering::Greater));
    assert_eq!(c.compare(&1, &2), Ordering::Greater);
    Ok(())
}
