//! Cumulative-sum and multi-value-map entry points.

use crate::cumulative::CumulativeSum;
use crate::multimap::{EntriesToMultiValueMap, MultiValueMap};
use crate::order::Natural;

pub fn summing_i32<T, F>(mapper: F) -> CumulativeSum<T, i32>
where
    T: Natural + 'static,
    F: Fn(&T) -> i32 + Send + Sync + 'static,
{
    CumulativeSum::new(mapper)
}

pub fn summing_i64<T, F>(mapper: F) -> CumulativeSum<T, i64>
where
    T: Natural + 'static,
    F: Fn(&T) -> i64 + Send + Sync + 'static,
{
    CumulativeSum::new(mapper)
}

/// Kahan-compensated running totals.
pub fn summing_f64<T, F>(mapper: F) -> CumulativeSum<T, f64>
where
    T: Natural + 'static,
    F: Fn(&T) -> f64 + Send + Sync + 'static,
{
    CumulativeSum::new(mapper)
}

/// Exact running totals with no precision or range limit.
#[cfg(feature = "decimal")]
pub fn summing_decimal<T, F>(mapper: F) -> CumulativeSum<T, bigdecimal::BigDecimal>
where
    T: Natural + 'static,
    F: Fn(&T) -> bigdecimal::BigDecimal + Send + Sync + 'static,
{
    CumulativeSum::new(mapper)
}

/// Collect `(key, value)` pairs into `key -> [values]`.
pub fn to_multi_value_map<K: 'static, V: 'static>() -> MultiValueMap<(K, V), K, V> {
    MultiValueMap::pairs()
}

/// Collect entry collections (maps, pair vectors, single-entry arrays) into
/// `key -> [values]`.
pub fn entries_to_multi_value_map<M, K, V>() -> EntriesToMultiValueMap<M, K, V> {
    EntriesToMultiValueMap::new()
}
