//! Orderings used by the sorting reducers.
//!
//! - [`Comparator<T>`] -- a cloneable, thread-safe total order over `T`.
//! - [`Natural`] -- the default order: ascending, with `None` sorted **after**
//!   every `Some` and floats ordered totally (NaN sorts greatest).
//!
//! Rust's own `Ord for Option<T>` puts `None` first, so reducers never fall
//! back to `Ord` directly; they default to [`Comparator::natural`].
//!
//! # Examples
//! ```
//! use ironfold::Comparator;
//! use std::cmp::Ordering;
//!
//! let c = Comparator::<Option<i32>>::natural();
//! assert_eq!(c.compare(&None, &Some(1)), Ordering::Greater);
//!
//! let by_len = Comparator::by_key(|s: &String| s.len()).then(Comparator::natural());
//! assert_eq!(by_len.compare(&"b".to_string(), &"aa".to_string()), Ordering::Less);
//! ```

use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Natural ascending order, nulls (`None`) last.
pub trait Natural {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! natural_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Natural for $t {
                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

natural_via_ord!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, (), str, String,
    OrderedFloat<f32>, OrderedFloat<f64>, NotNan<f32>, NotNan<f64>,
);

#[cfg(feature = "decimal")]
natural_via_ord!(bigdecimal::BigDecimal);

impl Natural for f32 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl Natural for f64 {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl<T: Natural> Natural for Option<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.natural_cmp(b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
        }
    }
}

impl<T: Natural + ?Sized> Natural for &T {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(*other)
    }
}

impl<T: Natural + ?Sized> Natural for Box<T> {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        (**self).natural_cmp(other)
    }
}

impl<T: Natural> Natural for [T] {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            match a.natural_cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.len().cmp(&other.len())
    }
}

impl<T: Natural> Natural for Vec<T> {
    #[inline]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().natural_cmp(other.as_slice())
    }
}

macro_rules! natural_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Natural),+> Natural for ($($name,)+) {
            fn natural_cmp(&self, other: &Self) -> Ordering {
                Ordering::Equal
                    $(.then_with(|| self.$idx.natural_cmp(&other.$idx)))+
            }
        }
    };
}

natural_tuple!(A.0, B.1);
natural_tuple!(A.0, B.1, C.2);

type CmpFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A total order over `T`, shareable across threads and cheap to clone.
///
/// Must be reflexive, transitive and total; reducers use `Ordering::Equal`
/// as their tie test.
pub struct Comparator<T: ?Sized> {
    cmp: Arc<CmpFn<T>>,
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Arc::clone(&self.cmp),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator")
    }
}

impl<T: ?Sized> Comparator<T> {
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}

impl<T: ?Sized + 'static> Comparator<T> {
    /// Wrap an arbitrary comparison function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self { cmp: Arc::new(f) }
    }

    /// Order by a derived key using the key's natural order.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Natural,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| key(a).natural_cmp(&key(b)))
    }

    /// Order by a derived key using an explicit key comparator.
    pub fn by_key_with<K, F>(key: F, key_order: Comparator<K>) -> Self
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| key_order.compare(&key(a), &key(b)))
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(move |a, b| self.compare(b, a))
    }

    /// Lexicographic composition: break ties of `self` with `next`.
    #[must_use]
    pub fn then(self, next: Comparator<T>) -> Self {
        Self::new(move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)))
    }

    /// Break ties of `self` by a derived key in natural order.
    #[must_use]
    pub fn then_by_key<K, F>(self, key: F) -> Self
    where
        K: Natural,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then(Comparator::by_key(key))
    }
}

impl<T: 'static> Comparator<T> {
    /// Lift this order to `Option<T>`, placing `None` after every value.
    pub fn nulls_last(self) -> Comparator<Option<T>> {
        Comparator::new(move |a: &Option<T>, b: &Option<T>| match (a, b) {
            (Some(x), Some(y)) => self.compare(x, y),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
        })
    }

    /// Lift this order to `Option<T>`, placing `None` before every value.
    pub fn nulls_first(self) -> Comparator<Option<T>> {
        Comparator::new(move |a: &Option<T>, b: &Option<T>| match (a, b) {
            (Some(x), Some(y)) => self.compare(x, y),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        })
    }
}

impl<T: Natural + ?Sized + 'static> Comparator<T> {
    /// Natural ascending order, nulls last.
    pub fn natural() -> Self {
        Self::new(|a: &T, b: &T| a.natural_cmp(b))
    }
}

impl<T: Natural + ?Sized + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_sort_nulls_last() {
        let mut v = vec![None, Some(3), Some(1), None, Some(2)];
        let c = Comparator::<Option<i32>>::natural();
        v.sort_by(|a, b| c.compare(a, b));
        assert_eq!(v, vec![Some(1), Some(2), Some(3), None, None]);
    }

    #[test]
    fn floats_are_totally_ordered() {
        let c = Comparator::<f64>::natural();
        assert_eq!(c.compare(&1.0, &2.5), Ordering::Less);
        assert_eq!(c.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
        assert_eq!(c.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    }

    #[test]
    fn nulls_first_reverses_null_placement_only() {
        let c = Comparator::<i32>::natural().reversed().nulls_first();
        let mut v = vec![Some(1), None, Some(3)];
        v.sort_by(|a, b| c.compare(a, b));
        assert_eq!(v, vec![None, Some(3), Some(1)]);
    }

    #[test]
    fn tuples_and_slices_are_lexicographic() {
        assert_eq!((1, "b").natural_cmp(&(1, "a")), Ordering::Greater);
        assert_eq!([1, 2][..].natural_cmp(&[1, 2, 0][..]), Ordering::Less);
    }
}
