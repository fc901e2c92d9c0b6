//! Identity-style equality used by every operator and selector.
//!
//! [`Same`] is the equality the engine uses to decide whether an update
//! changed anything. It is deliberately narrower than [`PartialEq`]:
//!
//! - scalars compare by value,
//! - floats compare by bit pattern, so `NaN` is the same as `NaN` while
//!   `0.0` and `-0.0` are not,
//! - `Rc`/`Arc`-backed containers compare by pointer, never by contents.
//!
//! The shallow helpers [`is_same_slice`], [`is_same_seq`] and
//! [`is_same_record`] check identity first and then compare one level of
//! elements or fields with [`Same`].

use std::{ptr, rc::Rc, sync::Arc};

use crate::{Record, Seq};

/// Cheap identity-first comparison.
///
/// # Examples
///
/// ```
/// use strata::Same;
/// use std::rc::Rc;
///
/// assert!(f64::NAN.same(&f64::NAN));
/// assert!(!0.0_f64.same(&-0.0));
///
/// let a = Rc::new(vec![1, 2]);
/// let b = Rc::new(vec![1, 2]);
/// assert!(a.same(&a.clone()));
/// assert!(!a.same(&b));
/// ```
pub trait Same {
    /// Returns true if `self` and `other` are indistinguishable for update purposes.
    fn same(&self, other: &Self) -> bool;
}

macro_rules! impl_same_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Same for $t {
                #[inline]
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_same_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    std::time::Duration,
);

impl Same for f32 {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Same for f64 {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Same for &str {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        *self == *other
    }
}

impl<T: ?Sized> Same for Rc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Same for Arc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Same> Same for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: Same, B: Same> Same for (A, B) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1)
    }
}

/// Shallow comparison of two slices.
///
/// Identical slices (same address and length) are equal without looking at
/// the elements; otherwise lengths must match and every element pair must be
/// [`Same`].
pub fn is_same_slice<T: Same>(a: &[T], b: &[T]) -> bool {
    if ptr::eq(a, b) {
        return true;
    }
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same(y))
}

/// Shallow comparison of two optional sequences.
///
/// `None` only equals `None`.
pub fn is_same_seq<T: Same>(a: Option<&Seq<T>>, b: Option<&Seq<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.ptr_eq(b) || is_same_slice(a.as_slice(), b.as_slice()),
        (None, None) => true,
        _ => false,
    }
}

/// Shallow comparison of two optional records.
///
/// Records are equal when they are the same allocation, or when they hold the
/// same number of fields and every field of `a` is [`Same`] as the field of
/// the same name in `b`. Field order is not significant.
pub fn is_same_record(a: Option<&Record>, b: Option<&Record>) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => return true,
        _ => return false,
    };
    if a.ptr_eq(b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(key, value)| b.get(key).is_some_and(|other| value.same(other)))
}
