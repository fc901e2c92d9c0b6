//! Sequence operators.
//!
//! Membership and removal compare elements with [`Same`]. Apart from
//! [`push`], every operator returns the input sequence when it has nothing
//! to do.

use crate::{IndexFinder, Matcher, Same, Seq, Updater};

/// Append `value`. Always returns a new sequence, duplicates included.
pub fn push<T: Clone>(value: T) -> impl Fn(&Seq<T>) -> Seq<T> {
    move |seq| {
        let mut items = Vec::with_capacity(seq.len() + 1);
        items.extend_from_slice(seq);
        items.push(value.clone());
        Seq::from(items)
    }
}

/// Append `value` unless an element is already [`Same`] as it.
///
/// ```
/// use strata::{ops::add_to_array, Seq};
///
/// let seq = Seq::from(vec![1, 2, 3]);
/// assert!(add_to_array(2)(&seq).ptr_eq(&seq));
/// assert_eq!(add_to_array(4)(&seq), [1, 2, 3, 4]);
/// ```
pub fn add_to_array<T: Same + Clone>(value: T) -> impl Fn(&Seq<T>) -> Seq<T> {
    move |seq| {
        if seq.iter().any(|item| item.same(&value)) {
            return seq.clone();
        }
        push(value.clone())(seq)
    }
}

/// Remove every element selected by `matcher`, keeping survivors in order.
pub fn remove_from_array<T: Same + Clone>(
    matcher: impl Into<Matcher<T>>,
) -> impl Fn(&Seq<T>) -> Seq<T> {
    let matcher = matcher.into();
    move |seq| {
        if !seq.iter().any(|item| matcher.matches(item)) {
            return seq.clone();
        }
        seq.iter()
            .filter(|item| !matcher.matches(item))
            .cloned()
            .collect()
    }
}

/// Replace the element at a literal or computed position.
///
/// Out-of-range positions and updates that produce a [`Same`] element leave
/// the sequence untouched. Otherwise only the one slot differs from the input.
///
/// ```
/// use strata::{ops::update_at, Seq, Updater};
///
/// let seq = Seq::from(vec![1, 3]);
/// assert_eq!(update_at(1, Updater::with(|x: &i32| x * 10))(&seq), [1, 30]);
/// assert!(update_at(5, 0)(&seq).ptr_eq(&seq));
/// ```
pub fn update_at<T: Same + Clone>(
    index: impl Into<IndexFinder<T>>,
    updater: impl Into<Updater<T>>,
) -> impl Fn(&Seq<T>) -> Seq<T> {
    let index = index.into();
    let updater = updater.into();
    move |seq| {
        let Some(i) = index.resolve(seq) else {
            return seq.clone();
        };
        let Some(next) = updater.changed(&seq[i]) else {
            return seq.clone();
        };
        let mut items = seq.to_vec();
        items[i] = next;
        Seq::from(items)
    }
}
