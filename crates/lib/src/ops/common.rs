//! Container-generic membership operators.
//!
//! [`add`] and [`remove`] work on any container implementing
//! [`Membership`]. The container kind is chosen by the caller's static type,
//! so the same `add(x)` is an "append if absent" on a [`Seq`] and an insert
//! on a [`Set`].

use std::hash::Hash;

use crate::{Matcher, Same, Seq, Set};

use super::{seq, set};

/// Containers that support membership-style updates.
///
/// Both update methods must return a clone of `self` when they have nothing
/// to change.
///
/// Membership is container-specific. [`Seq`] tests members with [`Same`], so
/// two distinct `Rc`s holding equal values are different members. [`Set`]
/// tests members with [`Eq`] + [`Hash`], so the same pair counts as one
/// member. Use `Set` for value-like elements.
pub trait Membership<T>: Clone {
    /// Returns true if `value` is a member.
    fn is_member(&self, value: &T) -> bool;

    /// Container with `value` added, or `self` if already a member.
    fn added(&self, value: T) -> Self;

    /// Container without the selected members, or `self` if none match.
    fn removed(&self, matcher: &Matcher<T>) -> Self;
}

impl<T: Same + Clone> Membership<T> for Seq<T> {
    fn is_member(&self, value: &T) -> bool {
        self.iter().any(|item| item.same(value))
    }

    fn added(&self, value: T) -> Self {
        seq::add_to_array(value)(self)
    }

    fn removed(&self, matcher: &Matcher<T>) -> Self {
        seq::remove_from_array(matcher.clone())(self)
    }
}

impl<T: Hash + Eq + Clone> Membership<T> for Set<T> {
    fn is_member(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn added(&self, value: T) -> Self {
        set::add_to_set(value)(self)
    }

    fn removed(&self, matcher: &Matcher<T>) -> Self {
        set::remove_from_set(matcher.clone())(self)
    }
}

/// Add `value` to a sequence or set.
///
/// ```
/// use strata::{ops::add, Seq, Set};
///
/// let seq = Seq::from(vec![1, 2]);
/// let set: Set<i32> = Set::from([1, 2]);
/// assert_eq!(add(3)(&seq), [1, 2, 3]);
/// assert!(add(2)(&set).ptr_eq(&set));
/// ```
pub fn add<T: Clone, C: Membership<T>>(value: T) -> impl Fn(&C) -> C {
    move |container| container.added(value.clone())
}

/// Remove matching members from a sequence or set.
pub fn remove<T, C: Membership<T>>(matcher: impl Into<Matcher<T>>) -> impl Fn(&C) -> C {
    let matcher = matcher.into();
    move |container| container.removed(&matcher)
}
