//! Shared, immutable insertion-ordered set.

use std::{fmt, hash::Hash, rc::Rc};

use indexmap::{Equivalent, IndexSet};

use crate::Same;

/// An immutable, reference-counted set that iterates in insertion order.
///
/// Membership uses [`Eq`] + [`Hash`], not [`Same`], so it is meant for
/// value-like elements: equal but distinct `Rc`s are one member. Like every
/// container in this crate,
/// cloning shares the allocation and [`Set::ptr_eq`] is the identity test.
pub struct Set<T> {
    members: Rc<IndexSet<T>>,
}

impl<T> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            members: Rc::new(IndexSet::new()),
        }
    }

    /// Returns true if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.members, &other.members)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.members.iter()
    }

    /// Borrow the underlying set.
    pub fn as_index_set(&self) -> &IndexSet<T> {
        &self.members
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Returns true if `value` is a member.
    pub fn contains<Q: ?Sized + Hash + Equivalent<T>>(&self, value: &Q) -> bool {
        self.members.contains(value)
    }
}

impl<T> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            members: Rc::clone(&self.members),
        }
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<IndexSet<T>> for Set<T> {
    fn from(members: IndexSet<T>) -> Self {
        Self {
            members: Rc::new(members),
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<IndexSet<_>>())
    }
}

impl<T: Hash + Eq + Clone, const N: usize> From<[T; N]> for Set<T> {
    fn from(members: [T; N]) -> Self {
        members.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Order-insensitive structural equality, for assertions.
impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.members == *other.members
    }
}

impl<T> Same for Set<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}
