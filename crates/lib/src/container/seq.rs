//! Shared, immutable ordered sequence.

use std::{fmt, ops::Deref, rc::Rc};

use crate::Same;

/// An immutable, reference-counted ordered sequence.
///
/// Cloning a `Seq` is cheap and yields the *same* sequence: [`Seq::ptr_eq`]
/// holds between the clone and the original. Operators in
/// [`crate::ops::seq`] return such a clone when they have nothing to change,
/// and a freshly allocated `Seq` otherwise.
///
/// # Examples
///
/// ```
/// use strata::Seq;
///
/// let seq: Seq<i64> = Seq::from(vec![1, 2, 3]);
/// let alias = seq.clone();
/// assert!(seq.ptr_eq(&alias));
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq[1], 2);
/// ```
pub struct Seq<T> {
    items: Rc<Vec<T>>,
}

impl<T> Seq<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            items: Rc::new(Vec::new()),
        }
    }

    /// Returns true if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Seq<T> {
    /// Copy the elements into an owned vector.
    pub fn to_vec(&self) -> Vec<T> {
        Vec::clone(&self.items)
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Seq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(items),
        }
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Structural equality, for assertions. Use [`Same`] for identity.
impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Seq<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.items == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Seq<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items.as_slice() == other
    }
}

impl<T> Same for Seq<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
