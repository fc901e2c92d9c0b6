//! Shared, immutable insertion-ordered key-value map.

use std::{fmt, hash::Hash, rc::Rc};

use indexmap::{Equivalent, IndexMap};

use crate::{Record, Same, Value};

/// An immutable, reference-counted map that iterates in insertion order.
///
/// Keys use [`Eq`] + [`Hash`]; values are compared with [`Same`] by the
/// operators in [`crate::ops::map`].
pub struct Map<K, V> {
    entries: Rc<IndexMap<K, V>>,
}

impl<K, V> Map<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(IndexMap::new()),
        }
    }

    /// Returns true if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Borrow the underlying map.
    pub fn as_index_map(&self) -> &IndexMap<K, V> {
        &self.entries
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Get the value stored under `key`.
    pub fn get<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q: ?Sized + Hash + Equivalent<K>>(&self, key: &Q) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<IndexMap<K, V>> for Map<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self {
            entries: Rc::new(entries),
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// A plain record can be used wherever a string-keyed map of values is expected.
impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Order-insensitive structural equality, for assertions.
impl<K: Hash + Eq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.entries == *other.entries
    }
}

impl<K, V> Same for Map<K, V> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
