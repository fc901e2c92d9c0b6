//! Map operators.
//!
//! Keys are matched with [`Eq`], values compared with [`Same`]. All
//! operators except [`map_values`] return the input map when nothing
//! changes. `map_values` always allocates: it never compares transformed
//! values against the originals, even for an identity transform.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::{KeyMatcher, Map, Matcher, Same, Updater};

/// Insert or replace one entry.
///
/// ```
/// use strata::{ops::set_in_map, Map};
///
/// let map: Map<&str, i32> = Map::from([("a", 1), ("b", 2)]);
/// assert!(set_in_map("a", 1)(&map).ptr_eq(&map));
/// assert_eq!(set_in_map("c", 3)(&map).len(), 3);
/// ```
pub fn set_in_map<K, V>(key: K, value: V) -> impl Fn(&Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Same + Clone,
{
    move |map| {
        if map.get(&key).is_some_and(|current| current.same(&value)) {
            return map.clone();
        }
        let mut entries = IndexMap::clone(map.as_index_map());
        entries.insert(key.clone(), value.clone());
        Map::from(entries)
    }
}

/// Remove one key, or every key the predicate selects.
pub fn delete_from_map<K, V>(key: impl Into<KeyMatcher<K>>) -> impl Fn(&Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let matcher = key.into();
    move |map| match &matcher {
        Matcher::Value(key) => {
            if !map.contains_key(key) {
                return map.clone();
            }
            let mut entries = IndexMap::clone(map.as_index_map());
            entries.shift_remove(key);
            Map::from(entries)
        }
        Matcher::Predicate(predicate) => retain_entries(map, |key, _| !predicate(key)),
    }
}

/// Update the value of an existing key; absent keys stay absent.
pub fn update_in_map<K, V>(
    key: K,
    updater: impl Into<Updater<V>>,
) -> impl Fn(&Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Same + Clone,
{
    let updater = updater.into();
    move |map| {
        let Some(next) = map.get(&key).and_then(|current| updater.changed(current)) else {
            return map.clone();
        };
        let mut entries = IndexMap::clone(map.as_index_map());
        entries.insert(key.clone(), next);
        Map::from(entries)
    }
}

/// Apply every entry of `other`.
///
/// `other` may be another map or, for `Map<String, Value>`, a plain
/// [`crate::Record`]. Entries that already hold a [`Same`] value are not
/// changes; if none differ the input map is returned.
pub fn merge_map<K, V>(other: impl Into<Map<K, V>>) -> impl Fn(&Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Same + Clone,
{
    let other = other.into();
    move |map| {
        let mut entries: Option<IndexMap<K, V>> = None;
        for (key, value) in &other {
            if map.get(key).is_some_and(|current| current.same(value)) {
                continue;
            }
            entries
                .get_or_insert_with(|| IndexMap::clone(map.as_index_map()))
                .insert(key.clone(), value.clone());
        }
        entries.map_or_else(|| map.clone(), Map::from)
    }
}

/// Keep only entries for which `predicate(value, key)` holds.
pub fn filter_map<K, V>(
    predicate: impl Fn(&V, &K) -> bool + 'static,
) -> impl Fn(&Map<K, V>) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    move |map| retain_entries(map, |key, value| predicate(value, key))
}

/// Transform every value. Always returns a new map.
pub fn map_values<K, V, U>(
    transform: impl Fn(&V, &K) -> U + 'static,
) -> impl Fn(&Map<K, V>) -> Map<K, U>
where
    K: Hash + Eq + Clone,
{
    move |map| {
        map.iter()
            .map(|(key, value)| (key.clone(), transform(value, key)))
            .collect()
    }
}

fn retain_entries<K, V>(map: &Map<K, V>, keep: impl Fn(&K, &V) -> bool) -> Map<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    if map.iter().all(|(key, value)| keep(key, value)) {
        return map.clone();
    }
    map.iter()
        .filter(|(key, value)| keep(*key, *value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
