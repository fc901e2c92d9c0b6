//! Record operators.
//!
//! [`partial`] and [`deep_partial`] only touch fields the record already
//! has. The map-style operators below them ([`set_in_record`],
//! [`merge_record`], ...) treat the record as a string-keyed map and may add
//! or drop fields.
//!
//! Everything here returns the input handle when the described change has no
//! effect, except [`map_record_values`] and [`pick_from_record`], which always
//! build a new record.

use indexmap::IndexMap;

use crate::{
    DeepPatch, KeyMatcher, Matcher, Patch, Record, Same, Updater, Value, update::update_object,
};

/// Partially update existing fields.
///
/// Accepts a [`Patch`] or a plain [`Record`] of literal replacements.
///
/// ```
/// use strata::{ops::partial, record};
///
/// let state = record! { "count" => 1, "name" => "a" };
/// assert!(partial(record! { "count" => 1 })(&state).ptr_eq(&state));
/// assert!(!partial(record! { "count" => 2 })(&state).ptr_eq(&state));
/// ```
pub fn partial(patch: impl Into<Patch>) -> impl Fn(&Record) -> Record {
    let patch = patch.into();
    move |record| update_object(record, &patch)
}

/// Partially update fields at any depth.
///
/// Accepts a [`DeepPatch`] or a [`Record`] shaped like the target (see
/// [`DeepPatch::from_record`]).
pub fn deep_partial(patch: impl Into<DeepPatch>) -> impl Fn(&Record) -> Record {
    let patch = patch.into().to_patch();
    move |record| update_object(record, &patch)
}

/// Set `key` to `value`, adding the field if needed.
pub fn set_in_record(
    key: impl Into<String>,
    value: impl Into<Value>,
) -> impl Fn(&Record) -> Record {
    let key = key.into();
    let value = value.into();
    move |record| {
        if record.get(&key).is_some_and(|current| current.same(&value)) {
            return record.clone();
        }
        let mut fields = record.to_fields();
        fields.insert(key.clone(), value.clone());
        Record::from(fields)
    }
}

/// Remove one field by name, or every field whose name matches a predicate.
pub fn delete_from_record(key: impl Into<KeyMatcher<String>>) -> impl Fn(&Record) -> Record {
    let matcher = key.into();
    move |record| match &matcher {
        Matcher::Value(key) => {
            if !record.contains_key(key) {
                return record.clone();
            }
            let mut fields = record.to_fields();
            fields.shift_remove(key);
            Record::from(fields)
        }
        Matcher::Predicate(predicate) => retain_fields(record, |key, _| !predicate(key)),
    }
}

/// Update an existing field; absent fields are left absent.
pub fn update_in_record(
    key: impl Into<String>,
    updater: impl Into<Updater<Value>>,
) -> impl Fn(&Record) -> Record {
    let key = key.into();
    let updater = updater.into();
    move |record| {
        let Some(next) = record.get(&key).and_then(|current| updater.changed(current)) else {
            return record.clone();
        };
        let mut fields = record.to_fields();
        fields.insert(key.clone(), next);
        Record::from(fields)
    }
}

/// Copy every field of `other` into the record.
///
/// Fields already holding a [`Same`] value do not count as changes.
pub fn merge_record(other: Record) -> impl Fn(&Record) -> Record {
    move |record| {
        let mut fields: Option<IndexMap<String, Value>> = None;
        for (key, value) in &other {
            if record.get(key).is_some_and(|current| current.same(value)) {
                continue;
            }
            fields
                .get_or_insert_with(|| record.to_fields())
                .insert(key.clone(), value.clone());
        }
        fields.map_or_else(|| record.clone(), Record::from)
    }
}

/// Keep only fields for which `predicate(value, key)` holds.
pub fn filter_record(
    predicate: impl Fn(&Value, &str) -> bool + 'static,
) -> impl Fn(&Record) -> Record {
    move |record| retain_fields(record, |key, value| predicate(value, key))
}

/// Transform every field value. Always returns a new record.
pub fn map_record_values(
    transform: impl Fn(&Value, &str) -> Value + 'static,
) -> impl Fn(&Record) -> Record {
    move |record| {
        record
            .iter()
            .map(|(key, value)| (key.clone(), transform(value, key)))
            .collect()
    }
}

/// Project the listed fields, in the listed order. Always returns a new record.
pub fn pick_from_record<K: Into<String>>(
    keys: impl IntoIterator<Item = K>,
) -> impl Fn(&Record) -> Record {
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    move |record| {
        keys.iter()
            .filter_map(|key| record.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }
}

/// Drop the listed fields.
pub fn omit_from_record<K: Into<String>>(
    keys: impl IntoIterator<Item = K>,
) -> impl Fn(&Record) -> Record {
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    move |record| retain_fields(record, |key, _| !keys.iter().any(|omitted| omitted == key))
}

/// Keep fields satisfying `keep`, returning the input if all are kept.
fn retain_fields(record: &Record, keep: impl Fn(&String, &Value) -> bool) -> Record {
    if record.iter().all(|(key, value)| keep(key, value)) {
        return record.clone();
    }
    record
        .iter()
        .filter(|(key, value)| keep(*key, *value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
