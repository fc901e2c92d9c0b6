use std::rc::Rc;

use indexmap::IndexMap;

use crate::{Record, Updater, Value};

use super::{Patch, update_object};

/// One entry of a [`DeepPatch`].
#[derive(Debug, Clone)]
pub enum DeepUpdate {
    /// Apply the updater to the field itself.
    Leaf(Updater<Value>),
    /// Recurse into the nested record stored in the field.
    Nested(DeepPatch),
}

/// A patch that reaches into nested records.
///
/// Nested entries only copy the chain of records from the root to each
/// changed leaf; sibling sub-records keep their identity. A nested entry
/// whose target field does not hold a record leaves that field alone.
///
/// Lists are never recursed into: a list in a deep patch replaces the whole
/// field.
///
/// ```
/// use strata::{record, update_object, DeepPatch, Value};
///
/// let state = record! {
///     "user" => record! { "name" => "Alice", "age" => 30 },
///     "settings" => record! { "theme" => "dark" },
/// };
/// let patch = DeepPatch::new().nested("user", DeepPatch::new().set("age", 31));
/// let next = update_object(&state, &patch.to_patch());
///
/// assert_eq!(next.get_in(&["user", "age"]), Some(&Value::Int(31)));
/// let settings = |r: &strata::Record| r.get("settings").cloned();
/// assert!(strata::Same::same(&settings(&next), &settings(&state)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeepPatch {
    entries: IndexMap<String, DeepUpdate>,
}

impl DeepPatch {
    /// Create an empty deep patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `key` with a literal value, without recursing.
    pub fn set(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(key, DeepUpdate::Leaf(Updater::Replace(value.into())))
    }

    /// Compute the new value of `key` from its current value.
    pub fn update(self, key: impl Into<String>, f: impl Fn(&Value) -> Value + 'static) -> Self {
        self.with(key, DeepUpdate::Leaf(Updater::with(f)))
    }

    /// Apply `patch` to the record stored under `key`.
    pub fn nested(self, key: impl Into<String>, patch: DeepPatch) -> Self {
        self.with(key, DeepUpdate::Nested(patch))
    }

    pub fn with(mut self, key: impl Into<String>, update: DeepUpdate) -> Self {
        self.entries.insert(key.into(), update);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpret a record shaped like the target as a deep patch.
    ///
    /// Record-valued fields become nested patches, everything else
    /// (including lists) becomes a literal replacement.
    pub fn from_record(record: &Record) -> Self {
        record
            .iter()
            .map(|(key, value)| {
                let update = match value {
                    Value::Record(nested) => DeepUpdate::Nested(Self::from_record(nested)),
                    other => DeepUpdate::Leaf(Updater::Replace(other.clone())),
                };
                (key.clone(), update)
            })
            .collect()
    }

    /// Flatten into a [`Patch`] whose nested entries are function updaters.
    pub fn to_patch(&self) -> Patch {
        self.entries
            .iter()
            .map(|(key, update)| {
                let updater = match update {
                    DeepUpdate::Leaf(updater) => updater.clone(),
                    DeepUpdate::Nested(nested) => {
                        let patch = Rc::new(nested.to_patch());
                        Updater::with(move |current: &Value| match current {
                            Value::Record(record) => Value::Record(update_object(record, &patch)),
                            other => other.clone(),
                        })
                    }
                };
                (key.clone(), updater)
            })
            .collect()
    }
}

impl FromIterator<(String, DeepUpdate)> for DeepPatch {
    fn from_iter<I: IntoIterator<Item = (String, DeepUpdate)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Record> for DeepPatch {
    fn from(record: Record) -> Self {
        Self::from_record(&record)
    }
}
