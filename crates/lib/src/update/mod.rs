//! The update-object primitive.
//!
//! [`update_object`] is the single place where record fields get replaced.
//! Every record operator, including [`crate::ops::record::deep_partial`],
//! ends up here. Its contract:
//!
//! - fields named in the patch but absent from the record are skipped; a
//!   patch never introduces new fields (use
//!   [`crate::ops::record::set_in_record`] for that)
//! - a field counts as changed only when the candidate value is not
//!   [`Same`] as the current one
//! - when nothing changed the input handle is returned, otherwise a shallow
//!   copy whose untouched fields share their values with the input
//!
//! Dropping unknown fields is the permissive default. [`try_update_object`]
//! and [`Patch::validate`] reject them instead.

mod deep;
pub mod errors;

pub use deep::{DeepPatch, DeepUpdate};
pub use errors::UpdateError;

use indexmap::IndexMap;

use crate::{Record, Result, Same, Updater, Value};

/// Field updaters keyed by field name.
///
/// # Examples
///
/// ```
/// use strata::{record, update_object, Patch, Value};
///
/// let state = record! { "count" => 1, "label" => "clicks" };
/// let patch = Patch::new()
///     .update("count", |v| Value::Int(v.as_int().unwrap_or(0) + 1))
///     .set("label", "clicks");
///
/// let next = update_object(&state, &patch);
/// assert_eq!(next.get("count"), Some(&Value::Int(2)));
/// assert!(!next.ptr_eq(&state));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Patch {
    entries: IndexMap<String, Updater<Value>>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `key` with a literal value.
    pub fn set(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(key, Updater::Replace(value.into()))
    }

    /// Compute the new value of `key` from its current value.
    pub fn update(self, key: impl Into<String>, f: impl Fn(&Value) -> Value + 'static) -> Self {
        self.with(key, Updater::with(f))
    }

    /// Add an arbitrary updater for `key`, replacing any earlier one.
    pub fn with(mut self, key: impl Into<String>, updater: Updater<Value>) -> Self {
        self.entries.insert(key.into(), updater);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Updater<Value>> {
        self.entries.get(key)
    }

    /// Iterate updaters in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Updater<Value>> {
        self.entries.iter()
    }

    /// Check the patch against `record` without applying it.
    ///
    /// Fails on the first field that `record` does not have, and on literal
    /// replacements whose kind differs from a non-null current value.
    /// Integers and floats are interchangeable; function updaters are not
    /// checked because their result is unknown until applied.
    pub fn validate(&self, record: &Record) -> std::result::Result<(), UpdateError> {
        for (key, updater) in &self.entries {
            let current = record.get(key).ok_or_else(|| UpdateError::UnknownField {
                field: key.clone(),
            })?;
            if let Updater::Replace(candidate) = updater
                && !kinds_compatible(current, candidate)
            {
                return Err(UpdateError::TypeMismatch {
                    field: key.clone(),
                    expected: current.type_name().to_string(),
                    actual: candidate.type_name().to_string(),
                });
            }
        }
        Ok(())
    }
}

fn kinds_compatible(current: &Value, candidate: &Value) -> bool {
    let numeric = |v: &Value| matches!(v, Value::Int(_) | Value::Float(_));
    current.is_null()
        || candidate.is_null()
        || current.same_kind(candidate)
        || (numeric(current) && numeric(candidate))
}

impl FromIterator<(String, Updater<Value>)> for Patch {
    fn from_iter<I: IntoIterator<Item = (String, Updater<Value>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Every field of the record becomes a literal replacement.
impl From<Record> for Patch {
    fn from(record: Record) -> Self {
        Self::from(&record)
    }
}

impl From<&Record> for Patch {
    fn from(record: &Record) -> Self {
        record
            .iter()
            .map(|(key, value)| (key.clone(), Updater::Replace(value.clone())))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = (&'a String, &'a Updater<Value>);
    type IntoIter = indexmap::map::Iter<'a, String, Updater<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Apply `patch` to `current`, preserving identity when nothing changes.
///
/// The shallow copy is made lazily on the first changed field, so a no-op
/// patch costs one candidate evaluation per named field and no allocation.
pub fn update_object(current: &Record, patch: &Patch) -> Record {
    let mut fields: Option<IndexMap<String, Value>> = None;
    for (key, updater) in patch {
        let Some(old) = current.get(key) else {
            continue;
        };
        if let Some(next) = updater.changed(old) {
            fields
                .get_or_insert_with(|| current.to_fields())
                .insert(key.clone(), next);
        }
    }
    match fields {
        Some(fields) => Record::from(fields),
        None => current.clone(),
    }
}

/// Validate `patch` against `current`, then apply it.
pub fn try_update_object(current: &Record, patch: &Patch) -> Result<Record> {
    patch.validate(current)?;
    Ok(update_object(current, patch))
}

/// Returns true if applying `patch` to `record` would leave it unchanged.
pub fn is_noop(record: &Record, patch: &Patch) -> bool {
    update_object(record, patch).same(record)
}
