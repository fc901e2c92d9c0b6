use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{Same, Value};

/// An immutable, reference-counted record of named fields.
///
/// Fields keep their insertion order. A `Record` is never modified in place:
/// [`crate::update_object`] and the operators in [`crate::ops::record`]
/// return either a clone of the input handle or a new record that shares
/// every untouched field value with the input.
pub struct Record {
    fields: Rc<IndexMap<String, Value>>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            fields: Rc::new(IndexMap::new()),
        }
    }

    /// Returns true if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fields, &other.fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Follow a chain of nested record fields.
    ///
    /// Returns `None` as soon as a segment is missing or an intermediate
    /// value is not a record. An empty path yields `None`.
    pub fn get_in(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_record()?;
        }
        current.get(last)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// Iterate field names in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.fields.keys()
    }

    /// Borrow the underlying field map.
    pub fn as_index_map(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Shallow copy of the fields, for building a modified record.
    pub(crate) fn to_fields(&self) -> IndexMap<String, Value> {
        IndexMap::clone(&self.fields)
    }
}

impl Clone for Record {
    fn clone(&self) -> Self {
        Self {
            fields: Rc::clone(&self.fields),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self {
            fields: Rc::new(fields),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Deep, order-insensitive equality, for assertions.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.fields == *other.fields
    }
}

impl Same for Record {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl From<&Record> for serde_json::Value {
    fn from(record: &Record) -> Self {
        serde_json::Value::Object(
            record
                .iter()
                .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                .collect(),
        )
    }
}

/// Build a [`Record`] from `key => value` pairs.
///
/// Values go through `Value::from`, so nested `record!` invocations, strings,
/// integers and `Vec<Value>` all work.
///
/// ```
/// use strata::{record, Value};
///
/// let state = record! {
///     "count" => 1,
///     "user" => record! { "name" => "Alice" },
/// };
/// assert_eq!(state.get("count"), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::Record as ::std::iter::FromIterator<(::std::string::String, $crate::Value)>>::from_iter([
            $((::std::string::String::from($key), $crate::Value::from($value))),+
        ])
    };
}
