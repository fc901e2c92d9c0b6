//! Lookup helpers for sequences of identified items.

use crate::{IndexFinder, Matcher, Record, Seq, Value};

/// Items that carry a textual `id`.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

/// Records are identified by a text `id` field.
impl Identified for Record {
    fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_text)
    }
}

impl Identified for Value {
    fn id(&self) -> Option<&str> {
        self.as_record().and_then(Identified::id)
    }
}

/// Finder for the first item whose id is `id`; resolves to `-1` when absent.
///
/// ```
/// use strata::{ops::{id_index, update_at}, record, Seq, Updater, Value};
///
/// let todos: Seq<Value> = Seq::from(vec![
///     record! { "id" => "a", "done" => false }.into(),
///     record! { "id" => "b", "done" => false }.into(),
/// ]);
/// let mark_done = strata::ops::partial(record! { "done" => true });
/// let next = update_at(
///     id_index("b"),
///     Updater::with(move |todo: &Value| match todo {
///         Value::Record(r) => Value::Record(mark_done(r)),
///         other => other.clone(),
///     }),
/// )(&todos);
///
/// assert!(next[0].as_record().unwrap().ptr_eq(todos[0].as_record().unwrap()));
/// assert_eq!(next[1].as_record().unwrap().get("done"), Some(&Value::Bool(true)));
/// ```
pub fn id_index<T: Identified + 'static>(id: impl Into<String>) -> IndexFinder<T> {
    let id = id.into();
    IndexFinder::find(move |seq: &Seq<T>| {
        seq.iter()
            .position(|item| item.id() == Some(id.as_str()))
            .map_or(-1, |i| i as isize)
    })
}

/// Predicate testing an item's id.
pub fn id_is<T: Identified>(id: impl Into<String>) -> impl Fn(&T) -> bool {
    let id = id.into();
    move |item| item.id() == Some(id.as_str())
}

/// [`id_is`] as a matcher, for use with the removal operators.
pub fn with_id<T: Identified + 'static>(id: impl Into<String>) -> Matcher<T> {
    let id = id.into();
    Matcher::when(move |item: &T| item.id() == Some(id.as_str()))
}
