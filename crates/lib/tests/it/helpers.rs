use std::{cell::Cell, rc::Rc};

use strata::{Record, Seq, Value, record};

// ==========================
// FIXTURES
// ==========================

/// A nested record with two independent branches and a list.
///
/// ```text
/// { user: { name: "ada", age: 36 }, settings: { theme: "dark" }, tags: ["a", "b"] }
/// ```
pub fn nested_state() -> Record {
    record! {
        "user" => record! { "name" => "ada", "age" => 36 },
        "settings" => record! { "theme" => "dark" },
        "tags" => vec![Value::from("a"), Value::from("b")],
    }
}

/// A list of `{ id, done }` records.
pub fn todos(ids: &[&str]) -> Seq<Record> {
    ids.iter()
        .map(|id| record! { "id" => *id, "done" => false })
        .collect()
}

// ==========================
// CALL COUNTING
// ==========================

/// Shared counter for asserting how often a closure ran.
#[derive(Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

// ==========================
// ASSERTIONS
// ==========================

/// Assert that a record field holds a nested record that is the same handle
/// in both snapshots.
pub fn assert_branch_shared(before: &Record, after: &Record, field: &str) {
    let old = branch(before, field);
    let new = branch(after, field);
    assert!(old.ptr_eq(new), "branch '{field}' should be shared");
}

/// Assert that a record field holds a nested record that was rebuilt.
pub fn assert_branch_rebuilt(before: &Record, after: &Record, field: &str) {
    let old = branch(before, field);
    let new = branch(after, field);
    assert!(!old.ptr_eq(new), "branch '{field}' should be a new record");
}

fn branch<'a>(record: &'a Record, field: &str) -> &'a Record {
    record
        .get(field)
        .and_then(Value::as_record)
        .unwrap_or_else(|| panic!("field '{field}' is not a record"))
}
