//! Store tests
//!
//! Covers the snapshot lifecycle: updates through operators, partial record
//! updates, subscription management, computed state and configuration.

use std::{cell::RefCell, rc::Rc};

use strata::{
    Patch, Record, Seq, Store, StoreConfig, Value,
    ops::{add, push},
    record,
    selector::{Dep, Selector},
};

use crate::helpers::*;

#[test]
fn test_initial_state() {
    let store = Store::new(record! { "count" => 0, "name" => "test" });
    assert_eq!(store.state(), &record! { "count" => 0, "name" => "test" });
    assert!(store.state().ptr_eq(store.init_state()));
}

#[test]
fn test_set_state_with_values_and_functions() {
    let mut store = Store::new(record! { "count" => 0, "name" => "test" });
    assert!(store.set_state(record! { "count" => 1 }));
    assert_eq!(store.state(), &record! { "count" => 1, "name" => "test" });

    let bump = Patch::new().update("count", |v| Value::from(v.as_int().unwrap_or(0) + 5));
    store.set_state(bump);
    assert_eq!(store.state().get("count"), Some(&Value::Int(6)));
    assert_eq!(store.init_state().get("count"), Some(&Value::Int(0)));
}

#[test]
fn test_subscribers_see_new_snapshot() {
    let seen: Rc<RefCell<Vec<Record>>> = Rc::default();
    let mut store = Store::new(record! { "count" => 0 });
    let sink = seen.clone();
    store.subscribe(move |state: &Record| sink.borrow_mut().push(state.clone()));

    store.set_state(record! { "count" => 1 });
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].ptr_eq(store.state()));
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let calls = CallCounter::new();
    let mut store = Store::new(record! { "count" => 0 });
    let counter = calls.clone();
    let id = store.subscribe(move |_: &Record| counter.hit());

    store.set_state(record! { "count" => 1 });
    assert_eq!(calls.count(), 1);

    assert!(store.unsubscribe(id));
    store.set_state(record! { "count" => 2 });
    assert_eq!(calls.count(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn test_noop_update_keeps_snapshot_and_stays_quiet() {
    let calls = CallCounter::new();
    let mut store = Store::new(Seq::from(vec![1, 2]));
    let before = store.state().clone();
    let counter = calls.clone();
    store.subscribe(move |_: &Seq<i32>| counter.hit());

    assert!(!store.update(add(2)));
    assert!(store.state().ptr_eq(&before));
    assert_eq!(calls.count(), 0);

    assert!(store.update(push(3)));
    assert_eq!(calls.count(), 1);
}

#[test]
fn test_equal_number_patch_stays_quiet() {
    let calls = CallCounter::new();
    let mut store = Store::new(record! { "ratio" => 2.0 });
    let counter = calls.clone();
    store.subscribe(move |_: &Record| counter.hit());

    assert!(!store.set_state(record! { "ratio" => 2 }));
    assert_eq!(store.state().get("ratio"), Some(&Value::Float(2.0)));
    assert_eq!(calls.count(), 0);
}

#[test]
fn test_notify_unchanged_publishes_noops() {
    let calls = CallCounter::new();
    let config = StoreConfig {
        notify_unchanged: true,
        ..StoreConfig::named("chatty")
    };
    let mut store = Store::with_config(record! { "a" => 1 }, config);
    let counter = calls.clone();
    store.subscribe(move |_: &Record| counter.hit());

    assert!(!store.set_state(record! { "a" => 1 }));
    assert_eq!(calls.count(), 1);
}

#[test]
fn test_computed_state_runs_after_changes() {
    let mut store = Store::new(record! { "items" => Vec::<Value>::new(), "total" => 0 })
        .with_computed(|state: &Record| {
            let total = state
                .get("items")
                .and_then(Value::as_list)
                .map_or(0, |items| items.len() as i64);
            strata::ops::set_in_record("total", total)(state)
        });

    store.set_state(record! { "items" => vec![Value::from("a"), Value::from("b")] });
    assert_eq!(store.state().get("total"), Some(&Value::Int(2)));
}

#[test]
fn test_checked_set_state_leaves_state_on_error() {
    let mut store = Store::with_config(record! { "count" => 0 }, StoreConfig::named("counter"));
    let before = store.state().clone();

    let err = store.try_set_state(record! { "count" => "zero" }).unwrap_err();
    assert!(err.is_type_error());
    assert!(err.is_validation_error());
    assert_eq!(err.module(), "store");
    assert!(err.to_string().contains("counter"));
    assert!(matches!(&err, strata::Error::Store(e) if e.store_name() == "counter"));
    assert!(store.state().ptr_eq(&before));

    let err = store.try_set_state(record! { "missing" => 1 }).unwrap_err();
    assert!(err.is_unknown_field());

    assert!(store.try_set_state(record! { "count" => 3 }).unwrap());
}

#[test]
fn test_reset_and_replace() {
    let mut store = Store::new(record! { "a" => 1 });
    store.set_state(record! { "a" => 2 });
    assert!(store.reset());
    assert!(store.state().ptr_eq(store.init_state()));
    assert!(!store.reset());

    assert!(store.replace(record! { "b" => 1 }));
    assert_eq!(store.state().keys().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn test_select_against_current_state() {
    let mut store = Store::new(record! { "count" => 2, "other" => 0 });
    let doubled = Selector::new(
        (Dep::new(|s: &Record| s.get("count").and_then(Value::as_int).unwrap_or(0)),),
        |(n,): &(i64,)| n * 2,
    );

    assert_eq!(store.select(&doubled), 4);
    store.set_state(record! { "other" => 1 });
    assert_eq!(store.select(&doubled), 4);
    assert_eq!(doubled.recomputations(), 1);

    store.set_state(record! { "count" => 5 });
    assert_eq!(store.select(&doubled), 10);
}

#[test]
fn test_config_from_json() {
    let config = StoreConfig::from_json(r#"{"name": "todos"}"#).unwrap();
    assert_eq!(config.name, "todos");
    assert!(!config.notify_unchanged);

    let err = StoreConfig::from_json(r#"{"name": 5}"#).unwrap_err();
    assert!(err.is_serialization_error());
}
