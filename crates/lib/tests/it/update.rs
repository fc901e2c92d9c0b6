//! update_object, Patch and DeepPatch tests
//!
//! Covers the record update primitive: lazy copying, identity on no-op,
//! function updaters, structural sharing through deep patches and the
//! checked (validating) path.

use strata::{
    DeepPatch, Patch, Record, Same, Updater, Value, is_noop, ops::deep_partial, record,
    try_update_object, update_object,
};

use crate::helpers::*;

#[test]
fn test_literal_noop_returns_same_record() {
    let state = nested_state();
    let user = state.get("user").cloned().unwrap();
    let patch = Patch::new().set("user", user).set("tags", state.get("tags").cloned().unwrap());
    assert!(update_object(&state, &patch).ptr_eq(&state));
}

#[test]
fn test_structurally_equal_branch_is_a_change() {
    let state = nested_state();
    let patch = Patch::new().set("settings", record! { "theme" => "dark" });
    let next = update_object(&state, &patch);
    assert!(!next.ptr_eq(&state));
    assert_eq!(next, state);
}

#[test]
fn test_function_updater_sees_current_value() {
    let state = record! { "count" => 2, "name" => "x" };
    let patch = Patch::new().update("count", |v| Value::from(v.as_int().unwrap_or(0) * 5));
    let next = update_object(&state, &patch);
    assert_eq!(next.get("count"), Some(&Value::Int(10)));
    assert_eq!(next.get("name"), state.get("name"));
}

#[test]
fn test_function_updater_returning_same_value_is_noop() {
    let state = nested_state();
    let patch = Patch::new().update("user", Value::clone);
    assert!(update_object(&state, &patch).ptr_eq(&state));
    assert!(is_noop(&state, &patch));
}

#[test]
fn test_unknown_keys_are_skipped() {
    let state = record! { "a" => 1 };
    let next = update_object(&state, &Patch::new().set("missing", 5));
    assert!(next.ptr_eq(&state));
    assert!(next.get("missing").is_none());
}

#[test]
fn test_untouched_fields_keep_identity() {
    let state = nested_state();
    let next = update_object(&state, &Patch::new().set("tags", Value::Null));
    assert_branch_shared(&state, &next, "user");
    assert_branch_shared(&state, &next, "settings");
}

#[test]
fn test_deep_partial_copies_only_the_changed_path() {
    let state = nested_state();
    let next = deep_partial(record! { "user" => record! { "age" => 37 } })(&state);

    assert!(!next.ptr_eq(&state));
    assert_branch_rebuilt(&state, &next, "user");
    assert_branch_shared(&state, &next, "settings");
    assert!(next.get("tags").cloned().same(&state.get("tags").cloned()));
    assert_eq!(next.get_in(&["user", "age"]), Some(&Value::Int(37)));
    assert_eq!(next.get_in(&["user", "name"]), Some(&Value::from("ada")));
}

#[test]
fn test_deep_partial_noop_keeps_root() {
    let state = nested_state();
    let next = deep_partial(record! { "user" => record! { "name" => "ada" } })(&state);
    assert!(next.ptr_eq(&state));
}

#[test]
fn test_deep_patch_builder_mixes_leaves_and_branches() {
    let state = nested_state();
    let patch = DeepPatch::new()
        .nested("settings", DeepPatch::new().update("theme", |_| Value::from("light")))
        .set("tags", Value::Null);
    let next = update_object(&state, &patch.to_patch());
    assert_eq!(next.get_in(&["settings", "theme"]), Some(&Value::from("light")));
    assert_eq!(next.get("tags"), Some(&Value::Null));
    assert_branch_shared(&state, &next, "user");
}

#[test]
fn test_checked_update_rejects_unknown_field() {
    let state = record! { "a" => 1 };
    let err = try_update_object(&state, &Patch::new().set("b", 1)).unwrap_err();
    assert!(err.is_unknown_field());
    assert!(err.is_validation_error());
    assert_eq!(err.module(), "update");
}

#[test]
fn test_checked_update_rejects_kind_change() {
    let state = record! { "a" => 1, "b" => Value::Null };
    let err = try_update_object(&state, &Patch::new().set("a", "one")).unwrap_err();
    assert!(err.is_type_error());

    // Numbers are interchangeable and null fields accept anything.
    let next = try_update_object(&state, &Patch::new().set("a", 1.5).set("b", "x")).unwrap();
    assert_eq!(next.get("a"), Some(&Value::Float(1.5)));
    assert_eq!(next.get("b"), Some(&Value::from("x")));
}

#[test]
fn test_checked_update_does_not_inspect_functions() {
    let state: Record = record! { "a" => 1 };
    let patch = Patch::new().with("a", Updater::with(|_: &Value| Value::from("text")));
    let next = try_update_object(&state, &patch).unwrap();
    assert_eq!(next.get("a"), Some(&Value::from("text")));
}
