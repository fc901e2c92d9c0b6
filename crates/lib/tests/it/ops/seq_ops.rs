//! Sequence operator tests

use strata::{
    IndexFinder, Matcher, Record, Same, Seq, Updater, Value,
    ops::{
        add, add_to_array, id_index, id_is, partial, push, remove, remove_from_array, update_at,
        with_id,
    },
    record,
};

use crate::helpers::*;

#[test]
fn test_sequence_walkthrough() {
    let seq = Seq::from(vec![1, 2, 3]);

    let pushed = push(4)(&seq);
    assert_eq!(pushed, [1, 2, 3, 4]);
    assert!(!pushed.ptr_eq(&seq));

    assert!(add(2)(&seq).ptr_eq(&seq));

    let removed = remove_from_array(2)(&seq);
    assert_eq!(removed, [1, 3]);
    assert!(!removed.ptr_eq(&seq));

    let scaled = update_at(1, Updater::with(|x: &i32| x * 10))(&removed);
    assert_eq!(scaled, [1, 30]);
    assert!(scaled[0].same(&removed[0]));
}

#[test]
fn test_add_to_array_noop_and_append() {
    let seq = Seq::from(vec!["a".to_string()]);
    assert!(add_to_array("a".to_string())(&seq).ptr_eq(&seq));
    assert_eq!(add_to_array("b".to_string())(&seq).len(), 2);
}

#[test]
fn test_remove_with_predicate() {
    let seq = Seq::from(vec![1, 2, 3, 4]);
    let next = remove(Matcher::when(|v: &i32| *v > 2))(&seq);
    assert_eq!(next, [1, 2]);
    assert!(remove(Matcher::when(|v: &i32| *v > 10))(&seq).ptr_eq(&seq));
}

#[test]
fn test_update_at_out_of_range_is_noop() {
    let seq = Seq::from(vec![1, 2]);
    assert!(update_at(2, 9)(&seq).ptr_eq(&seq));
    assert!(update_at(-1, 9)(&seq).ptr_eq(&seq));
}

#[test]
fn test_update_at_with_same_value_is_noop() {
    let seq = Seq::from(vec![1, 2]);
    assert!(update_at(0, 1)(&seq).ptr_eq(&seq));
    assert!(update_at(1, Updater::with(|x: &i32| *x))(&seq).ptr_eq(&seq));
}

#[test]
fn test_update_at_shares_every_other_slot() {
    let list = todos(&["a", "b", "c"]);
    let done = partial(record! { "done" => true });
    let next = update_at(1, Updater::with(move |todo: &Record| done(todo)))(&list);

    assert!(next[0].ptr_eq(&list[0]));
    assert!(!next[1].ptr_eq(&list[1]));
    assert!(next[2].ptr_eq(&list[2]));
}

#[test]
fn test_update_at_computed_index() {
    let list = todos(&["a", "b"]);
    let finish = |todo: &Record| partial(record! { "done" => true })(todo);

    let next = update_at(id_index("b"), Updater::with(finish))(&list);
    assert!(next[0].ptr_eq(&list[0]));
    assert_eq!(next[1].get("done"), Some(&Value::Bool(true)));

    // An id that is not present resolves to -1.
    assert!(update_at(id_index("z"), Updater::with(finish))(&list).ptr_eq(&list));

    let last = IndexFinder::find(|s: &Seq<Record>| s.len() as isize - 1);
    assert!(!update_at(last, Updater::with(finish))(&list).ptr_eq(&list));
}

#[test]
fn test_remove_by_id() {
    let list = todos(&["a", "b", "c"]);
    let next = remove_from_array(with_id("b"))(&list);
    assert_eq!(next.len(), 2);
    assert!(next[0].ptr_eq(&list[0]));
    assert!(next[1].ptr_eq(&list[2]));
    assert!(remove_from_array(with_id::<Record>("z"))(&list).ptr_eq(&list));
}

#[test]
fn test_id_predicate() {
    let list = todos(&["a", "b"]);
    let is_a = id_is::<Record>("a");
    assert!(is_a(&list[0]));
    assert!(!is_a(&list[1]));

    let next = remove_from_array(Matcher::when(id_is("a")))(&list);
    assert_eq!(next.len(), 1);
    assert!(next[0].ptr_eq(&list[1]));
}
