//! Memoized selector tests
//!
//! Both selector kinds are driven with a call-counting combiner so cache
//! hits and misses are observable.

use strata::{
    Record, Seq, Value,
    ops::{add, deep_partial, set_in_record},
    record,
    selector::{Dep, Select, Selector, TrackedSelector, Tracker, create_selector},
};

use crate::helpers::*;

fn count(state: &Record) -> i64 {
    state.get("count").and_then(Value::as_int).unwrap_or(0)
}

fn user(state: &Record) -> Option<Record> {
    state.get("user").and_then(Value::as_record).cloned()
}

#[test]
fn test_cache_hit_on_equal_dependency() {
    let calls = CallCounter::new();
    let counter = calls.clone();
    let label = create_selector((Dep::new(count),), move |(n,): &(i64,)| {
        counter.hit();
        format!("count is {n}")
    });

    let s1 = record! { "count" => 3, "noise" => 1 };
    let s1b = record! { "count" => 3, "noise" => 2 };
    assert!(!s1.ptr_eq(&s1b));

    let first = label.select(&s1);
    let second = label.select(&s1b);
    assert_eq!(first, second);
    assert_eq!(calls.count(), 1);
}

#[test]
fn test_cache_invalidation_runs_combiner_once() {
    let calls = CallCounter::new();
    let counter = calls.clone();
    let doubled = Selector::new((Dep::new(count),), move |(n,): &(i64,)| {
        counter.hit();
        n * 2
    });

    let s1 = record! { "count" => 1 };
    assert_eq!(doubled.select(&s1), 2);
    let s2 = set_in_record("count", count(&s1) + 1)(&s1);
    assert_eq!(doubled.select(&s2), 4);
    assert_eq!(calls.count(), 2);
    assert_eq!(doubled.select(&s2), 4);
    assert_eq!(calls.count(), 2);
}

#[test]
fn test_single_entry_cache_forgets_older_inputs() {
    let doubled = Selector::new((Dep::new(count),), |(n,): &(i64,)| n * 2);
    doubled.select(&record! { "count" => 1 });
    doubled.select(&record! { "count" => 2 });
    doubled.select(&record! { "count" => 1 });
    assert_eq!(doubled.recomputations(), 3);
}

#[test]
fn test_branch_dependency_survives_unrelated_updates() {
    let state = nested_state();
    let name = Selector::new((Dep::new(user),), |(user,): &(Option<Record>,)| {
        user.as_ref()
            .and_then(|u| u.get("name"))
            .and_then(Value::as_text)
            .map(str::to_string)
    });

    assert_eq!(name.select(&state).as_deref(), Some("ada"));
    let themed = deep_partial(record! { "settings" => record! { "theme" => "light" } })(&state);
    name.select(&themed);
    assert_eq!(name.recomputations(), 1);

    let renamed = deep_partial(record! { "user" => record! { "name" => "grace" } })(&themed);
    assert_eq!(name.select(&renamed).as_deref(), Some("grace"));
    assert_eq!(name.recomputations(), 2);
}

#[test]
fn test_multiple_dependencies() {
    let total = Selector::new(
        (
            Dep::new(count),
            Dep::new(|s: &Record| s.get("step").and_then(Value::as_int).unwrap_or(1)),
        ),
        |(n, step): &(i64, i64)| n * step,
    );
    assert_eq!(total.select(&record! { "count" => 2, "step" => 3 }), 6);
    assert_eq!(total.select(&record! { "count" => 2, "step" => 4 }), 8);
    assert_eq!(total.recomputations(), 2);
}

#[test]
fn test_selector_over_sequences() {
    let evens = Selector::new(
        (Dep::new(|s: &Seq<i32>| s.clone()),),
        |(seq,): &(Seq<i32>,)| seq.iter().filter(|v| *v % 2 == 0).count(),
    );
    let seq = Seq::from(vec![1, 2, 4]);
    assert_eq!(evens.select(&seq), 2);
    assert_eq!(evens.select(&add(2)(&seq)), 2);
    assert_eq!(evens.recomputations(), 1);
}

#[test]
fn test_tracked_selector_only_watches_what_it_read() {
    let calls = CallCounter::new();
    let counter = calls.clone();
    let summary = TrackedSelector::new(move |t: &mut Tracker<'_, Record>| {
        counter.hit();
        let n = t.get(count);
        if n > 10 {
            format!("{n} and {:?}", t.get(user).map(|u| u.len()))
        } else {
            format!("{n}")
        }
    });

    let small = record! { "count" => 1, "user" => record! { "name" => "a" } };
    assert_eq!(summary.select(&small), "1");
    let other_user = set_in_record("user", record! { "name" => "b" })(&small);
    assert_eq!(summary.select(&other_user), "1");
    assert_eq!(calls.count(), 1);

    let big = set_in_record("count", 11)(&other_user);
    assert_eq!(summary.select(&big), "11 and Some(1)");
    assert_eq!(summary.dependency_count(), 2);

    let big_other = set_in_record("user", record! { "name" => "c", "x" => 1 })(&big);
    assert_eq!(summary.select(&big_other), "11 and Some(2)");
    assert_eq!(calls.count(), 3);
}

#[test]
fn test_tracker_counts_reads_in_one_evaluation() {
    let seen = TrackedSelector::new(|t: &mut Tracker<'_, Record>| {
        let before = t.recorded();
        t.get(count);
        let untracked = t.untracked().len();
        t.get(user);
        (before, t.recorded(), untracked)
    });
    let state = record! { "count" => 1, "user" => record! { "name" => "a" } };
    assert_eq!(seen.select(&state), (0, 2, 2));
    assert_eq!(seen.dependency_count(), 2);
}

#[test]
fn test_tracked_selector_custom_equality() {
    let summary = TrackedSelector::new(|t: &mut Tracker<'_, Record>| {
        let user = t.get_with(user, |a: &Option<Record>, b: &Option<Record>| a == b);
        user.is_some()
    });
    summary.select(&record! { "user" => record! { "name" => "a" } });
    summary.select(&record! { "user" => record! { "name" => "a" } });
    assert_eq!(summary.recomputations(), 1);
}

#[test]
fn test_select_trait_unifies_both_kinds() {
    fn read_twice<S, T: Select<S>>(selector: &T, a: &S, b: &S) -> (T::Output, T::Output) {
        (selector.select(a), selector.select(b))
    }

    let fixed = Selector::new((Dep::new(count),), |(n,): &(i64,)| *n);
    let tracked = TrackedSelector::new(|t: &mut Tracker<'_, Record>| t.get(count));
    let a = record! { "count" => 5 };
    let b = record! { "count" => 6 };
    assert_eq!(read_twice(&fixed, &a, &b), (5, 6));
    assert_eq!(read_twice(&tracked, &a, &b), (5, 6));
}
