//! Set operators.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::{Matcher, Set};

/// Insert `value` unless it is already a member.
pub fn add_to_set<T: Hash + Eq + Clone>(value: T) -> impl Fn(&Set<T>) -> Set<T> {
    move |set| {
        if set.contains(&value) {
            return set.clone();
        }
        let mut members = IndexSet::clone(set.as_index_set());
        members.insert(value.clone());
        Set::from(members)
    }
}

/// Remove the literal member, or every member the predicate selects.
pub fn remove_from_set<T: Hash + Eq + Clone>(
    matcher: impl Into<Matcher<T>>,
) -> impl Fn(&Set<T>) -> Set<T> {
    let matcher = matcher.into();
    move |set| match &matcher {
        Matcher::Value(value) => {
            if !set.contains(value) {
                return set.clone();
            }
            let mut members = IndexSet::clone(set.as_index_set());
            members.shift_remove(value);
            Set::from(members)
        }
        Matcher::Predicate(predicate) => {
            if !set.iter().any(|member| predicate(member)) {
                return set.clone();
            }
            set.iter()
                .filter(|member| !predicate(*member))
                .cloned()
                .collect()
        }
    }
}
