//! Argument types shared by the operators.
//!
//! Operators accept either a literal or a function in several places. These
//! enums make that choice explicit instead of inspecting values at runtime:
//!
//! - [`Updater`] - replacement value or `V -> V` function
//! - [`Matcher`] - value to compare against or predicate
//! - [`IndexFinder`] - literal index or `Seq -> index` function

use std::{fmt, rc::Rc};

use crate::{Same, Seq};

/// A literal replacement value or a pure function from the current value.
///
/// # Examples
///
/// ```
/// use strata::Updater;
///
/// let replace: Updater<i64> = Updater::from(5);
/// let double = Updater::with(|v: &i64| v * 2);
///
/// assert_eq!(replace.apply(&1), 5);
/// assert_eq!(double.apply(&21), 42);
/// ```
pub enum Updater<V> {
    /// Replace the current value.
    Replace(V),
    /// Compute the new value from the current one.
    Apply(Rc<dyn Fn(&V) -> V>),
}

impl<V> Updater<V> {
    /// Wrap a function as an updater.
    pub fn with(f: impl Fn(&V) -> V + 'static) -> Self {
        Updater::Apply(Rc::new(f))
    }

    /// Returns true if this updater computes from the current value.
    pub fn is_function(&self) -> bool {
        matches!(self, Updater::Apply(_))
    }
}

impl<V: Clone> Updater<V> {
    /// Candidate value for `current`.
    pub fn apply(&self, current: &V) -> V {
        match self {
            Updater::Replace(value) => value.clone(),
            Updater::Apply(f) => f(current),
        }
    }
}

impl<V: Clone + Same> Updater<V> {
    /// Apply the updater, returning `None` when the candidate is the same as `current`.
    pub fn changed(&self, current: &V) -> Option<V> {
        let next = self.apply(current);
        (!next.same(current)).then_some(next)
    }
}

impl<V> From<V> for Updater<V> {
    fn from(value: V) -> Self {
        Updater::Replace(value)
    }
}

impl<V: Clone> Clone for Updater<V> {
    fn clone(&self) -> Self {
        match self {
            Updater::Replace(value) => Updater::Replace(value.clone()),
            Updater::Apply(f) => Updater::Apply(Rc::clone(f)),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Updater<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Updater::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// Selects elements (or keys) either by [`Same`] equality or by predicate.
pub enum Matcher<T> {
    /// Match elements that are [`Same`] as this value.
    Value(T),
    /// Match elements for which the predicate returns true.
    Predicate(Rc<dyn Fn(&T) -> bool>),
}

/// Key matchers are ordinary matchers over the key type.
pub type KeyMatcher<K> = Matcher<K>;

impl<T> Matcher<T> {
    /// Wrap a predicate as a matcher.
    pub fn when(predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Matcher::Predicate(Rc::new(predicate))
    }
}

impl<T: Same> Matcher<T> {
    /// Returns true if `candidate` is selected by this matcher.
    pub fn matches(&self, candidate: &T) -> bool {
        match self {
            Matcher::Value(value) => value.same(candidate),
            Matcher::Predicate(predicate) => predicate(candidate),
        }
    }
}

impl<T> From<T> for Matcher<T> {
    fn from(value: T) -> Self {
        Matcher::Value(value)
    }
}

impl From<&str> for Matcher<String> {
    fn from(value: &str) -> Self {
        Matcher::Value(value.to_string())
    }
}

impl<T: Clone> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        match self {
            Matcher::Value(value) => Matcher::Value(value.clone()),
            Matcher::Predicate(predicate) => Matcher::Predicate(Rc::clone(predicate)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A literal position or a function that locates one.
///
/// Resolved positions may be negative or past the end; operators treat those
/// as "not found".
pub enum IndexFinder<T> {
    /// Fixed position.
    Index(isize),
    /// Position computed from the sequence, `-1` when absent.
    Find(Rc<dyn Fn(&Seq<T>) -> isize>),
}

impl<T> IndexFinder<T> {
    /// Wrap a finder function.
    pub fn find(finder: impl Fn(&Seq<T>) -> isize + 'static) -> Self {
        IndexFinder::Find(Rc::new(finder))
    }

    /// Resolve against `seq`, yielding a usable index when in range.
    pub fn resolve(&self, seq: &Seq<T>) -> Option<usize> {
        let index = match self {
            IndexFinder::Index(index) => *index,
            IndexFinder::Find(finder) => finder(seq),
        };
        usize::try_from(index).ok().filter(|&i| i < seq.len())
    }
}

impl<T> From<isize> for IndexFinder<T> {
    fn from(index: isize) -> Self {
        IndexFinder::Index(index)
    }
}

impl<T> From<i32> for IndexFinder<T> {
    fn from(index: i32) -> Self {
        IndexFinder::Index(index as isize)
    }
}

impl<T> From<i64> for IndexFinder<T> {
    fn from(index: i64) -> Self {
        IndexFinder::Index(isize::try_from(index).unwrap_or(isize::MIN))
    }
}

impl<T> From<usize> for IndexFinder<T> {
    fn from(index: usize) -> Self {
        IndexFinder::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl<T> Clone for IndexFinder<T> {
    fn clone(&self) -> Self {
        match self {
            IndexFinder::Index(index) => IndexFinder::Index(*index),
            IndexFinder::Find(finder) => IndexFinder::Find(Rc::clone(finder)),
        }
    }
}

impl<T> fmt::Debug for IndexFinder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFinder::Index(index) => f.debug_tuple("Index").field(index).finish(),
            IndexFinder::Find(_) => f.write_str("Find(..)"),
        }
    }
}
