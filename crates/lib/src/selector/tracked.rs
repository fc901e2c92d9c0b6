use std::{
    cell::{Cell, RefCell},
    fmt,
};

use crate::Same;

use super::Select;

/// A read recorded during one evaluation, with the value it produced.
trait RecordedRead<S> {
    fn unchanged(&self, state: &S) -> bool;
}

struct Recorded<S, V> {
    read: Box<dyn Fn(&S) -> V>,
    last: V,
    equal: Box<dyn Fn(&V, &V) -> bool>,
}

impl<S, V> RecordedRead<S> for Recorded<S, V> {
    fn unchanged(&self, state: &S) -> bool {
        (self.equal)(&self.last, &(self.read)(state))
    }
}

/// Dependency-recording getter handed to a [`TrackedSelector`] combiner.
///
/// Every read made through [`Tracker::get`] or [`Tracker::get_with`] is
/// logged together with its value; the log decides whether the next call
/// can reuse the result. Reads through [`Tracker::untracked`] are not logged.
pub struct Tracker<'a, S> {
    state: &'a S,
    log: Vec<Box<dyn RecordedRead<S>>>,
}

impl<'a, S: 'static> Tracker<'a, S> {
    fn new(state: &'a S) -> Self {
        Self {
            state,
            log: Vec::new(),
        }
    }

    /// Read a value and record it as a dependency compared with [`Same`].
    pub fn get<V: Same + Clone + 'static>(&mut self, read: impl Fn(&S) -> V + 'static) -> V {
        self.get_with(read, V::same)
    }

    /// Read a value and record it as a dependency with a custom equality.
    pub fn get_with<V: Clone + 'static>(
        &mut self,
        read: impl Fn(&S) -> V + 'static,
        equal: impl Fn(&V, &V) -> bool + 'static,
    ) -> V {
        let value = read(self.state);
        self.log.push(Box::new(Recorded {
            read: Box::new(read),
            last: value.clone(),
            equal: Box::new(equal),
        }));
        value
    }

    /// The state, without recording anything.
    pub fn untracked(&self) -> &'a S {
        self.state
    }

    /// Number of reads recorded so far in this evaluation.
    pub fn recorded(&self) -> usize {
        self.log.len()
    }
}

struct TrackedCache<S, R> {
    log: Vec<Box<dyn RecordedRead<S>>>,
    result: R,
}

/// A selector whose dependencies are discovered while it runs.
///
/// The combiner receives a [`Tracker`]; whatever it reads through the tracker
/// becomes the dependency set for the next call. A later call re-runs exactly
/// those reads and returns the cached result when all of them are
/// unchanged. A combiner that records nothing is therefore computed once.
///
/// ```
/// use strata::{record, selector::TrackedSelector, Record, Value};
///
/// let label = TrackedSelector::new(|t: &mut strata::selector::Tracker<'_, Record>| {
///     let show = t.get(|s: &Record| s.get("show").and_then(Value::as_bool).unwrap_or(false));
///     if show {
///         t.get(|s: &Record| s.get("name").cloned().unwrap_or(Value::Null))
///     } else {
///         Value::Null
///     }
/// });
///
/// assert_eq!(label.select(&record! { "show" => false, "name" => "a" }), Value::Null);
/// // `name` was not read, so changing it does not recompute.
/// label.select(&record! { "show" => false, "name" => "b" });
/// assert_eq!(label.recomputations(), 1);
/// ```
pub struct TrackedSelector<S, F, R> {
    combine: F,
    cache: RefCell<Option<TrackedCache<S, R>>>,
    recomputations: Cell<u64>,
}

impl<S, F, R> TrackedSelector<S, F, R>
where
    S: 'static,
    F: Fn(&mut Tracker<'_, S>) -> R,
    R: Clone,
{
    pub fn new(combine: F) -> Self {
        Self {
            combine,
            cache: RefCell::new(None),
            recomputations: Cell::new(0),
        }
    }

    /// Evaluate against `state`, reusing the cached result when every read
    /// recorded last time is unchanged.
    pub fn select(&self, state: &S) -> R {
        if let Some(cached) = self.cache.borrow().as_ref() {
            if cached.log.iter().all(|read| read.unchanged(state)) {
                return cached.result.clone();
            }
        }

        let mut tracker = Tracker::new(state);
        let result = (self.combine)(&mut tracker);
        let count = self.recomputations.get() + 1;
        self.recomputations.set(count);
        tracing::trace!(
            recomputations = count,
            dependencies = tracker.log.len(),
            "tracked selector recomputed"
        );

        *self.cache.borrow_mut() = Some(TrackedCache {
            log: tracker.log,
            result: result.clone(),
        });
        result
    }

    /// Number of times the combiner has run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }

    /// Number of dependencies recorded by the last evaluation.
    pub fn dependency_count(&self) -> usize {
        self.cache
            .borrow()
            .as_ref()
            .map_or(0, |cached| cached.log.len())
    }
}

impl<S, F, R> Select<S> for TrackedSelector<S, F, R>
where
    S: 'static,
    F: Fn(&mut Tracker<'_, S>) -> R,
    R: Clone,
{
    type Output = R;

    fn select(&self, state: &S) -> R {
        TrackedSelector::select(self, state)
    }
}

impl<S, F, R> fmt::Debug for TrackedSelector<S, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedSelector")
            .field("cached", &self.cache.borrow().is_some())
            .field("recomputations", &self.recomputations.get())
            .finish_non_exhaustive()
    }
}
