use std::{
    cell::{Cell, RefCell},
    fmt,
    marker::PhantomData,
};

use super::{Dependencies, Select};

struct Cached<V, R> {
    values: V,
    result: R,
}

/// A selector over a fixed list of dependencies.
///
/// Every call reads all dependencies. When each value is unchanged compared
/// to the previous call the cached result is returned without running the
/// combiner; otherwise the combiner runs once and its result replaces the
/// cache. The cache belongs to this instance only.
///
/// # Examples
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use strata::{record, selector::{Dep, Selector}, Record, Value};
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = calls.clone();
/// let doubled = Selector::new(
///     (Dep::new(|s: &Record| s.get("count").and_then(Value::as_int).unwrap_or(0)),),
///     move |(count,): &(i64,)| {
///         counter.set(counter.get() + 1);
///         count * 2
///     },
/// );
///
/// assert_eq!(doubled.select(&record! { "count" => 2, "other" => 1 }), 4);
/// assert_eq!(doubled.select(&record! { "count" => 2, "other" => 5 }), 4);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Selector<S, D, F, R>
where
    D: Dependencies<S>,
{
    dependencies: D,
    combine: F,
    cache: RefCell<Option<Cached<D::Values, R>>>,
    recomputations: Cell<u64>,
    _state: PhantomData<fn(&S)>,
}

impl<S, D, F, R> Selector<S, D, F, R>
where
    D: Dependencies<S>,
    F: Fn(&D::Values) -> R,
    R: Clone,
{
    /// Build a selector from its dependencies and combiner.
    pub fn new(dependencies: D, combine: F) -> Self {
        Self {
            dependencies,
            combine,
            cache: RefCell::new(None),
            recomputations: Cell::new(0),
            _state: PhantomData,
        }
    }

    /// Evaluate against `state`, reusing the cached result when possible.
    pub fn select(&self, state: &S) -> R {
        let values = self.dependencies.read_all(state);
        if let Some(cached) = self.cache.borrow().as_ref() {
            if self.dependencies.all_unchanged(&cached.values, &values) {
                return cached.result.clone();
            }
        }

        let result = (self.combine)(&values);
        let count = self.recomputations.get() + 1;
        self.recomputations.set(count);
        tracing::trace!(recomputations = count, "selector recomputed");

        *self.cache.borrow_mut() = Some(Cached {
            values,
            result: result.clone(),
        });
        result
    }

    /// Number of times the combiner has run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}

impl<S, D, F, R> Select<S> for Selector<S, D, F, R>
where
    D: Dependencies<S>,
    F: Fn(&D::Values) -> R,
    R: Clone,
{
    type Output = R;

    fn select(&self, state: &S) -> R {
        Selector::select(self, state)
    }
}

impl<S, D, F, R> fmt::Debug for Selector<S, D, F, R>
where
    D: Dependencies<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("cached", &self.cache.borrow().is_some())
            .field("recomputations", &self.recomputations.get())
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Selector::new`].
pub fn create_selector<S, D, F, R>(dependencies: D, combine: F) -> Selector<S, D, F, R>
where
    D: Dependencies<S>,
    F: Fn(&D::Values) -> R,
    R: Clone,
{
    Selector::new(dependencies, combine)
}
