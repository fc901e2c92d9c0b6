//! An owned snapshot holder with subscribers.
//!
//! A [`Store`] keeps the current state, the state it started with, an
//! optional computed-state hook and an ordered table of listeners. Every
//! change goes through [`Store::update`], which applies an operator, runs the
//! hook and notifies listeners when the snapshot identity changed.

use std::fmt;

use indexmap::IndexMap;

use crate::{Record, Result, Same, selector::Select, update::Patch, update::update_object};

mod config;
pub mod errors;

pub use config::StoreConfig;
pub use errors::StoreError;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Listener<T> = Box<dyn Fn(&T)>;
type ComputedHook<T> = Box<dyn Fn(&T) -> T>;

/// State container driven by update operators.
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use strata::{ops::push, Seq, Store};
///
/// let mut store = Store::new(Seq::from(vec![1, 2]));
/// let seen = Rc::new(Cell::new(0));
/// let counter = seen.clone();
/// store.subscribe(move |s: &Seq<i32>| counter.set(s.len()));
///
/// assert!(store.update(push(3)));
/// assert_eq!(seen.get(), 3);
/// ```
pub struct Store<T> {
    state: T,
    init_state: T,
    computed: Option<ComputedHook<T>>,
    listeners: IndexMap<SubscriptionId, Listener<T>>,
    next_id: u64,
    config: StoreConfig,
}

impl<T: Clone> Store<T> {
    /// Create a store with default settings.
    pub fn new(initial: T) -> Self {
        Self::with_config(initial, StoreConfig::default())
    }

    /// Create a store with the given settings.
    pub fn with_config(initial: T, config: StoreConfig) -> Self {
        Self {
            state: initial.clone(),
            init_state: initial,
            computed: None,
            listeners: IndexMap::new(),
            next_id: 0,
            config,
        }
    }
}

impl<T> Store<T> {
    /// Install a hook that derives the stored snapshot after every change.
    ///
    /// The hook runs only on snapshots that differ from the current one. It
    /// should itself return its input when there is nothing to derive.
    pub fn with_computed(mut self, computed: impl Fn(&T) -> T + 'static) -> Self {
        self.computed = Some(Box::new(computed));
        self
    }

    /// The current snapshot.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// The snapshot the store was created with.
    pub fn init_state(&self) -> &T {
        &self.init_state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Register a listener called with the snapshot on every notification.
    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        tracing::trace!(store = %self.config.name, subscription = %id, "listener subscribed");
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener, in subscription order, with the current snapshot.
    pub fn notify(&self) {
        tracing::trace!(
            store = %self.config.name,
            listeners = self.listeners.len(),
            "notifying listeners"
        );
        for listener in self.listeners.values() {
            listener(&self.state);
        }
    }

    /// Evaluate a selector against the current snapshot.
    pub fn select<Sel: Select<T>>(&self, selector: &Sel) -> Sel::Output {
        selector.select(&self.state)
    }
}

impl<T: Same + Clone> Store<T> {
    /// Apply `op` to the current snapshot.
    ///
    /// Returns true when the snapshot changed. A no-op leaves the stored
    /// handle untouched and notifies nobody unless
    /// [`StoreConfig::notify_unchanged`] is set.
    pub fn update(&mut self, op: impl FnOnce(&T) -> T) -> bool {
        let mut next = op(&self.state);
        let changed = !next.same(&self.state);
        if changed {
            if let Some(computed) = &self.computed {
                next = computed(&next);
            }
            self.state = next;
            tracing::debug!(store = %self.config.name, "state updated");
        } else {
            tracing::trace!(store = %self.config.name, "update was a no-op");
        }

        if changed || self.config.notify_unchanged {
            self.notify();
        }
        changed
    }

    /// Replace the snapshot with a new value.
    pub fn replace(&mut self, state: T) -> bool {
        self.update(move |_| state)
    }

    /// Go back to the initial snapshot.
    pub fn reset(&mut self) -> bool {
        let initial = self.init_state.clone();
        self.replace(initial)
    }
}

impl Store<Record> {
    /// Apply a partial update to a record state.
    ///
    /// Fields the record lacks are ignored; see [`Store::try_set_state`] for
    /// the checked variant.
    pub fn set_state(&mut self, patch: impl Into<Patch>) -> bool {
        let patch = patch.into();
        self.update(|state| update_object(state, &patch))
    }

    /// Apply a partial update after validating it against the current state.
    ///
    /// Unknown fields and kind changes are rejected and the state is left
    /// as it was.
    pub fn try_set_state(&mut self, patch: impl Into<Patch>) -> Result<bool> {
        let patch = patch.into();
        if let Err(source) = patch.validate(&self.state) {
            tracing::debug!(store = %self.config.name, error = %source, "rejected update");
            return Err(StoreError::RejectedUpdate {
                store: self.config.name.clone(),
                source,
            }
            .into());
        }
        Ok(self.set_state(patch))
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("computed", &self.computed.is_some())
            .field("config", &self.config)
            .finish()
    }
}
