//!
//! Strata: immutable state updates with structural sharing.
//! This library provides update operators over persistent containers, plus memoized selectors and a small store built on them.
//!
//! ## Core Concepts
//!
//! Strata is built around a few key concepts:
//!
//! * **Containers (`container::Seq`, `container::Set`, `container::Map`, `value::Record`)**: Cheap-to-clone handles over shared storage. Cloning a handle gives the *same* container; `ptr_eq` tests identity.
//! * **Sameness (`compare::Same`)**: Scalars compare by value, containers by identity. Every no-op decision and every selector cache check uses it.
//! * **Operators (`ops`)**: Curried `Fn(&C) -> C` functions such as `push(4)` or `partial(patch)`. When an operator has nothing to change it returns its input handle, so unchanged branches are shared with the previous snapshot.
//! * **Updaters (`updater::Updater`)**: Either a replacement value or a function of the old value, used wherever an operator rewrites one slot.
//! * **Composition (`ops::pipe`, `ops::compose`)**: Chains of operators that stay identity-preserving end to end.
//! * **Selectors (`selector`)**: Single-entry memoized derivations, with either declared (`Selector`) or recorded (`TrackedSelector`) dependencies.
//! * **Store (`store::Store`)**: An owned snapshot with subscribers, updated through operators.

pub mod compare;
pub mod container;
pub mod ops;
pub mod selector;
pub mod store;
pub mod update;
pub mod updater;
pub mod value;

pub use compare::{Same, is_same_record, is_same_seq, is_same_slice};
pub use container::{Map, Seq, Set};
pub use selector::{Select, Selector, TrackedSelector};
pub use store::{Store, StoreConfig, StoreError, SubscriptionId};
pub use update::{
    DeepPatch, DeepUpdate, Patch, UpdateError, is_noop, try_update_object, update_object,
};
pub use updater::{IndexFinder, KeyMatcher, Matcher, Updater};
pub use value::{Record, Value};

/// Result type used throughout the Strata library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Strata library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured patch validation errors from the update module
    #[error(transparent)]
    Update(UpdateError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Update(_) => "update",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error reports a field the state does not have.
    pub fn is_unknown_field(&self) -> bool {
        match self {
            Error::Update(update_err) => update_err.is_unknown_field(),
            Error::Store(store_err) => store_err
                .update_error()
                .is_some_and(UpdateError::is_unknown_field),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Update(update_err) => update_err.is_type_error(),
            Error::Store(store_err) => store_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Update(_) => true,
            Error::Store(store_err) => store_err.is_rejected_update(),
            _ => false,
        }
    }

    /// Check if this error came from (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
