//! Error types for store operations.

use thiserror::Error;

use crate::update::errors::UpdateError;

/// Errors reported by [`crate::Store`] operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A checked update was rejected and the state was left untouched
    #[error("Update rejected by store '{store}': {source}")]
    RejectedUpdate {
        store: String,
        #[source]
        source: UpdateError,
    },
}

impl StoreError {
    /// Check if this error is a rejected update
    pub fn is_rejected_update(&self) -> bool {
        matches!(self, StoreError::RejectedUpdate { .. })
    }

    /// Check if the update was rejected for a kind change
    pub fn is_type_error(&self) -> bool {
        match self {
            StoreError::RejectedUpdate { source, .. } => source.is_type_error(),
        }
    }

    /// Get the name of the store that reported the error
    pub fn store_name(&self) -> &str {
        match self {
            StoreError::RejectedUpdate { store, .. } => store,
        }
    }

    /// Get the underlying update error, if any
    pub fn update_error(&self) -> Option<&UpdateError> {
        match self {
            StoreError::RejectedUpdate { source, .. } => Some(source),
        }
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
