//! Error types for checked record updates.

use thiserror::Error;

/// Errors reported by [`crate::update::Patch::validate`] and
/// [`crate::update::try_update_object`].
///
/// The unchecked update path never fails; these errors exist for callers that
/// want unknown fields and kind changes rejected instead of silently ignored.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The patch names a field the record does not have
    #[error("Unknown field in patch: {field}")]
    UnknownField { field: String },

    /// A literal replacement would change the kind of a field
    #[error("Type mismatch for field '{field}': expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl UpdateError {
    /// Check if this error reports an unknown field
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, UpdateError::UnknownField { .. })
    }

    /// Check if this error reports a kind change
    pub fn is_type_error(&self) -> bool {
        matches!(self, UpdateError::TypeMismatch { .. })
    }

    /// Get the offending field name
    pub fn field(&self) -> &str {
        match self {
            UpdateError::UnknownField { field } | UpdateError::TypeMismatch { field, .. } => field,
        }
    }
}

// Conversion from UpdateError to the main Error type
impl From<UpdateError> for crate::Error {
    fn from(err: UpdateError) -> Self {
        crate::Error::Update(err)
    }
}
