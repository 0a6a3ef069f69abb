//! Error types and utilities for registry operations.

/// Result type for all registry operations in this crate.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
/// Most functions in this crate return this type for consistent error handling.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for registry operations.
///
/// Callers branch on variants, never on message text. `AlreadyExists` is the
/// only variant consumed rather than surfaced: artifact upserts route it to a
/// replace attempt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested resource or artifact does not exist
    #[error("Resource '{name}' not found")]
    NotFound { name: String },

    /// Artifact creation hit a name that is already taken
    #[error("Resource '{name}' already exists")]
    AlreadyExists { name: String },

    /// A resource name failed validation
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The caller is not allowed to access the resource
    #[error("Permission denied for '{name}'")]
    PermissionDenied { name: String },

    /// Network, authentication, or service failure from the transport
    #[error("Transport failure during {operation}: {details}")]
    Transport { operation: String, details: String },
}

impl Error {
    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an already exists error
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists { name: name.into() }
    }

    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(name: impl Into<String>) -> Self {
        Self::PermissionDenied { name: name.into() }
    }

    /// Create a transport error with context
    pub fn transport(operation: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Whether this error means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error means a create hit an existing name.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
