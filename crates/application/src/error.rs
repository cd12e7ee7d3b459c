//! Application error types

use actionorm_domain::DomainError;
use thiserror::Error;

use crate::ports::EmitError;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain parsing error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The selected adapter cannot render a required operation.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// No adapter is registered under the requested id.
    #[error("unknown ORM adapter '{id}' (available: {})", .available.join(", "))]
    UnknownAdapter {
        /// The requested id.
        id: String,
        /// Registered ids, sorted.
        available: Vec<String>,
    },

    /// An adapter with the same id is already registered.
    #[error("ORM adapter '{0}' is already registered")]
    DuplicateAdapter(String),

    /// Generator configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApplicationError {
    /// Returns true if the error reports an unimplemented capability.
    #[must_use]
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Emit(EmitError::UnimplementedCapability { .. }))
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
