//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while parsing the ORM vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The ORM operation name is not one of the seven known capabilities.
    #[error("unknown ORM operation: {0}")]
    UnknownOperation(String),

    /// The controller action name is not a scaffold action.
    #[error("unknown controller action: {0}")]
    UnknownAction(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
