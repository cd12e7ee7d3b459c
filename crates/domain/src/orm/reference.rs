//! Opaque references forwarded into generated snippets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a persistent model type, such as `Post` or `Admin::User`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelRef(String);

impl ModelRef {
    /// Creates a model reference from the given text.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }

    /// Returns the reference as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModelRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Reference to a request parameter bag, such as `params[:id]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamsRef(String);

impl ParamsRef {
    /// Creates a parameters reference from the given text.
    #[must_use]
    pub fn new(params: impl Into<String>) -> Self {
        Self(params.into())
    }

    /// Returns the reference as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamsRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamsRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ParamsRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Reference to the expression instance-level snippets act upon,
/// usually an instance variable such as `@post`.
///
/// The receiver is fixed once an emitter is created. Empty receivers are
/// accepted: this is a substitution target, not a checked identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiverRef(String);

impl ReceiverRef {
    /// Creates a receiver reference from the given text.
    #[must_use]
    pub fn new(receiver: impl Into<String>) -> Self {
        Self(receiver.into())
    }

    /// Returns the reference as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the receiver text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ReceiverRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiverRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ReceiverRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
