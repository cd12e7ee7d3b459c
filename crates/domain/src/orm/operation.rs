//! The seven ORM capabilities an emitter exposes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// An operation a snippet emitter can render.
///
/// Class-level operations act on a model reference; instance-level
/// operations act on the receiver an emitter was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrmOperation {
    /// Fetch the full collection of a model.
    All,
    /// Fetch a single record by identifier.
    Find,
    /// Construct a new, not yet persisted record.
    Build,
    /// Persist the receiver.
    Save,
    /// Mutate and persist the receiver.
    UpdateAttributes,
    /// Access validation failures on the receiver.
    Errors,
    /// Delete the receiver's record.
    Destroy,
}

impl OrmOperation {
    /// Returns all operations, class-level first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Find,
            Self::Build,
            Self::Save,
            Self::UpdateAttributes,
            Self::Errors,
            Self::Destroy,
        ]
    }

    /// Returns the operation's method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Find => "find",
            Self::Build => "build",
            Self::Save => "save",
            Self::UpdateAttributes => "update_attributes",
            Self::Errors => "errors",
            Self::Destroy => "destroy",
        }
    }

    /// Returns whether the operation acts on a model rather than a receiver.
    #[must_use]
    pub const fn is_class_level(self) -> bool {
        matches!(self, Self::All | Self::Find | Self::Build)
    }

    /// Returns whether the operation takes an optional params reference.
    #[must_use]
    pub const fn accepts_params(self) -> bool {
        matches!(self, Self::Find | Self::Build | Self::UpdateAttributes)
    }
}

impl fmt::Display for OrmOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrmOperation {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| DomainError::UnknownOperation(s.to_string()))
    }
}
