//! Scaffold controller actions and the ORM operations behind them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};
use crate::orm::OrmOperation;

/// One of the seven actions of a generated resource controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerAction {
    /// `GET index`
    Index,
    /// `GET show`
    Show,
    /// `GET new`
    New,
    /// `GET edit`
    Edit,
    /// `POST create`
    Create,
    /// `PUT update`
    Update,
    /// `DELETE destroy`
    Destroy,
}

impl ControllerAction {
    /// Returns all actions in the order a controller declares them.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Index,
            Self::Show,
            Self::New,
            Self::Edit,
            Self::Create,
            Self::Update,
            Self::Destroy,
        ]
    }

    /// Returns the action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Show => "show",
            Self::New => "new",
            Self::Edit => "edit",
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    /// Returns the HTTP method routed to this action.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::Index | Self::Show | Self::New | Self::Edit => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Destroy => HttpMethod::Delete,
        }
    }

    /// Returns the ORM operations the action body uses, in emission order.
    #[must_use]
    pub const fn operations(self) -> &'static [OrmOperation] {
        match self {
            Self::Index => &[OrmOperation::All],
            Self::Show | Self::Edit => &[OrmOperation::Find],
            Self::New => &[OrmOperation::Build],
            Self::Create => &[OrmOperation::Build, OrmOperation::Save, OrmOperation::Errors],
            Self::Update => &[
                OrmOperation::Find,
                OrmOperation::UpdateAttributes,
                OrmOperation::Errors,
            ],
            Self::Destroy => &[OrmOperation::Find, OrmOperation::Destroy],
        }
    }
}

impl fmt::Display for ControllerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.as_str())
    }
}

impl FromStr for ControllerAction {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let name = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| DomainError::UnknownAction(s.to_string()))
    }
}
