//! ActionORM Domain - Core vocabulary
//!
//! This crate defines the references, operations and controller actions
//! shared by every ORM snippet emitter.
//! All types here are pure Rust with no I/O dependencies.

pub mod controller;
pub mod error;
pub mod orm;

pub use controller::{ControllerAction, HttpMethod};
pub use error::{DomainError, DomainResult};
pub use orm::{ModelRef, OrmOperation, ParamsRef, ReceiverRef};
