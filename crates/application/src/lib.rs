//! ActionORM Application - Emitter ports and use cases
//!
//! This crate defines the application layer with:
//! - The emitter contract every ORM adapter implements
//! - The adapter registry used to select an adapter by id
//! - Use cases that render controller actions through an adapter
//! - Application-level error handling

pub mod base;
pub mod error;
pub mod ports;
pub mod registry;
pub mod use_cases;

pub use base::{UnimplementedAdapter, UnimplementedEmitter};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{EmitError, EmitResult, OrmAdapter, RecordEmitter};
pub use registry::AdapterRegistry;
pub use use_cases::{
    ActionSnippets, EmitControllerAction, EmitControllerActionInput, EmittedSnippet,
};
