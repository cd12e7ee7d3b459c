//! Port definitions (interfaces)
//!
//! Ports define the boundary between snippet consumers and the ORM-specific
//! adapters implemented in the infrastructure layer.

mod orm_adapter;

pub use orm_adapter::{EmitError, EmitResult, OrmAdapter, RecordEmitter};
