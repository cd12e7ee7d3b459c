//! ActionORM Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete ORM adapters implementing the
//! emitter ports of the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod serialization;

pub use adapters::{ActiveRecordAdapter, DataMapperAdapter, builtin_registry};
pub use config::{ConfigError, ConfigFormat, ConfigRepository, GeneratorConfig};
pub use serialization::{SerializationError, from_json, from_yaml, to_json_stable};
