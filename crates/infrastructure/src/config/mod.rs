//! Generator configuration.
//!
//! Configuration names the ORM adapter to use and, optionally, the model,
//! receiver and params references to render with. It is loaded once and
//! handed to the caller; nothing reads it implicitly afterwards.

mod generator_config;
mod repository;

pub use generator_config::{DEFAULT_ORM, GeneratorConfig};
pub use repository::{ConfigError, ConfigFormat, ConfigRepository};
