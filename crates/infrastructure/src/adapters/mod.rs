//! Infrastructure adapters
//!
//! One adapter per supported ORM. Each renders Ruby source text; the
//! references it receives are interpolated verbatim.

mod active_record;
mod data_mapper;

use actionorm_application::{AdapterRegistry, ApplicationResult};
use actionorm_domain::ParamsRef;

pub use active_record::ActiveRecordAdapter;
pub use data_mapper::DataMapperAdapter;

/// Returns a registry holding every built-in adapter.
///
/// # Errors
///
/// Returns an error if two built-in adapters share an id.
pub fn builtin_registry() -> ApplicationResult<AdapterRegistry> {
    let mut registry = AdapterRegistry::new();
    registry.register(ActiveRecordAdapter::new())?;
    registry.register(DataMapperAdapter::new())?;
    Ok(registry)
}

/// Renders `target.method` or `target.method(params)`.
fn invoke(target: &str, method: &str, params: Option<&ParamsRef>) -> String {
    match params {
        Some(params) => format!("{target}.{method}({params})"),
        None => format!("{target}.{method}"),
    }
}
