//! Adapter registry.
//!
//! Maps adapter ids to adapters. There is no global registry: callers build
//! one, resolve the adapter their configuration names, and pass it on.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::OrmAdapter;

/// Registry of ORM adapters keyed by [`OrmAdapter::id`].
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<&'static str, Arc<dyn OrmAdapter>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter under its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DuplicateAdapter`] if the id is taken.
    pub fn register<A>(&mut self, adapter: A) -> ApplicationResult<()>
    where
        A: OrmAdapter + 'static,
    {
        self.register_arc(Arc::new(adapter))
    }

    /// Registers an already shared adapter under its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DuplicateAdapter`] if the id is taken.
    pub fn register_arc(&mut self, adapter: Arc<dyn OrmAdapter>) -> ApplicationResult<()> {
        let id = adapter.id();
        if self.adapters.contains_key(id) {
            return Err(ApplicationError::DuplicateAdapter(id.to_string()));
        }

        tracing::debug!(adapter = id, "registered ORM adapter");
        self.adapters.insert(id, adapter);
        Ok(())
    }

    /// Returns the adapter registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::UnknownAdapter`] listing the registered
    /// ids if none matches.
    pub fn get(&self, id: &str) -> ApplicationResult<Arc<dyn OrmAdapter>> {
        let adapter = self
            .adapters
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::UnknownAdapter {
                id: id.to_string(),
                available: self.ids().into_iter().map(str::to_string).collect(),
            })?;

        tracing::debug!(adapter = id, "resolved ORM adapter");
        Ok(adapter)
    }

    /// Returns true if an adapter is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adapters.contains_key(id)
    }

    /// Returns the registered ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.adapters.keys().copied().collect()
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns true if no adapter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.ids())
            .finish()
    }
}
