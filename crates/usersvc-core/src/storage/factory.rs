//! Backend factory

use crate::error::{Result, StoreError};
use crate::events::LogEventSink;
use crate::ports::{EventSink, UserStore};
use crate::storage::MemoryStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Tag of the in-memory backend
pub const MOCKDB: &str = "mockdb";

/// Builds a store from a connection descriptor and the sink it should emit to
pub type StoreConstructor =
    Box<dyn Fn(&str, Arc<dyn EventSink>) -> Result<Arc<dyn UserStore>> + Send + Sync>;

/// Maps backend tags to constructors.
///
/// Adding a backend means registering a tag; callers of [`construct`] do not
/// change. Unknown tags are an error and never fall back to another backend.
///
/// [`construct`]: StoreFactory::construct
pub struct StoreFactory {
    constructors: HashMap<String, StoreConstructor>,
    events: Arc<dyn EventSink>,
}

impl StoreFactory {
    /// Empty factory; nothing is constructible until registered
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self {
            constructors: HashMap::new(),
            events,
        }
    }

    /// Factory with every built-in backend registered
    pub fn with_defaults(events: Arc<dyn EventSink>) -> Self {
        let mut factory = Self::new(events);
        factory.register(MOCKDB, |_connection, events| {
            Ok(Arc::new(MemoryStore::with_sink(events)) as Arc<dyn UserStore>)
        });
        factory
    }

    /// Register (or replace) the constructor for `tag`
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: Fn(&str, Arc<dyn EventSink>) -> Result<Arc<dyn UserStore>> + Send + Sync + 'static,
    {
        let tag = tag.into();
        if self.constructors.contains_key(&tag) {
            warn!("Replacing storage backend constructor for {}", tag);
        }
        self.constructors.insert(tag, Box::new(constructor));
    }

    /// Registered backend tags, sorted
    pub fn backends(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Construct the backend registered under `backend_type`
    pub fn construct(&self, backend_type: &str, connection: &str) -> Result<Arc<dyn UserStore>> {
        let constructor = self
            .constructors
            .get(backend_type)
            .ok_or_else(|| StoreError::BackendUnavailable(backend_type.to_string()))?;

        info!("Constructing {} storage backend", backend_type);
        constructor(connection, self.events.clone())
    }
}

impl Default for StoreFactory {
    fn default() -> Self {
        Self::with_defaults(Arc::new(LogEventSink))
    }
}
