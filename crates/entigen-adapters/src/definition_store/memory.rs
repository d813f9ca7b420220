//! In-memory definition store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use entigen_core::application::ApplicationError;
use entigen_core::application::ports::DefinitionStore;
use entigen_core::domain::EntityDefinition;
use entigen_core::error::GenResult;

/// In-memory store keyed by entity name. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDefinitionStore {
    records: Arc<RwLock<HashMap<String, EntityDefinition>>>,
}

impl InMemoryDefinitionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a record (testing helper).
    pub fn insert(&self, definition: EntityDefinition) {
        self.records
            .write()
            .unwrap()
            .insert(definition.name.clone(), definition);
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DefinitionStore for InMemoryDefinitionStore {
    fn load(&self, entity_name: &str) -> GenResult<Option<EntityDefinition>> {
        let records = self
            .records
            .read()
            .map_err(|_| ApplicationError::StoreLock)?;
        Ok(records.get(entity_name).cloned())
    }

    fn save(&self, definition: &EntityDefinition) -> GenResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| ApplicationError::StoreLock)?;
        records.insert(definition.name.clone(), definition.clone());
        Ok(())
    }

    fn list(&self) -> GenResult<Vec<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| ApplicationError::StoreLock)?;
        let mut names: Vec<String> = records.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
