//! Filesystem-based remote service reader.
//!
//! Reads another service's `.entigen/` store through the same JSON contract
//! [`JsonDefinitionStore`](crate::JsonDefinitionStore) writes. Strictly
//! read-only; the two services share no process state.

use std::path::Path;

use tracing::debug;

use entigen_core::application::ApplicationError;
use entigen_core::application::ports::{DefinitionStore, RemoteServiceReader};
use entigen_core::domain::EntityDefinition;
use entigen_core::error::GenResult;

use crate::definition_store::JsonDefinitionStore;

/// Production reader over a remote service root on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsServiceReader;

impl FsServiceReader {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, service_root: &Path) -> GenResult<JsonDefinitionStore> {
        if !JsonDefinitionStore::is_initialised(service_root) {
            return Err(ApplicationError::RemoteServiceUnreachable {
                path: service_root.to_path_buf(),
                reason: "no service metadata found (is the path a generated service root?)".into(),
            }
            .into());
        }
        Ok(JsonDefinitionStore::new(service_root))
    }
}

impl RemoteServiceReader for FsServiceReader {
    fn application_name(&self, service_root: &Path) -> GenResult<String> {
        let store = self.open(service_root)?;
        let ctx = store.load_context()?.ok_or_else(|| {
            ApplicationError::RemoteServiceUnreachable {
                path: service_root.to_path_buf(),
                reason: "service metadata disappeared while reading".into(),
            }
        })?;
        debug!(remote = %service_root.display(), app = %ctx.application_name, "remote service resolved");
        Ok(ctx.application_name)
    }

    fn load_definition(
        &self,
        service_root: &Path,
        entity_name: &str,
    ) -> GenResult<Option<EntityDefinition>> {
        let store = self.open(service_root)?;
        store.load(entity_name)
    }
}
