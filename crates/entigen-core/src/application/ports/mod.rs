//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the generation pipeline needs from the outside
//! world. The `entigen-adapters` crate provides the implementations; tests
//! use mockall mocks or the in-memory adapters.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ArtifactDescriptor, EntityDefinition};
use crate::error::GenResult;

/// Port for the local service's persisted entity records.
///
/// The store is the single source of truth across invocations: one record
/// per entity, addressed by entity name. Records are created or overwritten,
/// never deleted by this subsystem.
#[cfg_attr(test, automock)]
pub trait DefinitionStore: Send + Sync {
    /// Load the persisted record for an entity, `None` if never generated.
    fn load(&self, entity_name: &str) -> GenResult<Option<EntityDefinition>>;

    /// Persist the canonical definition, replacing any previous record.
    fn save(&self, definition: &EntityDefinition) -> GenResult<()>;

    /// Names of all persisted entities, sorted.
    fn list(&self) -> GenResult<Vec<String>>;
}

/// Read-only access to another service's persisted state.
///
/// Used by the cross-service importer in gateway topologies. Reads the
/// remote service's store through the shared file-format contract; never
/// writes to it and shares no process state with it.
#[cfg_attr(test, automock)]
pub trait RemoteServiceReader: Send + Sync {
    /// Application name recorded in the remote service's metadata.
    ///
    /// # Errors
    ///
    /// `RemoteServiceUnreachable` when the path is not a valid service root.
    fn application_name(&self, service_root: &Path) -> GenResult<String>;

    /// Load an entity record from the remote store, `None` if absent.
    ///
    /// # Errors
    ///
    /// `RemoteServiceUnreachable` when the path is not a valid service root.
    fn load_definition(
        &self,
        service_root: &Path,
        entity_name: &str,
    ) -> GenResult<Option<EntityDefinition>>;
}

/// Port for the external rendering/writing collaborator.
///
/// The pipeline hands over the resolved artifact list exactly once per run,
/// after the definition has been persisted.
#[cfg_attr(test, automock)]
pub trait ArtifactSink: Send + Sync {
    fn accept(
        &self,
        definition: &EntityDefinition,
        artifacts: &[ArtifactDescriptor],
    ) -> GenResult<()>;
}
