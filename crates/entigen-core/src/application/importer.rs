//! Cross-service entity import.
//!
//! A gateway exposes entities it does not own. [`EntityImporter`] takes a
//! snapshot of the owning service's persisted record — fields and
//! relationships verbatim, ownership metadata filled in — and feeds it to
//! the option resolver as one more input layer. The remote store is never
//! written to, and no synchronization is implied: staleness is handled by
//! re-running generation.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::RemoteServiceReader;
use crate::domain::{EntityDefinition, naming};
use crate::error::GenResult;

/// One-shot importer over a [`RemoteServiceReader`].
pub struct EntityImporter<'a> {
    reader: &'a dyn RemoteServiceReader,
}

impl<'a> EntityImporter<'a> {
    pub fn new(reader: &'a dyn RemoteServiceReader) -> Self {
        Self { reader }
    }

    /// Snapshot an entity definition owned by the service at `remote_root`.
    ///
    /// The returned definition carries the remote record as-is, with
    /// `microservice_name` and `client_root_folder` defaulted from the
    /// remote service's application name when the record itself does not
    /// set them.
    ///
    /// # Errors
    ///
    /// - `RemoteServiceUnreachable` when `remote_root` is not a service.
    /// - `RemoteEntityNotFound` when the service has no record for the
    ///   entity.
    #[instrument(skip(self), fields(remote = %remote_root.display()))]
    pub fn import_from(
        &self,
        remote_root: &Path,
        entity_name: &str,
    ) -> GenResult<EntityDefinition> {
        let name = naming::pascal_case(entity_name);

        let remote_app = self.reader.application_name(remote_root)?;

        let mut definition = self
            .reader
            .load_definition(remote_root, &name)?
            .ok_or_else(|| ApplicationError::RemoteEntityNotFound {
                entity: name.clone(),
                path: remote_root.to_path_buf(),
            })?;

        // The record's own values win; the remote application name is only
        // the fallback attribution.
        definition.microservice_name.get_or_insert(remote_app.clone());
        definition.client_root_folder.get_or_insert(remote_app);

        debug!(
            entity = %definition.name,
            owner = definition.microservice_name.as_deref().unwrap_or_default(),
            "imported remote definition"
        );

        Ok(definition)
    }
}
