//! JSON-file definition store rooted at a service directory.
//!
//! Persisted state lives under `<service root>/.entigen/`: one
//! `<EntityName>.json` per entity plus `service.json` for the service-level
//! metadata. The files are pretty-printed camelCase JSON and double as the
//! cross-service contract read by [`crate::remote::FsServiceReader`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use entigen_core::application::ApplicationError;
use entigen_core::application::ports::DefinitionStore;
use entigen_core::domain::{EntityDefinition, ProjectContext};
use entigen_core::error::{GenError, GenResult};

use crate::{SERVICE_FILE, STORE_DIR};

/// Production definition store backed by `std::fs`.
#[derive(Debug, Clone)]
pub struct JsonDefinitionStore {
    root: PathBuf,
}

impl JsonDefinitionStore {
    /// Create a store for the service rooted at `root`. Nothing is touched
    /// on disk until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether the service at `root` has been initialised.
    pub fn is_initialised(root: &Path) -> bool {
        root.join(STORE_DIR).join(SERVICE_FILE).is_file()
    }

    /// Read the service metadata, `None` when the service is uninitialised.
    pub fn load_context(&self) -> GenResult<Option<ProjectContext>> {
        let path = self.store_dir().join(SERVICE_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let ctx = serde_json::from_str(&raw)
                    .map_err(|e| store_error(&path, format!("invalid service metadata: {e}")))?;
                Ok(Some(ctx))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e, "read service metadata")),
        }
    }

    /// Write the service metadata, creating the store directory if needed.
    pub fn save_context(&self, ctx: &ProjectContext) -> GenResult<()> {
        let dir = self.store_dir();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e, "create store directory"))?;

        let path = dir.join(SERVICE_FILE);
        let json = serde_json::to_string_pretty(ctx)
            .map_err(|e| store_error(&path, format!("serialize service metadata: {e}")))?;
        fs::write(&path, json + "\n").map_err(|e| io_error(&path, e, "write service metadata"))?;

        debug!(path = %path.display(), "service metadata written");
        Ok(())
    }

    fn store_dir(&self) -> PathBuf {
        self.root.join(STORE_DIR)
    }

    fn record_path(&self, entity_name: &str) -> PathBuf {
        self.store_dir().join(format!("{entity_name}.json"))
    }
}

impl DefinitionStore for JsonDefinitionStore {
    fn load(&self, entity_name: &str) -> GenResult<Option<EntityDefinition>> {
        let path = self.record_path(entity_name);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let def = serde_json::from_str(&raw)
                    .map_err(|e| store_error(&path, format!("invalid entity record: {e}")))?;
                Ok(Some(def))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e, "read entity record")),
        }
    }

    fn save(&self, definition: &EntityDefinition) -> GenResult<()> {
        let dir = self.store_dir();
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e, "create store directory"))?;

        let path = self.record_path(&definition.name);
        let json = serde_json::to_string_pretty(definition)
            .map_err(|e| store_error(&path, format!("serialize entity record: {e}")))?;
        fs::write(&path, json + "\n").map_err(|e| io_error(&path, e, "write entity record"))?;

        debug!(entity = %definition.name, path = %path.display(), "entity record written");
        Ok(())
    }

    fn list(&self) -> GenResult<Vec<String>> {
        let dir = self.store_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&dir, e, "list store directory")),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&dir, e, "list store directory"))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && format!("{stem}.json") != SERVICE_FILE
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn io_error(path: &Path, e: io::Error, operation: &str) -> GenError {
    store_error(path, format!("failed to {operation}: {e}"))
}

fn store_error(path: &Path, reason: String) -> GenError {
    ApplicationError::StoreIo {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigen_core::domain::{DtoKind, Field};
    use tempfile::TempDir;

    #[test]
    fn load_returns_none_for_unknown_entity() {
        let dir = TempDir::new().unwrap();
        let store = JsonDefinitionStore::new(dir.path());
        assert_eq!(store.load("Foo").unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonDefinitionStore::new(dir.path());

        let mut def = EntityDefinition::new("Foo");
        def.dto = DtoKind::Mapstruct;
        def.fields = vec![Field::new("title", "String")];
        def.changelog_date = Some("20260101120000".into());
        store.save(&def).unwrap();

        assert_eq!(store.load("Foo").unwrap(), Some(def));
    }

    #[test]
    fn records_are_camel_case_json_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonDefinitionStore::new(dir.path());
        store.save(&EntityDefinition::new("BankAccount")).unwrap();

        let raw =
            fs::read_to_string(dir.path().join(".entigen").join("BankAccount.json")).unwrap();
        assert!(raw.contains("\"name\": \"BankAccount\""));
        assert!(raw.contains("\"skipClient\""));
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn list_is_sorted_and_excludes_service_metadata() {
        let dir = TempDir::new().unwrap();
        let store = JsonDefinitionStore::new(dir.path());
        store.save(&EntityDefinition::new("Zebra")).unwrap();
        store.save(&EntityDefinition::new("Apple")).unwrap();
        store.save_context(&ProjectContext::new("myapp")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["Apple", "Zebra"]);
    }

    #[test]
    fn context_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonDefinitionStore::new(dir.path());
        assert!(store.load_context().unwrap().is_none());
        assert!(!JsonDefinitionStore::is_initialised(dir.path()));

        let mut ctx = ProjectContext::new("myapp");
        ctx.enable_translation = true;
        ctx.languages = vec!["en".into()];
        store.save_context(&ctx).unwrap();

        assert!(JsonDefinitionStore::is_initialised(dir.path()));
        assert_eq!(store.load_context().unwrap(), Some(ctx));
    }

    #[test]
    fn corrupt_record_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let store_dir = dir.path().join(".entigen");
        fs::create_dir_all(&store_dir).unwrap();
        fs::write(store_dir.join("Foo.json"), "{ not json").unwrap();

        let store = JsonDefinitionStore::new(dir.path());
        let err = store.load("Foo").unwrap_err();
        assert!(matches!(
            err,
            GenError::Application(ApplicationError::StoreIo { .. })
        ));
    }
}
