//! The generation pipeline - main application orchestrator.
//!
//! Sequences one entity generation run:
//! 1. load the persisted definition (if any)
//! 2. import the remote definition (gateway topology, when requested)
//! 3. resolve options into the canonical definition
//! 4. resolve the artifact set
//! 5. persist the definition
//! 6. hand the artifact list to the external rendering collaborator
//!
//! Any resolution failure aborts before step 5: nothing is persisted and no
//! file is written. The pipeline is strictly sequential per entity; distinct
//! entities may be generated independently since they target disjoint store
//! records and disjoint artifact paths.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::application::importer::EntityImporter;
use crate::application::ports::{ArtifactSink, DefinitionStore, RemoteServiceReader};
use crate::domain::{ArtifactDescriptor, DomainError, EntityDefinition, ProjectContext};
use crate::error::GenResult;
use crate::resolver::{EntityAnswers, ExplicitOptions, resolve_artifacts, resolve_options};

/// Inputs of one generation run for one entity.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub entity_name: String,
    pub options: ExplicitOptions,
    pub answers: EntityAnswers,
}

/// Result of a completed (or planned) run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Instance identity of this run, for log correlation.
    pub run_id: Uuid,
    pub definition: EntityDefinition,
    pub artifacts: Vec<ArtifactDescriptor>,
}

/// Main generation orchestrator, wired with driven-port adapters.
pub struct GenerationPipeline {
    store: Box<dyn DefinitionStore>,
    remote: Box<dyn RemoteServiceReader>,
    sink: Box<dyn ArtifactSink>,
}

impl GenerationPipeline {
    pub fn new(
        store: Box<dyn DefinitionStore>,
        remote: Box<dyn RemoteServiceReader>,
        sink: Box<dyn ArtifactSink>,
    ) -> Self {
        Self {
            store,
            remote,
            sink,
        }
    }

    /// Run the full pipeline: resolve, persist, hand off to the sink.
    #[instrument(skip_all, fields(entity = %request.entity_name))]
    pub fn generate(
        &self,
        ctx: &ProjectContext,
        request: &GenerationRequest,
    ) -> GenResult<GenerationOutcome> {
        let mut outcome = self.resolve(ctx, request)?;
        outcome.run_id = Uuid::new_v4();

        self.store.save(&outcome.definition)?;
        self.sink.accept(&outcome.definition, &outcome.artifacts)?;

        info!(
            run_id = %outcome.run_id,
            artifacts = outcome.artifacts.len(),
            "generation completed"
        );
        Ok(outcome)
    }

    /// Resolve without persisting or writing anything (dry run).
    #[instrument(skip_all, fields(entity = %request.entity_name))]
    pub fn plan(
        &self,
        ctx: &ProjectContext,
        request: &GenerationRequest,
    ) -> GenResult<GenerationOutcome> {
        self.resolve(ctx, request)
    }

    /// Names of all entities persisted in the local store.
    pub fn persisted_entities(&self) -> GenResult<Vec<String>> {
        self.store.list()
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn resolve(
        &self,
        ctx: &ProjectContext,
        request: &GenerationRequest,
    ) -> GenResult<GenerationOutcome> {
        let persisted = self.store.load(&request.entity_name)?;
        if persisted.is_some() {
            info!("regenerating from persisted definition");
        }

        let imported = if request.answers.use_remote_definition {
            let path = request.answers.remote_service_path.as_deref().ok_or(
                DomainError::MissingDependency {
                    field: "microservicePath",
                    reason: "a remote definition was requested without a service path".into(),
                },
            )?;
            Some(EntityImporter::new(self.remote.as_ref())
                .import_from(path, &request.entity_name)?)
        } else {
            None
        };

        let mut definition = resolve_options(
            &request.entity_name,
            &request.options,
            &request.answers,
            persisted.as_ref(),
            imported.as_ref(),
            ctx,
        )?;

        // First generation of this entity: stamp it. The stamp is kept
        // verbatim by every later run.
        if definition.changelog_date.is_none() {
            definition.changelog_date = Some(Utc::now().format("%Y%m%d%H%M%S").to_string());
        }

        let artifacts = resolve_artifacts(&definition, ctx)?;

        Ok(GenerationOutcome {
            run_id: Uuid::nil(),
            definition,
            artifacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockArtifactSink, MockDefinitionStore, MockRemoteServiceReader};
    use crate::domain::{ApplicationType, DtoKind, Field, ServiceKind};
    use crate::error::GenError;
    use mockall::predicate::eq;

    fn monolith() -> ProjectContext {
        ProjectContext::new("myapp")
    }

    fn request(name: &str) -> GenerationRequest {
        GenerationRequest {
            entity_name: name.into(),
            ..Default::default()
        }
    }

    fn pipeline(
        store: MockDefinitionStore,
        remote: MockRemoteServiceReader,
        sink: MockArtifactSink,
    ) -> GenerationPipeline {
        GenerationPipeline::new(Box::new(store), Box::new(remote), Box::new(sink))
    }

    #[test]
    fn generate_persists_then_hands_artifacts_to_sink() {
        let mut store = MockDefinitionStore::new();
        store
            .expect_load()
            .with(eq("Foo"))
            .times(1)
            .returning(|_| Ok(None));
        store
            .expect_save()
            .withf(|def: &EntityDefinition| {
                def.name == "Foo" && def.changelog_date.is_some()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut sink = MockArtifactSink::new();
        sink.expect_accept()
            .withf(|_, artifacts: &[ArtifactDescriptor]| !artifacts.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let p = pipeline(store, MockRemoteServiceReader::new(), sink);
        let outcome = p.generate(&monolith(), &request("Foo")).unwrap();
        assert!(!outcome.run_id.is_nil());
    }

    #[test]
    fn resolution_failure_aborts_before_any_write() {
        let mut store = MockDefinitionStore::new();
        store.expect_load().returning(|_| Ok(None));
        // Neither save nor accept may be called.
        store.expect_save().times(0);
        let mut sink = MockArtifactSink::new();
        sink.expect_accept().times(0);

        let mut req = request("Foo");
        req.answers.dto = Some(DtoKind::Mapstruct);
        req.answers.service = Some(ServiceKind::No);

        let p = pipeline(store, MockRemoteServiceReader::new(), sink);
        let err = p.generate(&monolith(), &req).unwrap_err();
        assert!(matches!(err, GenError::Domain(_)));
    }

    #[test]
    fn plan_never_persists() {
        let mut store = MockDefinitionStore::new();
        store.expect_load().returning(|_| Ok(None));
        store.expect_save().times(0);
        let mut sink = MockArtifactSink::new();
        sink.expect_accept().times(0);

        let p = pipeline(store, MockRemoteServiceReader::new(), sink);
        let outcome = p.plan(&monolith(), &request("Foo")).unwrap();
        assert!(!outcome.artifacts.is_empty());
    }

    #[test]
    fn gateway_run_imports_and_suppresses_server_artifacts() {
        let mut ctx = ProjectContext::new("gatewayApp");
        ctx.application_type = ApplicationType::Gateway;
        ctx.enable_translation = true;
        ctx.languages = vec!["en".into()];

        let mut store = MockDefinitionStore::new();
        store.expect_load().returning(|_| Ok(None));
        store
            .expect_save()
            .withf(|def: &EntityDefinition| {
                def.client_root_folder.as_deref() == Some("sampleService")
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut remote = MockRemoteServiceReader::new();
        remote
            .expect_application_name()
            .returning(|_| Ok("sampleService".into()));
        remote.expect_load_definition().returning(|_, _| {
            let mut def = EntityDefinition::new("Bar");
            def.fields = vec![Field::new("amount", "Long")];
            Ok(Some(def))
        });

        let mut sink = MockArtifactSink::new();
        sink.expect_accept().returning(|_, _| Ok(()));

        let mut req = request("Bar");
        req.answers.use_remote_definition = true;
        req.answers.remote_service_path = Some("../remote".into());

        let p = pipeline(store, remote, sink);
        let outcome = p.generate(&ctx, &req).unwrap();

        use crate::domain::ArtifactCategory;
        assert!(
            outcome
                .artifacts
                .iter()
                .all(|a| a.category != ArtifactCategory::Server)
        );
        assert!(
            outcome
                .artifacts
                .iter()
                .any(|a| a.path == "client/src/i18n/en/sampleServiceBar.json")
        );
    }

    #[test]
    fn remote_request_without_path_is_missing_dependency() {
        let mut store = MockDefinitionStore::new();
        store.expect_load().returning(|_| Ok(None));

        let mut req = request("Bar");
        req.answers.use_remote_definition = true;

        let p = pipeline(store, MockRemoteServiceReader::new(), MockArtifactSink::new());
        let err = p.plan(&monolith(), &req).unwrap_err();
        assert!(matches!(
            err,
            GenError::Domain(DomainError::MissingDependency { .. })
        ));
    }

    #[test]
    fn planning_twice_yields_identical_artifact_lists() {
        let mut store = MockDefinitionStore::new();
        let persisted = {
            let mut def = EntityDefinition::new("Foo");
            def.dto = DtoKind::Mapstruct;
            def.service = ServiceKind::ServiceClass;
            def.changelog_date = Some("20260101000000".into());
            def
        };
        let persisted_clone = persisted.clone();
        store
            .expect_load()
            .returning(move |_| Ok(Some(persisted_clone.clone())));

        let p = pipeline(store, MockRemoteServiceReader::new(), MockArtifactSink::new());
        let first = p.plan(&monolith(), &request("Foo")).unwrap();
        let second = p.plan(&monolith(), &request("Foo")).unwrap();
        assert_eq!(first.artifacts, second.artifacts);
        assert_eq!(first.definition, second.definition);
    }
}
