//! End-to-end pipeline tests over the real filesystem adapters.

use std::fs;

use tempfile::TempDir;

use entigen_adapters::{FsServiceReader, JsonDefinitionStore, MemorySink, ScaffoldSink};
use entigen_core::prelude::*;

fn pipeline_for(service_root: &std::path::Path, output_root: &std::path::Path) -> GenerationPipeline {
    GenerationPipeline::new(
        Box::new(JsonDefinitionStore::new(service_root)),
        Box::new(FsServiceReader::new()),
        Box::new(ScaffoldSink::new(output_root)),
    )
}

fn monolith_ctx() -> ProjectContext {
    let mut ctx = ProjectContext::new("myapp");
    ctx.enable_translation = true;
    ctx.languages = vec!["en".into(), "fr".into()];
    ctx
}

#[test]
fn full_monolith_generation_run() {
    let service = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let pipeline = pipeline_for(service.path(), output.path());

    let mut request = GenerationRequest {
        entity_name: "Foo".into(),
        ..Default::default()
    };
    request.answers.fields = Some(vec![Field::new("title", "String")]);
    request.answers.dto = Some(DtoKind::Mapstruct);
    request.answers.service = Some(ServiceKind::ServiceImpl);
    request.answers.pagination = Some(PaginationKind::Pagination);

    let outcome = pipeline.generate(&monolith_ctx(), &request).unwrap();

    // Persisted record is readable camelCase JSON.
    let record =
        fs::read_to_string(service.path().join(".entigen/Foo.json")).expect("record written");
    assert!(record.contains("\"dto\": \"mapstruct\""));
    assert!(record.contains("\"changelogDate\""));

    // Server, client and i18n stubs land at their resolved paths.
    for path in [
        "server/src/repository/foo_repository.rs",
        "server/src/web/rest/foo_resource.rs",
        "server/src/service/foo_service.rs",
        "server/src/service/impl/foo_service_impl.rs",
        "server/src/service/dto/foo_dto.rs",
        "server/src/service/mapper/foo_mapper.rs",
        "client/src/app/entities/foo/foo.model.ts",
        "client/src/app/entities/foo/foo.component.ts",
        "client/src/app/entities/foo/foo.pagination.ts",
        "client/src/i18n/en/foo.json",
        "client/src/i18n/fr/foo.json",
    ] {
        assert!(output.path().join(path).is_file(), "missing artifact: {path}");
    }

    assert_eq!(outcome.definition.name, "Foo");
    assert!(!outcome.run_id.is_nil());
}

#[test]
fn regeneration_reuses_persisted_options_and_stamp() {
    let service = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let pipeline = pipeline_for(service.path(), output.path());
    let ctx = monolith_ctx();

    let mut request = GenerationRequest {
        entity_name: "Foo".into(),
        ..Default::default()
    };
    request.answers.service = Some(ServiceKind::ServiceClass);
    let first = pipeline.generate(&ctx, &request).unwrap();

    // Second run answers nothing; everything comes from the record.
    let again = GenerationRequest {
        entity_name: "Foo".into(),
        ..Default::default()
    };
    let second = pipeline.generate(&ctx, &again).unwrap();

    assert_eq!(second.definition.service, ServiceKind::ServiceClass);
    assert_eq!(second.definition.changelog_date, first.definition.changelog_date);
    assert_eq!(second.artifacts, first.artifacts);
}

#[test]
fn gateway_imports_from_a_real_microservice_store() {
    // The owning microservice generates Bar first.
    let micro = TempDir::new().unwrap();
    let micro_out = TempDir::new().unwrap();
    let mut micro_ctx = ProjectContext::new("sampleService");
    micro_ctx.application_type = ApplicationType::Microservice;
    JsonDefinitionStore::new(micro.path())
        .save_context(&micro_ctx)
        .unwrap();

    let micro_pipeline = pipeline_for(micro.path(), micro_out.path());
    let mut request = GenerationRequest {
        entity_name: "Bar".into(),
        ..Default::default()
    };
    request.answers.fields = Some(vec![Field::new("amount", "Long")]);
    let owned = micro_pipeline.generate(&micro_ctx, &request).unwrap();
    assert!(owned.definition.skip_client);
    assert_eq!(
        owned.definition.microservice_name.as_deref(),
        Some("sampleService")
    );

    // The gateway imports it by path.
    let gateway = TempDir::new().unwrap();
    let gateway_out = TempDir::new().unwrap();
    let mut gateway_ctx = ProjectContext::new("gatewayApp");
    gateway_ctx.application_type = ApplicationType::Gateway;
    gateway_ctx.enable_translation = true;
    gateway_ctx.languages = vec!["en".into()];

    let gateway_pipeline = pipeline_for(gateway.path(), gateway_out.path());
    let mut import = GenerationRequest {
        entity_name: "Bar".into(),
        ..Default::default()
    };
    import.answers.use_remote_definition = true;
    import.answers.remote_service_path = Some(micro.path().to_path_buf());

    let outcome = gateway_pipeline.generate(&gateway_ctx, &import).unwrap();

    assert_eq!(outcome.definition.fields, owned.definition.fields);
    assert_eq!(
        outcome.definition.client_root_folder.as_deref(),
        Some("sampleService")
    );

    // Client-only output, namespaced under the owning service.
    assert!(
        outcome
            .artifacts
            .iter()
            .all(|a| a.category != ArtifactCategory::Server)
    );
    assert!(
        gateway_out
            .path()
            .join("client/src/app/entities/sampleService/bar/bar.model.ts")
            .is_file()
    );
    assert!(
        gateway_out
            .path()
            .join("client/src/i18n/en/sampleServiceBar.json")
            .is_file()
    );
}

#[test]
fn import_from_uninitialised_path_fails_without_writes() {
    let service = TempDir::new().unwrap();
    let nowhere = TempDir::new().unwrap();
    let sink = MemorySink::new();

    let mut ctx = ProjectContext::new("gatewayApp");
    ctx.application_type = ApplicationType::Gateway;

    let pipeline = GenerationPipeline::new(
        Box::new(JsonDefinitionStore::new(service.path())),
        Box::new(FsServiceReader::new()),
        Box::new(sink.clone()),
    );

    let mut request = GenerationRequest {
        entity_name: "Bar".into(),
        ..Default::default()
    };
    request.answers.use_remote_definition = true;
    request.answers.remote_service_path = Some(nowhere.path().to_path_buf());

    let err = pipeline.generate(&ctx, &request).unwrap_err();
    assert!(matches!(err, GenError::Application(_)));
    assert!(!service.path().join(".entigen/Bar.json").exists());
    assert!(sink.accepted().is_empty());
}
