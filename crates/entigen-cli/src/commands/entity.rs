//! Implementation of the `entigen entity` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core pipeline, and display results. No resolution logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use entigen_adapters::{FsServiceReader, JsonDefinitionStore, ScaffoldSink};
use entigen_core::domain::{DtoKind, Field, PaginationKind, ProjectContext, ServiceKind};
use entigen_core::prelude::{GenerationPipeline, GenerationRequest};

use crate::{
    cli::{DtoOption, EntityArgs, PaginationOption, ServiceOption, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `entigen entity` command.
///
/// Dispatch sequence:
/// 1. Validate the entity name
/// 2. Load the service metadata (must be initialised)
/// 3. Convert CLI args to a core `GenerationRequest`
/// 4. Run the pipeline (or plan it, for `--dry-run`)
/// 5. Print the generated artifact list
#[instrument(skip_all, fields(entity = %args.name))]
pub fn execute(
    args: EntityArgs,
    global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate name
    validate_entity_name(&args.name)?;

    // 2. Load service metadata
    let root = std::env::current_dir()?;
    let store = JsonDefinitionStore::new(&root);
    let ctx = store
        .load_context()?
        .ok_or_else(|| CliError::ServiceNotInitialised { path: root.clone() })?;

    debug!(
        app = %ctx.application_name,
        app_type = %ctx.application_type,
        "service metadata loaded"
    );

    // 3. Build the request
    let request = build_request(&args)?;

    // 4. Run
    let pipeline = GenerationPipeline::new(
        Box::new(store),
        Box::new(FsServiceReader::new()),
        Box::new(ScaffoldSink::new(&root)),
    );

    if args.dry_run {
        let outcome = pipeline.plan(&ctx, &request)?;
        output.info(&format!(
            "Dry run: '{}' would produce {} artifacts",
            outcome.definition.name,
            outcome.artifacts.len(),
        ))?;
        for artifact in &outcome.artifacts {
            output.print(&format!("  {artifact}"))?;
        }
        return Ok(());
    }

    output.header(&format!("Generating '{}'...", args.name))?;
    info!(entity = %args.name, "generation started");

    let outcome = pipeline.generate(&ctx, &request)?;

    info!(entity = %outcome.definition.name, run_id = %outcome.run_id, "generation completed");

    // 5. Success + artifact summary
    output.success(&format!(
        "Entity '{}' generated ({} artifacts)",
        outcome.definition.name,
        outcome.artifacts.len(),
    ))?;

    if !global.quiet {
        for artifact in &outcome.artifacts {
            output.print(&format!("  {artifact}"))?;
        }
        show_hints(&outcome.definition.name, &ctx, &output)?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &EntityArgs) -> CliResult<GenerationRequest> {
    let mut request = GenerationRequest {
        entity_name: args.name.clone(),
        ..Default::default()
    };

    request.options.angular_suffix = args.angular_suffix.clone();
    request.options.client_root_folder = args.client_root_folder.clone();
    request.options.skip_client = args.skip_client.then_some(true);
    request.options.skip_server = args.skip_server.then_some(true);

    request.answers.dto = args.dto.map(convert_dto);
    request.answers.service = args.service_layer.map(convert_service);
    request.answers.pagination = args.pagination.map(convert_pagination);
    request.answers.search_engine = args.search.then_some(true);

    if !args.fields.is_empty() {
        let fields = args
            .fields
            .iter()
            .map(|spec| parse_field(spec))
            .collect::<CliResult<Vec<_>>>()?;
        request.answers.fields = Some(fields);
    }

    if let Some(path) = &args.from_service {
        request.answers.use_remote_definition = true;
        request.answers.remote_service_path = Some(PathBuf::from(path));
    }

    Ok(request)
}

fn validate_entity_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidEntityName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(CliError::InvalidEntityName {
            name: name.into(),
            reason: "name must start with a letter".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CliError::InvalidEntityName {
            name: name.into(),
            reason: "name may only contain letters, digits, '-' and '_'".into(),
        });
    }
    Ok(())
}

/// Parse one `--field name:Type` pair.
fn parse_field(spec: &str) -> CliResult<Field> {
    let invalid = |reason: &str| CliError::InvalidInput {
        message: format!("field '{spec}' {reason} (expected name:Type, e.g. title:String)"),
        source: None,
    };

    let (name, field_type) = spec.split_once(':').ok_or_else(|| invalid("has no ':'"))?;
    if name.is_empty() || field_type.is_empty() {
        return Err(invalid("has an empty part"));
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with a letter"));
    }
    Ok(Field::new(name, field_type))
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_dto(dto: DtoOption) -> DtoKind {
    match dto {
        DtoOption::No => DtoKind::No,
        DtoOption::Yes => DtoKind::Yes,
        DtoOption::Mapstruct => DtoKind::Mapstruct,
    }
}

fn convert_service(service: ServiceOption) -> ServiceKind {
    match service {
        ServiceOption::No => ServiceKind::No,
        ServiceOption::ServiceClass => ServiceKind::ServiceClass,
        ServiceOption::ServiceImpl => ServiceKind::ServiceImpl,
    }
}

fn convert_pagination(pagination: PaginationOption) -> PaginationKind {
    match pagination {
        PaginationOption::No => PaginationKind::No,
        PaginationOption::Pagination => PaginationKind::Pagination,
        PaginationOption::InfiniteScroll => PaginationKind::InfiniteScroll,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_hints(name: &str, ctx: &ProjectContext, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  entigen entity {name} --dry-run   # inspect a regeneration"))?;
    if ctx.application_type == entigen_core::domain::ApplicationType::Microservice {
        out.print(&format!(
            "  entigen entity {name} --from-service <path>   # consume it from a gateway"
        ))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
