//! Option resolution: merging input layers into one canonical definition.
//!
//! Five layers feed a resolution pass, highest precedence first:
//!
//! 1. explicit invocation options (deliberate operator intent, never
//!    silently overridden by stale state),
//! 2. interactively collected answers,
//! 3. an imported remote definition (identity and ownership fields only —
//!    fields, relationships, owning service, client root default),
//! 4. the previously persisted local definition,
//! 5. built-in defaults.
//!
//! The output is the canonical [`EntityDefinition`] for this run. Resolution
//! is side-effect free; persisting the result is the pipeline's job.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{
    ApplicationType, DatabaseType, DomainError, DtoKind, EntityDefinition, Field, PaginationKind,
    ProjectContext, Relationship, ServiceKind, naming,
};

/// Options passed explicitly on the invocation (CLI flags).
///
/// Every field is optional: absence means "no operator intent", letting
/// lower-precedence layers win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplicitOptions {
    pub angular_suffix: Option<String>,
    pub client_root_folder: Option<String>,
    pub skip_client: Option<bool>,
    pub skip_server: Option<bool>,
}

/// One immutable record of interactively collected answers, consumed once
/// per resolution pass. The prompting subsystem that produces it is an
/// external collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityAnswers {
    pub dto: Option<DtoKind>,
    pub service: Option<ServiceKind>,
    pub pagination: Option<PaginationKind>,
    pub search_engine: Option<bool>,
    pub fields: Option<Vec<Field>>,
    pub relationships: Option<Vec<Relationship>>,
    /// Import the definition from another service instead of authoring it
    /// locally (gateway topology).
    pub use_remote_definition: bool,
    /// Relative path to the owning service's root.
    pub remote_service_path: Option<PathBuf>,
}

/// Merge all input layers into the canonical definition for this run.
///
/// # Errors
///
/// - `InvalidDefinition` when the requested name disagrees with the
///   persisted identity (regeneration must never rename).
/// - `ConfigurationConflict` for mutually exclusive options
///   (`dto = mapstruct` with `service = no`).
/// - `MissingDependency` when a non-locally-owned entity has no derivable
///   client root folder.
pub fn resolve_options(
    entity_name: &str,
    explicit: &ExplicitOptions,
    answers: &EntityAnswers,
    persisted: Option<&EntityDefinition>,
    imported: Option<&EntityDefinition>,
    ctx: &ProjectContext,
) -> Result<EntityDefinition, DomainError> {
    let name = naming::pascal_case(entity_name);

    if let Some(prev) = persisted
        && prev.name != name
    {
        return Err(DomainError::InvalidDefinition(format!(
            "entity is persisted as '{}'; regeneration cannot rename it to '{}'",
            prev.name, name
        )));
    }

    let mut def = EntityDefinition::new(&name);

    // Structure: an imported definition is authoritative for fields and
    // relationships (read-only reference to the owning service's record);
    // otherwise fresh answers win over the persisted record.
    if let Some(remote) = imported {
        def.fields = remote.fields.clone();
        def.relationships = remote.relationships.clone();
    } else {
        def.fields = answers
            .fields
            .clone()
            .or_else(|| persisted.map(|p| p.fields.clone()))
            .unwrap_or_default();
        def.relationships = answers
            .relationships
            .clone()
            .or_else(|| persisted.map(|p| p.relationships.clone()))
            .unwrap_or_default();
    }

    // Behavior options: answers > persisted > default. The imported layer
    // deliberately contributes nothing here — how a gateway presents a
    // remote entity is a local choice.
    def.dto = answers.dto.or(persisted.map(|p| p.dto)).unwrap_or_default();
    def.service = answers
        .service
        .or(persisted.map(|p| p.service))
        .unwrap_or_default();
    def.pagination = answers
        .pagination
        .or(persisted.map(|p| p.pagination))
        .unwrap_or_default();
    def.search_engine = answers
        .search_engine
        .or(persisted.map(|p| p.search_engine))
        .unwrap_or(ctx.search_engine);

    // Cassandra has no offset queries; quietly fall back to plain lists.
    if ctx.database_type == DatabaseType::Cassandra && def.pagination != PaginationKind::No {
        debug!(entity = %name, "pagination unsupported on cassandra, downgrading to none");
        def.pagination = PaginationKind::No;
    }

    def.angular_suffix = non_empty(explicit.angular_suffix.clone())
        .or_else(|| persisted.and_then(|p| p.angular_suffix.clone()));

    def.skip_client = explicit
        .skip_client
        .or(persisted.map(|p| p.skip_client))
        .unwrap_or(false)
        // A microservice has no client tier of its own.
        || ctx.application_type == ApplicationType::Microservice;
    def.skip_server = explicit
        .skip_server
        .or(persisted.map(|p| p.skip_server))
        .unwrap_or(false);

    // Ownership: a microservice stamps its own name so that importing
    // gateways can attribute the entity; a gateway inherits it from the
    // imported record.
    def.microservice_name = imported
        .and_then(|r| r.microservice_name.clone())
        .or_else(|| persisted.and_then(|p| p.microservice_name.clone()))
        .or_else(|| {
            (ctx.application_type == ApplicationType::Microservice)
                .then(|| ctx.application_name.clone())
        });

    // Client root folder: an explicit flag always wins; a previously
    // persisted local override beats a freshly imported default; the remote
    // value is used only when nothing local exists. Locally-owned entities
    // in a monolith or gateway stay unprefixed (no root persisted), while a
    // microservice persists its own name — that is the value an importing
    // gateway needs.
    def.client_root_folder = non_empty(explicit.client_root_folder.clone())
        .or_else(|| persisted.and_then(|p| p.client_root_folder.clone()))
        .or_else(|| imported.and_then(|r| r.client_root_folder.clone()))
        .or_else(|| {
            (ctx.application_type == ApplicationType::Microservice)
                .then(|| ctx.application_name.clone())
        });

    if def.is_remote()
        && ctx.application_type == ApplicationType::Gateway
        && def.client_root_folder.is_none()
    {
        return Err(DomainError::MissingDependency {
            field: "clientRootFolder",
            reason: format!(
                "entity '{}' is owned by another service and no root folder could be derived \
                 (no explicit value, no persisted value, no importable remote value)",
                name
            ),
        });
    }

    // First-generation timestamp survives regeneration; the pipeline stamps
    // it when absent.
    def.changelog_date = persisted
        .and_then(|p| p.changelog_date.clone())
        .or_else(|| imported.and_then(|r| r.changelog_date.clone()));

    def.validate()?;
    Ok(def)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
