//! The canonical entity configuration model.
//!
//! [`EntityDefinition`] is the aggregate this whole crate revolves around:
//! one record per entity, created on first generation, read back and
//! re-persisted on every subsequent run. Its serde representation **is** the
//! persisted wire contract — a record written by one service must be readable
//! as-is by an importing gateway, so field names and optionality here may not
//! change casually.
//!
//! ## Invariants (enforced by `validate()`)
//!
//! 1. `name` is non-empty PascalCase identity, immutable once persisted
//!    (checked by the option resolver against the stored record).
//! 2. `dto = mapstruct` requires a service layer (`service != no`).
//! 3. `client_root_folder` must be derivable whenever the entity is not
//!    owned by the generating service (checked during option resolution,
//!    where the derivation sources are available).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::naming;

/// How DTOs are generated for an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DtoKind {
    /// No DTO layer; resources expose the entity directly.
    #[default]
    No,
    /// Plain DTO record without generated mapping code.
    Yes,
    /// DTO record plus a generated mapper.
    Mapstruct,
}

/// Shape of the generated service layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceKind {
    /// Resources call the repository directly.
    #[default]
    No,
    /// A single concrete service class.
    ServiceClass,
    /// A service interface plus an implementation class.
    ServiceImpl,
}

/// Listing/query style for the entity's collection endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaginationKind {
    /// Unpaged list.
    #[default]
    No,
    /// Page-based controls (page links, page size).
    Pagination,
    /// Scroll-trigger loading.
    #[serde(rename = "infinite-scroll")]
    InfiniteScroll,
}

/// Relationship cardinality between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OneToOne => "one-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
        };
        f.write_str(s)
    }
}

/// One field of an entity. Order within the definition is significant: it
/// drives generated column and form-field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    /// Logical type identifier ("String", "Long", "Boolean", ...). Kept as a
    /// free string so the template layer owns the type vocabulary.
    pub field_type: String,
    /// Validation rule identifiers ("required", "maxlength=50", ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<String>,
    /// Allowed values when `field_type` names an enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            validation: Vec::new(),
            enum_values: None,
        }
    }
}

/// A relationship from this entity to another. Ordered, like fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub relationship_type: RelationshipKind,
    pub other_entity_name: String,
    /// Whether this side owns the relationship (holds the foreign key /
    /// join table).
    pub owner_side: bool,
    /// Name of the mirror relationship on the other entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_entity_relationship_name: Option<String>,
}

/// Canonical, persisted description of one entity.
///
/// The in-memory value is owned by a single pipeline run; the persisted
/// record in the [`DefinitionStore`](crate::application::ports::DefinitionStore)
/// is the source of truth across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    /// PascalCase identity, unique within a service. Immutable once first
    /// persisted.
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,

    #[serde(default)]
    pub dto: DtoKind,

    #[serde(default)]
    pub service: ServiceKind,

    #[serde(default)]
    pub pagination: PaginationKind,

    /// Suffix appended to generated client route/module identifiers, used to
    /// disambiguate colliding entity names on a shared client tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_suffix: Option<String>,

    /// Namespace prefix for client artifact paths. Required (auto-derived)
    /// whenever the entity is not owned by the generating service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_root_folder: Option<String>,

    /// Set when the entity's canonical definition lives in another service
    /// (the owning microservice's application name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microservice_name: Option<String>,

    #[serde(default)]
    pub search_engine: bool,

    #[serde(default)]
    pub skip_client: bool,

    #[serde(default)]
    pub skip_server: bool,

    /// Timestamp assigned on first generation (`%Y%m%d%H%M%S`), preserved
    /// verbatim on regeneration. Used to order schema changelogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog_date: Option<String>,
}

impl EntityDefinition {
    /// A definition with identity only; every option at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: naming::pascal_case(&name.into()),
            fields: Vec::new(),
            relationships: Vec::new(),
            dto: DtoKind::default(),
            service: ServiceKind::default(),
            pagination: PaginationKind::default(),
            angular_suffix: None,
            client_root_folder: None,
            microservice_name: None,
            search_engine: false,
            skip_client: false,
            skip_server: false,
            changelog_date: None,
        }
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// - `InvalidDefinition` when the name is empty or not a valid identity.
    /// - `ConfigurationConflict` when `dto = mapstruct` without a service
    ///   layer.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidDefinition(
                "entity name cannot be empty".into(),
            ));
        }
        if !self
            .name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
            || !self.name.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(DomainError::InvalidDefinition(format!(
                "entity name '{}' must be PascalCase alphanumeric",
                self.name
            )));
        }

        if self.dto == DtoKind::Mapstruct && self.service == ServiceKind::No {
            return Err(DomainError::ConfigurationConflict {
                fields: vec!["dto", "service"],
                reason: "a mapstruct DTO requires a service layer to map through".into(),
            });
        }

        Ok(())
    }

    /// Whether this definition describes an entity owned by another service.
    pub fn is_remote(&self) -> bool {
        self.microservice_name.is_some()
    }
}

// ── derived names ─────────────────────────────────────────────────────────────

impl EntityDefinition {
    /// Server-side file stem: `FooBar` → `foo_bar`.
    pub fn server_file_name(&self) -> String {
        naming::snake_case(&self.name)
    }

    /// Client folder/file stem, with the angular suffix folded in:
    /// `Foo` + suffix `management` → `foo-management`.
    pub fn client_file_name(&self) -> String {
        match &self.angular_suffix {
            Some(suffix) if !suffix.is_empty() => {
                naming::kebab_case(&format!("{}{}", self.name, naming::pascal_case(suffix)))
            }
            _ => naming::kebab_case(&self.name),
        }
    }

    /// i18n key for the entity, prefixed with the client root folder when one
    /// applies: root `sampleService` + `Bar` → `sampleServiceBar`.
    pub fn i18n_name(&self, effective_root: Option<&str>) -> String {
        match effective_root {
            Some(root) => format!("{}{}", naming::camel_case(root), naming::pascal_case(&self.name)),
            None => naming::lower_first(&self.name),
        }
    }
}
