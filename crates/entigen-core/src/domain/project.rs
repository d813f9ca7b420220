//! Project-level generation context.
//!
//! These values are configured once per service (not per entity) but the
//! resolvers need them as inputs: the application name seeds client root
//! folder defaults, the topology decides which tiers an entity may target,
//! and the language list drives i18n artifact emission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topology of the generating service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationType {
    /// Single service owning server and client tiers.
    #[default]
    Monolith,
    /// Server-only service; its entities are consumed through a gateway.
    Microservice,
    /// Client-facing service that may import entities owned elsewhere.
    Gateway,
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Monolith => "monolith",
            Self::Microservice => "microservice",
            Self::Gateway => "gateway",
        };
        f.write_str(s)
    }
}

/// Persistence backend of the generated server tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatabaseType {
    #[default]
    Sql,
    Mongodb,
    /// Cassandra has no offset queries; pagination options are downgraded
    /// during resolution.
    Cassandra,
    No,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sql => "sql",
            Self::Mongodb => "mongodb",
            Self::Cassandra => "cassandra",
            Self::No => "no",
        };
        f.write_str(s)
    }
}

/// Per-service configuration, persisted as the service metadata record.
///
/// The serde form of this struct is what the cross-service importer reads
/// from a remote service root to learn its application name, so it shares
/// the wire-contract stability requirements of
/// [`EntityDefinition`](crate::domain::EntityDefinition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub application_name: String,

    #[serde(default)]
    pub application_type: ApplicationType,

    #[serde(default)]
    pub database_type: DatabaseType,

    #[serde(default)]
    pub enable_translation: bool,

    /// Configured UI languages; one i18n artifact per entry when translation
    /// is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    /// Whether a search index backs entities by default.
    #[serde(default)]
    pub search_engine: bool,

    /// End-to-end load-test tooling enabled at project level.
    #[serde(default)]
    pub load_tests: bool,
}

impl ProjectContext {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            application_type: ApplicationType::default(),
            database_type: DatabaseType::default(),
            enable_translation: false,
            languages: Vec::new(),
            search_engine: false,
            load_tests: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_wire_format() {
        let mut ctx = ProjectContext::new("sampleService");
        ctx.application_type = ApplicationType::Microservice;
        ctx.enable_translation = true;
        ctx.languages = vec!["en".into(), "fr".into()];

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["applicationName"], "sampleService");
        assert_eq!(json["applicationType"], "microservice");
        assert_eq!(json["databaseType"], "sql");
        assert_eq!(json["languages"][1], "fr");
    }

    #[test]
    fn minimal_metadata_deserializes_with_defaults() {
        let ctx: ProjectContext =
            serde_json::from_str(r#"{"applicationName":"myapp"}"#).unwrap();
        assert_eq!(ctx.application_type, ApplicationType::Monolith);
        assert!(!ctx.enable_translation);
        assert!(ctx.languages.is_empty());
    }
}
