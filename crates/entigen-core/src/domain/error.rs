//! Domain-level errors: invalid or conflicting entity configuration.

use thiserror::Error;

/// Errors raised by the data model and the pure resolvers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Mutually exclusive options were both set. Fatal; resolution aborts
    /// before anything is written.
    #[error("conflicting options ({}): {reason}", fields.join(", "))]
    ConfigurationConflict {
        fields: Vec<&'static str>,
        reason: String,
    },

    /// A required derivable field has no source to derive from.
    #[error("cannot derive required value '{field}': {reason}")]
    MissingDependency {
        field: &'static str,
        reason: String,
    },

    /// Two resolver rules computed the same output path. Always a rule-table
    /// bug, never user error, and never silently deduplicated.
    #[error("duplicate artifact path '{path}' (emitted by rules '{first_rule}' and '{second_rule}')")]
    DuplicateArtifactPath {
        path: String,
        first_rule: &'static str,
        second_rule: &'static str,
    },

    /// The definition itself is malformed (bad name, inconsistent record).
    #[error("invalid entity definition: {0}")]
    InvalidDefinition(String),
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigurationConflict { fields, .. } => vec![
                format!("Pick a compatible combination for: {}", fields.join(", ")),
                "A MapStruct DTO needs a service layer to live in".into(),
            ],
            Self::MissingDependency { field, .. } => vec![format!(
                "Provide '{field}' explicitly, or re-import the definition from the owning service"
            )],
            Self::DuplicateArtifactPath { .. } => {
                vec!["This is a bug in the artifact rule table; please report it".into()]
            }
            Self::InvalidDefinition(_) => {
                vec!["Entity names must be alphabetic, e.g. 'Foo' or 'BankAccount'".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationConflict { .. } | Self::MissingDependency { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidDefinition(_) => ErrorCategory::Validation,
            Self::DuplicateArtifactPath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
