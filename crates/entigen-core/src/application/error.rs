//! Application layer errors.
//!
//! These represent failures while orchestrating a generation run — store
//! access, cross-service imports, sink hand-off. Configuration problems in
//! the entity definition itself are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during pipeline orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The given path does not resolve to a valid service root.
    #[error("no service found at '{path}': {reason}")]
    RemoteServiceUnreachable { path: PathBuf, reason: String },

    /// The remote service exists but has no persisted record for the entity.
    #[error("entity '{entity}' is not persisted in the service at '{path}'")]
    RemoteEntityNotFound { entity: String, path: PathBuf },

    /// A definition store read or write failed.
    #[error("definition store error at '{path}': {reason}")]
    StoreIo { path: PathBuf, reason: String },

    /// A shared in-memory store lock was poisoned.
    #[error("definition store lock poisoned")]
    StoreLock,

    /// The rendering/writing collaborator rejected the artifact list.
    #[error("artifact sink failed: {reason}")]
    SinkFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RemoteServiceUnreachable { path, .. } => vec![
                format!("No service metadata found under: {}", path.display()),
                "Check the --from-service path points at the owning service's root".into(),
                "The remote service must have been initialised (it needs a .entigen/ directory)"
                    .into(),
            ],
            Self::RemoteEntityNotFound { entity, .. } => vec![
                format!("Generate '{entity}' in the owning service first"),
                "Entity names are case-normalized; check the spelling".into(),
            ],
            Self::StoreIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check directory permissions".into(),
            ],
            Self::StoreLock => vec!["Try again in a moment".into()],
            Self::SinkFailed { .. } => {
                vec!["Check write permissions in the output directory".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RemoteServiceUnreachable { .. } | Self::RemoteEntityNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::StoreIo { .. } | Self::StoreLock | Self::SinkFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
