//! Domain layer: the entity configuration model and everything derivable
//! from it without touching infrastructure.

pub mod artifact;
pub mod entity;
pub mod error;
pub mod naming;
pub mod project;

pub use artifact::{
    ArtifactCategory, ArtifactDescriptor, CLIENT_ENTITIES_DIR, CLIENT_I18N_DIR, LOAD_TEST_DIR,
    SERVER_SRC_DIR,
};
pub use entity::{
    DtoKind, EntityDefinition, Field, PaginationKind, Relationship, RelationshipKind, ServiceKind,
};
pub use error::{DomainError, ErrorCategory};
pub use project::{ApplicationType, DatabaseType, ProjectContext};
