//! Entigen Core - entity-driven generation logic.
//!
//! This crate holds the domain and application layers of the entigen
//! generator, following a hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           entigen-cli (CLI)             │
//! │   (collects options & answer records)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         GenerationPipeline              │
//! │  load → import → resolve → persist →    │
//! │  hand artifacts to the sink             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Driven Ports (Traits)            │
//! │ (DefinitionStore, RemoteServiceReader,  │
//! │  ArtifactSink)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     entigen-adapters (Infrastructure)   │
//! │ (JsonDefinitionStore, FsServiceReader,  │
//! │  ScaffoldSink, in-memory test doubles)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The resolvers themselves (`resolver::options`, `resolver::artifacts`) are
//! pure functions over the domain model and depend on no port.

// Domain layer: entity data model, project context, artifact descriptors.
pub mod domain;

// Pure resolution logic: option merging and the artifact rule table.
pub mod resolver;

// Application layer: ports, the cross-service importer and the pipeline.
pub mod application;

// Unified error types.
pub mod error;

// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        GenerationOutcome, GenerationPipeline, GenerationRequest,
        ports::{ArtifactSink, DefinitionStore, RemoteServiceReader},
    };
    pub use crate::domain::{
        ApplicationType, ArtifactCategory, ArtifactDescriptor, DatabaseType, DtoKind,
        EntityDefinition, Field, PaginationKind, ProjectContext, Relationship, RelationshipKind,
        ServiceKind,
    };
    pub use crate::error::{GenError, GenResult};
    pub use crate::resolver::{EntityAnswers, ExplicitOptions, resolve_artifacts, resolve_options};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
