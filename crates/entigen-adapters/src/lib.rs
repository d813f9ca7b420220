//! Infrastructure adapters for Entigen.
//!
//! This crate implements the ports defined in
//! `entigen-core::application::ports`. It contains all external dependencies
//! and I/O operations; core stays free of filesystem access.

pub mod definition_store;
pub mod remote;
pub mod sink;

// Re-export commonly used adapters
pub use definition_store::{InMemoryDefinitionStore, JsonDefinitionStore};
pub use remote::FsServiceReader;
pub use sink::{MemorySink, ScaffoldSink};

/// Directory under a service root that holds all persisted generator state.
pub const STORE_DIR: &str = ".entigen";

/// File inside [`STORE_DIR`] that holds the service-level metadata.
pub const SERVICE_FILE: &str = "service.json";
