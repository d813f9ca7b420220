//! Application layer: orchestration of generation runs.

pub mod error;
pub mod importer;
pub mod pipeline;
pub mod ports;

pub use error::ApplicationError;
pub use importer::EntityImporter;
pub use pipeline::{GenerationOutcome, GenerationPipeline, GenerationRequest};
