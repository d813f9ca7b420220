//! Recording artifact sink for testing.

use std::sync::{Arc, RwLock};

use entigen_core::application::ApplicationError;
use entigen_core::application::ports::ArtifactSink;
use entigen_core::domain::{ArtifactDescriptor, EntityDefinition};
use entigen_core::error::GenResult;

/// Sink that records every hand-off instead of writing files.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    accepted: Arc<RwLock<Vec<(EntityDefinition, Vec<ArtifactDescriptor>)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded hand-offs, in call order.
    pub fn accepted(&self) -> Vec<(EntityDefinition, Vec<ArtifactDescriptor>)> {
        self.accepted.read().unwrap().clone()
    }

    /// Paths from the most recent hand-off.
    pub fn last_paths(&self) -> Vec<String> {
        self.accepted
            .read()
            .unwrap()
            .last()
            .map(|(_, artifacts)| artifacts.iter().map(|a| a.path.clone()).collect())
            .unwrap_or_default()
    }
}

impl ArtifactSink for MemorySink {
    fn accept(
        &self,
        definition: &EntityDefinition,
        artifacts: &[ArtifactDescriptor],
    ) -> GenResult<()> {
        let mut accepted = self
            .accepted
            .write()
            .map_err(|_| ApplicationError::StoreLock)?;
        accepted.push((definition.clone(), artifacts.to_vec()));
        Ok(())
    }
}
