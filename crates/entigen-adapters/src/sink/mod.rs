//! Artifact sink adapters.

pub mod memory;
pub mod scaffold;

pub use memory::MemorySink;
pub use scaffold::ScaffoldSink;
