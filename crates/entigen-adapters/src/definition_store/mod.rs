//! Definition store adapters.

pub mod json;
pub mod memory;

pub use json::JsonDefinitionStore;
pub use memory::InMemoryDefinitionStore;
