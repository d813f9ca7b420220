//! Pure resolution logic: option merging and artifact-set computation.
//!
//! Nothing in this module performs I/O; both resolvers are plain functions
//! over the domain model so the full option combinatorics can be enumerated
//! in tests without any infrastructure.

pub mod artifacts;
pub mod options;

pub use artifacts::resolve_artifacts;
pub use options::{EntityAnswers, ExplicitOptions, resolve_options};
