//! Core domain layer for Sitegen.
//!
//! Pure business logic: the deep-merge engine, name casing, value objects,
//! and the scaffold plan. No I/O — filesystem and persistence concerns are
//! handled via ports (traits) defined in the application layer.

pub mod error;
pub mod merge;
pub mod naming;
pub mod scaffold;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use merge::{deep_merge, empty_object, remove_empty};
pub use scaffold::{FileToWrite, RenderContext, ScaffoldPlan};
pub use value_objects::{ComponentStructure, ProjectType};
