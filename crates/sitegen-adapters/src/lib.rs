//! Infrastructure adapters for Sitegen.
//!
//! This crate implements the ports defined in `sitegen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod settings_store;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use settings_store::JsonSettingsStore;
