//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitegen-adapters` crate provides implementations.

use std::path::Path;

use serde_json::Value;

use crate::domain::RenderContext;
use crate::error::SitegenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sitegen_adapters::filesystem::LocalFilesystem` (production)
/// - `sitegen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - The read side is deliberately infallible: configuration absence is not
///   exceptional, so `read_to_string` folds "missing", "unreadable", and
///   "not valid UTF-8" into `None`. The resolver never needs to distinguish.
/// - The write side returns errors; scaffolding failures must surface.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a file as UTF-8 text. `None` when the file is missing or
    /// unreadable for any reason.
    fn read_to_string(&self, path: &Path) -> Option<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SitegenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SitegenResult<()>;
}

/// Port for the persisted per-project settings file.
///
/// Implemented by `sitegen_adapters::JsonSettingsStore`, which keeps the
/// settings in the project root under the tool's namespace key.
///
/// Loading follows the same absorption policy as config resolution (missing
/// or malformed settings degrade to an empty object); saving is fallible and
/// the error is reported to the user.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// Load the settings object for a project. Empty object when absent.
    fn load(&self, project_root: &Path) -> Value;

    /// Persist the settings object for a project.
    fn save(&self, project_root: &Path, settings: &Value) -> SitegenResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `sitegen_adapters::SimpleRenderer` (variable substitution).
pub trait TemplateRenderer: Send + Sync {
    /// Render a template string with the given substitution context.
    fn render(&self, template: &str, context: &RenderContext) -> String;
}
