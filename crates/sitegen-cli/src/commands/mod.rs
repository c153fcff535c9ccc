//! Command handlers.
//!
//! Each submodule owns exactly one subcommand: translate parsed arguments
//! into core service calls and display results.  No business logic lives
//! here.

pub mod completions;
pub mod component;
pub mod config;
pub mod init;
pub mod script;

use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::debug;

use sitegen_adapters::LocalFilesystem;
use sitegen_core::application::resolver::{self, SETTINGS_FILE_NAME};
use sitegen_core::domain::ScaffoldPlan;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Locate the invocation directory and the project root for this run.
///
/// Config resolution starts at the invocation directory (nearest config
/// wins, even from a subdirectory of the project), while generated files
/// and persisted settings are anchored at the project root: the nearest
/// ancestor (including the current directory) that carries a settings file.
/// Without one the current directory itself is treated as the root, so
/// generation works in projects that were never initialised.
pub(crate) fn project_paths() -> CliResult<(PathBuf, PathBuf)> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current directory".into(),
        source: e,
    })?;

    let fs = LocalFilesystem::new();
    let root = resolver::find_up(&fs, &cwd, SETTINGS_FILE_NAME).unwrap_or_else(|| cwd.clone());
    debug!(cwd = %cwd.display(), root = %root.display(), "Project root located");
    Ok((cwd, root))
}

/// The project root alone, for commands that do not resolve config files.
pub(crate) fn project_root() -> CliResult<PathBuf> {
    project_paths().map(|(_, root)| root)
}

/// Author defaults shared by the generation commands, as a config fragment.
pub(crate) fn author_defaults(config: &AppConfig) -> Value {
    let mut author = Map::new();
    if let Some(name) = &config.defaults.author_name {
        author.insert("name".into(), Value::String(name.clone()));
    }
    if let Some(email) = &config.defaults.author_email {
        author.insert("email".into(), Value::String(email.clone()));
    }
    Value::Object(author)
}

/// Print the files of an executed (or planned) scaffold.
pub(crate) fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    for file in plan.files() {
        output.print(&format!("  {}", plan.root().join(&file.path).display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_defaults_empty_when_unset() {
        let config = AppConfig::default();
        assert_eq!(author_defaults(&config), json!({}));
    }

    #[test]
    fn author_defaults_carry_configured_identity() {
        let mut config = AppConfig::default();
        config.defaults.author_name = Some("Alice".into());
        config.defaults.author_email = Some("alice@example.com".into());
        assert_eq!(
            author_defaults(&config),
            json!({"name": "Alice", "email": "alice@example.com"})
        );
    }
}
