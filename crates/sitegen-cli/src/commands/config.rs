//! `sitegen config` — inspect configuration layers.

use std::path::PathBuf;

use sitegen_adapters::{JsonSettingsStore, LocalFilesystem};
use sitegen_core::application::ConfigInjector;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Resolved { dir } => {
            let start = match dir {
                Some(d) => d,
                None => current_dir()?,
            };

            let filesystem = LocalFilesystem::new();
            let store = JsonSettingsStore::new(Box::new(LocalFilesystem::new()));
            let resolved = ConfigInjector::new(&filesystem, &store).resolved(&start);

            let rendered =
                serde_json::to_string_pretty(&resolved).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise resolved config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&rendered)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current directory".into(),
        source: e,
    })
}
