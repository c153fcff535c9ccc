//! Application configuration.
//!
//! [`AppConfig`] is the *tool* configuration — defaults for prompts and
//! generation seeds.  It is distinct from the per-project configuration
//! chain (`.sitegen.json` files and `.sitegenrc.json` settings), which the
//! core crate resolves at command time.  Loaded once at startup and passed
//! down by value; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values seeded into prompts and generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub project_type: String,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub component_dir: String,
    pub component_structure: String,
    pub script_dir: String,
    pub css_prefix: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_type: "website".into(),
            author_name: None,
            author_email: None,
            component_dir: "src/components".into(),
            component_structure: "directory".into(),
            script_dir: String::new(),
            css_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl AppConfig {
    /// Load configuration from `config_file` (the `--config` path) or the
    /// default location, falling back to built-in defaults when no file
    /// exists.  A file that exists but fails to parse is an error — silent
    /// fallback would mask typos in a file the user wrote deliberately.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("invalid config file '{}'", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("cannot read config file '{}'", path.display()))
            }
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sitegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sitegen", "sitegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sitegen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_type_is_website() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_type, "website");
    }

    #[test]
    fn default_component_settings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.component_dir, "src/components");
        assert_eq!(cfg.defaults.component_structure, "directory");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let cfg = AppConfig::load_from(Path::new("/nonexistent/sitegen-config.toml")).unwrap();
        assert_eq!(cfg.defaults.project_type, "website");
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\nproject_type = \"webapp\"\n").unwrap();
        assert_eq!(cfg.defaults.project_type, "webapp");
        assert_eq!(cfg.defaults.component_dir, "src/components");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "defaults = not toml").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
