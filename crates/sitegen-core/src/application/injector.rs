//! Configuration injection: the full effective-config assembly.
//!
//! Combines, in increasing precedence:
//! 1. hardcoded defaults for the invocation context,
//! 2. the recursive config-file resolution from the invocation directory
//!    upward,
//! 3. the persisted per-project settings.
//!
//! The result is handed to the scaffolding services as a read-only nested
//! configuration object.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::ports::{Filesystem, SettingsStore};
use crate::application::resolver::{self, CUSTOM_CONFIG_FILE_NAME};
use crate::domain::merge::{deep_merge, empty_object};

/// Assembles the effective configuration for a project.
pub struct ConfigInjector<'a> {
    filesystem: &'a dyn Filesystem,
    settings: &'a dyn SettingsStore,
}

impl<'a> ConfigInjector<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, settings: &'a dyn SettingsStore) -> Self {
        Self {
            filesystem,
            settings,
        }
    }

    /// The effective configuration for an invocation inside a project.
    ///
    /// Config files are resolved from `start_dir` upward, so a config file
    /// in a subdirectory between the invocation directory and the project
    /// root takes its place in the nearest-wins chain. Persisted settings
    /// are loaded from `project_root`. `defaults` are the lowest-precedence
    /// layer; each command supplies its own (the component command seeds
    /// `app.*` defaults, the script command seeds `sm.*` defaults). Never
    /// fails: every layer degrades to an empty object when unavailable.
    #[instrument(skip_all, fields(start = %start_dir.display(), root = %project_root.display()))]
    pub fn inject(&self, start_dir: &Path, project_root: &Path, defaults: Value) -> Value {
        let resolved = resolver::resolve(
            self.filesystem,
            start_dir,
            &[CUSTOM_CONFIG_FILE_NAME],
            empty_object(),
        );
        let persisted = self.settings.load(project_root);

        debug!(
            resolved_keys = resolved.as_object().map(|m| m.len()).unwrap_or(0),
            persisted_keys = persisted.as_object().map(|m| m.len()).unwrap_or(0),
            "Configuration layers assembled"
        );

        deep_merge(deep_merge(defaults, resolved), persisted)
    }

    /// The pure on-disk resolution, without defaults or persisted settings.
    /// Used by `sitegen config resolved` for inspection.
    pub fn resolved(&self, start_dir: &Path) -> Value {
        resolver::resolve(
            self.filesystem,
            start_dir,
            &[CUSTOM_CONFIG_FILE_NAME],
            empty_object(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockSettingsStore};
    use serde_json::json;

    fn quiet_filesystem() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| None);
        fs
    }

    #[test]
    fn persisted_settings_outrank_config_files_and_defaults() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|path| match path.to_str() {
                Some("/proj/.sitegen.json") => Some(r#"{"type":"website","x":1}"#.to_string()),
                _ => None,
            });

        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|_| json!({"type": "webapp"}));

        let injector = ConfigInjector::new(&fs, &store);
        let conf = injector.inject(
            Path::new("/proj"),
            Path::new("/proj"),
            json!({"type": "other", "d": true}),
        );

        assert_eq!(conf, json!({"type": "webapp", "x": 1, "d": true}));
    }

    #[test]
    fn defaults_survive_when_nothing_else_exists() {
        let fs = quiet_filesystem();
        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|_| json!({}));

        let injector = ConfigInjector::new(&fs, &store);
        let defaults = json!({"app": {"componentDir": "src/components"}});
        let conf = injector.inject(Path::new("/proj"), Path::new("/proj"), defaults.clone());

        assert_eq!(conf, defaults);
    }

    #[test]
    fn resolution_starts_at_the_invocation_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|path| match path.to_str() {
                Some("/proj/packages/site/.sitegen.json") => {
                    Some(r#"{"app":{"componentDir":"custom/ui"}}"#.to_string())
                }
                Some("/proj/.sitegen.json") => {
                    Some(r#"{"app":{"componentDir":"src/components"},"root":true}"#.to_string())
                }
                _ => None,
            });

        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|_| json!({}));

        let injector = ConfigInjector::new(&fs, &store);
        let conf = injector.inject(
            Path::new("/proj/packages/site"),
            Path::new("/proj"),
            json!({}),
        );

        // The subdirectory config is nearest and outranks the root one.
        assert_eq!(conf["app"]["componentDir"], json!("custom/ui"));
        assert_eq!(conf["root"], json!(true));
    }

    #[test]
    fn nested_layers_merge_per_key() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|path| match path.to_str() {
                Some("/proj/.sitegen.json") => Some(r#"{"app":{"useTs":true}}"#.to_string()),
                _ => None,
            });

        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .returning(|_| json!({"app": {"componentDir": "lib/components"}}));

        let injector = ConfigInjector::new(&fs, &store);
        let conf = injector.inject(
            Path::new("/proj"),
            Path::new("/proj"),
            json!({"app": {"componentDir": "src/components", "componentStructure": "directory"}}),
        );

        assert_eq!(
            conf,
            json!({"app": {
                "componentDir": "lib/components",
                "componentStructure": "directory",
                "useTs": true
            }})
        );
    }
}
