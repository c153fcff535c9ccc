//! JSON settings store for per-project persisted settings.
//!
//! Settings live in `.sitegenrc.json` at the project root, nested under the
//! tool's namespace key so the file can host other tools' state alongside:
//!
//! ```json
//! { "sitegen": { "type": "webapp", "app": { "componentDir": "src/components" } } }
//! ```
//!
//! Loading shares the resolver's absorption policy (anything wrong means
//! "empty settings"); saving surfaces errors, because a failed write is the
//! one observable failure the user must hear about.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use sitegen_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, SettingsStore},
        resolver::{SETTINGS_FILE_NAME, parse_config},
    },
    domain::merge::empty_object,
    error::SitegenResult,
};

/// Settings store backed by a JSON file at the project root.
pub struct JsonSettingsStore {
    filesystem: Box<dyn Filesystem>,
}

impl JsonSettingsStore {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    fn settings_path(project_root: &Path) -> std::path::PathBuf {
        project_root.join(SETTINGS_FILE_NAME)
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self, project_root: &Path) -> Value {
        let path = Self::settings_path(project_root);
        match self.filesystem.read_to_string(&path) {
            // parse_config unwraps the namespace key for us.
            Some(contents) => parse_config(&contents, "json"),
            None => {
                debug!(path = %path.display(), "No settings file, using empty settings");
                empty_object()
            }
        }
    }

    fn save(&self, project_root: &Path, settings: &Value) -> SitegenResult<()> {
        let path = Self::settings_path(project_root);
        let mut outer = Map::new();
        outer.insert(
            sitegen_core::application::resolver::SETTINGS_NAMESPACE.to_string(),
            settings.clone(),
        );
        let wrapped = Value::Object(outer);

        let serialised = serde_json::to_string_pretty(&wrapped).map_err(|e| {
            warn!(error = %e, "Settings serialisation failed");
            ApplicationError::SettingsPersistence {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;

        self.filesystem
            .write_file(&path, &format!("{serialised}\n"))
            .map_err(|e| {
                ApplicationError::SettingsPersistence {
                    path: path.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
