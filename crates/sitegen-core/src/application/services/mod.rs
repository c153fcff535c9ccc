//! Application services orchestrating generation.
//!
//! Each service turns an effective configuration plus command options into a
//! [`ScaffoldPlan`] (pure), then materializes it through the filesystem port.

pub mod component_service;
pub mod script_service;

pub use component_service::{ComponentOptions, ComponentService, ComponentTemplates};
pub use script_service::{ScriptOptions, ScriptService, ScriptTemplates};

use serde_json::Value;

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{DomainError, ScaffoldPlan};
use crate::error::{SitegenError, SitegenResult};

/// Write every file in the plan, creating parent directories as needed.
///
/// Existing files abort the whole plan before anything is written, unless
/// `force` is set.
pub(crate) fn write_plan(
    fs: &dyn Filesystem,
    plan: &ScaffoldPlan,
    force: bool,
) -> SitegenResult<()> {
    plan.validate().map_err(SitegenError::Domain)?;

    if !force {
        for path in plan.absolute_paths() {
            if fs.exists(&path) {
                return Err(ApplicationError::TargetExists { path }.into());
            }
        }
    }

    for (file, path) in plan.files().iter().zip(plan.absolute_paths()) {
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, &file.content)?;
    }

    Ok(())
}

/// Reject names that cannot produce a usable file name.
pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".into(),
        });
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: "name contains no letters or digits".into(),
        });
    }
    Ok(())
}

/// Read a string leaf from a config group, e.g. `conf.app.componentDir`.
pub(crate) fn conf_str<'v>(conf: &'v Value, group: &str, key: &str) -> Option<&'v str> {
    conf.get(group)?.get(key)?.as_str()
}

/// Author name/email from the `author` group, empty strings when unset.
pub(crate) fn author_of(conf: &Value) -> (String, String) {
    let name = conf_str(conf, "author", "name").unwrap_or_default();
    let email = conf_str(conf, "author", "email").unwrap_or_default();
    (name.to_string(), email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_name_rejects_blank_and_symbolic() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("--").is_err());
        assert!(validate_name("nav bar").is_ok());
    }

    #[test]
    fn conf_str_reads_nested_leaves() {
        let conf = json!({"app": {"componentDir": "src/components"}});
        assert_eq!(conf_str(&conf, "app", "componentDir"), Some("src/components"));
        assert_eq!(conf_str(&conf, "app", "missing"), None);
        assert_eq!(conf_str(&conf, "sm", "dir"), None);
    }

    #[test]
    fn author_of_defaults_to_empty() {
        assert_eq!(author_of(&json!({})), (String::new(), String::new()));
        assert_eq!(
            author_of(&json!({"author": {"name": "Alice", "email": "a@x.se"}})),
            ("Alice".to_string(), "a@x.se".to_string())
        );
    }
}
