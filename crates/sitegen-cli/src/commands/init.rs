//! `sitegen init` — set up or update the per-project settings file.
//!
//! Answers are collected (interactively or from flags), pruned of empty
//! values, and merged *over* the previously stored settings so that
//! untouched keys survive a re-run.

use std::path::Path;

use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use sitegen_adapters::{JsonSettingsStore, LocalFilesystem};
use sitegen_core::application::ports::{Filesystem, SettingsStore};
use sitegen_core::application::resolver::SETTINGS_FILE_NAME;
use sitegen_core::domain::{ProjectType, deep_merge, remove_empty};

use crate::{
    cli::{GlobalArgs, InitArgs},
    commands::project_root,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitegen init` command.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = project_root()?;
    let store = JsonSettingsStore::new(Box::new(LocalFilesystem::new()));
    let stored = store.load(&root);
    let detected = detect(&root);

    let answers = if use_prompts(&args, &global) {
        prompt_answers(&args, &config, &stored, detected)?
    } else {
        answers_from_flags(&args, &config, &stored, detected)
    };

    // Empty answers would otherwise clobber stored values on merge.
    let answers = remove_empty(answers);
    debug!(root = %root.display(), "Settings answers collected");

    let merged = deep_merge(stored, answers);
    store.save(&root, &merged).map_err(CliError::Core)?;

    output.success(&format!(
        "Settings saved to {}",
        root.join(SETTINGS_FILE_NAME).display()
    ))?;
    summary(&merged, &output)?;

    Ok(())
}

/// Prompts run whenever they were not opted out of and a terminal is
/// attached. Builds without the interactive feature then report the missing
/// feature instead of silently falling back to flags.
fn use_prompts(args: &InitArgs, global: &GlobalArgs) -> bool {
    use std::io::IsTerminal as _;

    !args.yes && !global.quiet && std::io::stdin().is_terminal()
}

/// Project traits detected from marker files at the project root; used as
/// defaults for the prompts and for `--yes` runs.
#[derive(Debug, Clone, Copy, Default)]
struct Detected {
    /// `tsconfig.json` at the root.
    typescript: bool,
    /// `manifest.json` at the root, the marker of an existing web app.
    webapp_manifest: bool,
}

fn detect(root: &Path) -> Detected {
    let fs = LocalFilesystem::new();
    Detected {
        typescript: fs.exists(&root.join("tsconfig.json")),
        webapp_manifest: fs.exists(&root.join("manifest.json")),
    }
}

// ── Non-interactive path ──────────────────────────────────────────────────────

/// Build the answers object from flags and tool defaults.
///
/// Only includes keys the user set explicitly or that the stored settings
/// lack — a plain `sitegen init --yes` re-run must not rewrite choices the
/// user already made.
fn answers_from_flags(
    args: &InitArgs,
    config: &AppConfig,
    stored: &Value,
    detected: Detected,
) -> Value {
    let mut answers = Map::new();

    let project_type = match &args.project_type {
        Some(t) => {
            answers.insert("type".into(), json!(t.as_str()));
            t.as_str().to_string()
        }
        None => match str_at(stored, &["type"]) {
            Some(existing) => existing.to_string(),
            None => {
                let fallback = if detected.webapp_manifest {
                    ProjectType::WebApp.as_str().to_string()
                } else {
                    config.defaults.project_type.clone()
                };
                answers.insert("type".into(), json!(fallback));
                fallback
            }
        },
    };

    let mut author = Map::new();
    if let Some(name) = &args.author_name {
        author.insert("name".into(), json!(name));
    }
    if let Some(email) = &args.author_email {
        author.insert("email".into(), json!(email));
    }
    if !author.is_empty() {
        answers.insert("author".into(), Value::Object(author));
    }

    let parsed: ProjectType = project_type.parse().unwrap_or_default();

    let mut app = Map::new();
    if parsed.has_components() && str_at(stored, &["app", "componentDir"]).is_none() {
        app.insert("componentDir".into(), json!(config.defaults.component_dir));
        app.insert(
            "componentStructure".into(),
            json!(config.defaults.component_structure),
        );
    }
    if parsed.may_use_typescript() {
        match args.typescript {
            Some(use_ts) => {
                app.insert("useTs".into(), json!(use_ts));
            }
            None if bool_at(stored, &["app", "useTs"]).is_none() => {
                app.insert("useTs".into(), json!(detected.typescript));
            }
            None => {}
        }
    }
    if !app.is_empty() {
        answers.insert("app".into(), Value::Object(app));
    }

    if parsed.has_script_modules() && str_at(stored, &["sm", "dir"]).is_none() {
        answers.insert(
            "sm".into(),
            json!({
                "dir": config.defaults.script_dir,
                "cssPrefix": config.defaults.css_prefix,
            }),
        );
    }

    Value::Object(answers)
}

// ── Interactive path ──────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_answers(
    args: &InitArgs,
    config: &AppConfig,
    stored: &Value,
    detected: Detected,
) -> CliResult<Value> {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();

    let types = ["webapp", "restapp", "website", "other"];
    let current_type = args
        .project_type
        .map(|t| t.as_str().to_string())
        .or_else(|| str_at(stored, &["type"]).map(str::to_string))
        .or_else(|| detected.webapp_manifest.then(|| "webapp".to_string()))
        .unwrap_or_else(|| config.defaults.project_type.clone());
    let default_index = types.iter().position(|t| *t == current_type).unwrap_or(2);

    let selected = Select::with_theme(&theme)
        .with_prompt("Project type")
        .items(&types)
        .default(default_index)
        .interact()
        .map_err(prompt_error)?;
    let project_type = types[selected];

    let author_name: String = Input::with_theme(&theme)
        .with_prompt("Author name")
        .allow_empty(true)
        .with_initial_text(initial(
            args.author_name.as_deref(),
            str_at(stored, &["author", "name"]),
            config.defaults.author_name.as_deref(),
        ))
        .interact_text()
        .map_err(prompt_error)?;

    let author_email: String = Input::with_theme(&theme)
        .with_prompt("Author email")
        .allow_empty(true)
        .with_initial_text(initial(
            args.author_email.as_deref(),
            str_at(stored, &["author", "email"]),
            config.defaults.author_email.as_deref(),
        ))
        .interact_text()
        .map_err(prompt_error)?;

    let mut answers = Map::new();
    answers.insert("type".into(), json!(project_type));
    answers.insert(
        "author".into(),
        json!({"name": author_name, "email": author_email}),
    );

    let parsed: ProjectType = project_type.parse().unwrap_or_default();

    let mut app = Map::new();
    if parsed.has_components() {
        let component_dir: String = Input::with_theme(&theme)
            .with_prompt("Component directory")
            .with_initial_text(initial(
                None,
                str_at(stored, &["app", "componentDir"]),
                Some(config.defaults.component_dir.as_str()),
            ))
            .interact_text()
            .map_err(prompt_error)?;

        let structures = ["directory", "flat"];
        let current_structure = str_at(stored, &["app", "componentStructure"])
            .unwrap_or(config.defaults.component_structure.as_str());
        let structure_index = structures
            .iter()
            .position(|s| *s == current_structure)
            .unwrap_or(0);
        let structure = Select::with_theme(&theme)
            .with_prompt("Component structure")
            .items(&structures)
            .default(structure_index)
            .interact()
            .map_err(prompt_error)?;

        app.insert("componentDir".into(), json!(component_dir));
        app.insert("componentStructure".into(), json!(structures[structure]));
    }

    if parsed.may_use_typescript() {
        let default_ts = args
            .typescript
            .or_else(|| bool_at(stored, &["app", "useTs"]))
            .unwrap_or(detected.typescript);
        let use_ts = Confirm::with_theme(&theme)
            .with_prompt("Use TypeScript?")
            .default(default_ts)
            .interact()
            .map_err(prompt_error)?;
        app.insert("useTs".into(), json!(use_ts));
    }

    if !app.is_empty() {
        answers.insert("app".into(), Value::Object(app));
    }

    if parsed.has_script_modules() {
        let script_dir: String = Input::with_theme(&theme)
            .with_prompt("Script module directory")
            .allow_empty(true)
            .with_initial_text(initial(
                None,
                str_at(stored, &["sm", "dir"]),
                Some(config.defaults.script_dir.as_str()),
            ))
            .interact_text()
            .map_err(prompt_error)?;

        let css_prefix: String = Input::with_theme(&theme)
            .with_prompt("CSS class prefix")
            .allow_empty(true)
            .with_initial_text(initial(
                None,
                str_at(stored, &["sm", "cssPrefix"]),
                Some(config.defaults.css_prefix.as_str()),
            ))
            .interact_text()
            .map_err(prompt_error)?;

        answers.insert(
            "sm".into(),
            json!({"dir": script_dir, "cssPrefix": css_prefix}),
        );
    }

    Ok(Value::Object(answers))
}

#[cfg(not(feature = "interactive"))]
fn prompt_answers(
    _args: &InitArgs,
    _config: &AppConfig,
    _stored: &Value,
    _detected: Detected,
) -> CliResult<Value> {
    // Flag-only builds must be asked for flag-only behavior (`--yes`).
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::InvalidInput {
            message: "prompt failed".into(),
            source: Some(Box::new(other)),
        },
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First non-empty of flag, stored value, tool default.
#[cfg(feature = "interactive")]
fn initial(flag: Option<&str>, stored: Option<&str>, default: Option<&str>) -> String {
    flag.or(stored)
        .or(default)
        .unwrap_or_default()
        .to_string()
}

/// String value at a key path inside a nested config object.
fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str().filter(|s| !s.is_empty())
}

/// Boolean value at a key path inside a nested config object.
fn bool_at(value: &Value, path: &[&str]) -> Option<bool> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_bool()
}

fn summary(settings: &Value, output: &OutputManager) -> CliResult<()> {
    output.header("Project settings")?;
    if let Some(t) = str_at(settings, &["type"]) {
        output.key_value("type", t)?;
    }
    if let Some(name) = str_at(settings, &["author", "name"]) {
        output.key_value("author.name", name)?;
    }
    if let Some(email) = str_at(settings, &["author", "email"]) {
        output.key_value("author.email", email)?;
    }
    if let Some(dir) = str_at(settings, &["app", "componentDir"]) {
        output.key_value("app.componentDir", dir)?;
    }
    if let Some(structure) = str_at(settings, &["app", "componentStructure"]) {
        output.key_value("app.componentStructure", structure)?;
    }
    if let Some(use_ts) = bool_at(settings, &["app", "useTs"]) {
        output.key_value("app.useTs", if use_ts { "true" } else { "false" })?;
    }
    if let Some(dir) = str_at(settings, &["sm", "dir"]) {
        output.key_value("sm.dir", dir)?;
    }
    if let Some(prefix) = str_at(settings, &["sm", "cssPrefix"]) {
        output.key_value("sm.cssPrefix", prefix)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
