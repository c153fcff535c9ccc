//! Script module generation.
//!
//! A script module is a directory named after the hyphenated module name
//! containing a server script and a velocity template, with an optional
//! stylesheet and an optional client script. The module directory lives
//! under `conf.sm.dir`.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, instrument};

use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::application::services::{author_of, conf_str, validate_name, write_plan};
use crate::domain::{RenderContext, ScaffoldPlan, naming};
use crate::error::{SitegenError, SitegenResult};

/// Default script variables captured into the settings constant when the
/// user passes no `--vars`.
const DEFAULT_VARS: &str = "meta";

/// Template sources for script module generation.
#[derive(Debug, Clone)]
pub struct ScriptTemplates {
    /// Server-side script (`{{hyphenedName}}.js`).
    pub server: String,
    /// Velocity template (`{{hyphenedName}}.vm`).
    pub template: String,
    /// Optional stylesheet (`{{hyphenedName}}.css`).
    pub stylesheet: String,
    /// Optional client script (`{{hyphenedName}}-client.js`).
    pub client: String,
}

/// Options parsed from the `script` command.
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Raw name as given; lower-cased and hyphenated for file names.
    pub name: String,
    /// Also generate a stylesheet.
    pub styles: bool,
    /// Also generate a client script.
    pub js: bool,
    /// Comma-separated script variables for the settings constant.
    /// `None` uses the default; the literal `false` disables the constant.
    pub vars: Option<String>,
    /// Overwrite existing files.
    pub force: bool,
}

/// Generates script module files inside an existing project.
pub struct ScriptService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    templates: ScriptTemplates,
}

impl ScriptService {
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        templates: ScriptTemplates,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            templates,
        }
    }

    /// Build the scaffold plan without touching the filesystem.
    pub fn plan(
        &self,
        project_root: &Path,
        conf: &Value,
        options: &ScriptOptions,
    ) -> SitegenResult<ScaffoldPlan> {
        validate_name(&options.name).map_err(SitegenError::Domain)?;

        let camel_name = naming::camel_case(&options.name);
        let hyphened_name = naming::hyphen_case(&camel_name);
        let css_prefix = conf_str(conf, "sm", "cssPrefix").unwrap_or_default();
        let module_dir = conf_str(conf, "sm", "dir").unwrap_or_default();
        let (author_name, author_email) = author_of(conf);

        let vars = options.vars.as_deref().unwrap_or(DEFAULT_VARS);
        let context = RenderContext::new()
            .with_variable("name", options.name.trim())
            .with_variable("camelName", &camel_name)
            .with_variable("hyphenedName", &hyphened_name)
            .with_variable("cssClass", naming::css_class(css_prefix, &hyphened_name))
            .with_variable("authorName", author_name)
            .with_variable("authorEmail", author_email)
            .with_variable("settingsBlock", settings_block(vars));

        let dir = PathBuf::from(module_dir).join(&hyphened_name);

        let mut plan = ScaffoldPlan::new(project_root);
        plan.add_file(
            dir.join(format!("{hyphened_name}.js")),
            self.renderer.render(&self.templates.server, &context),
        );
        plan.add_file(
            dir.join(format!("{hyphened_name}.vm")),
            self.renderer.render(&self.templates.template, &context),
        );

        if options.styles {
            plan.add_file(
                dir.join(format!("{hyphened_name}.css")),
                self.renderer.render(&self.templates.stylesheet, &context),
            );
        }

        if options.js {
            plan.add_file(
                dir.join(format!("{hyphened_name}-client.js")),
                self.renderer.render(&self.templates.client, &context),
            );
        }

        Ok(plan)
    }

    /// Plan and write the script module files.
    #[instrument(skip_all, fields(name = %options.name, root = %project_root.display()))]
    pub fn generate(
        &self,
        project_root: &Path,
        conf: &Value,
        options: &ScriptOptions,
    ) -> SitegenResult<ScaffoldPlan> {
        let plan = self.plan(project_root, conf, options)?;
        write_plan(self.filesystem.as_ref(), &plan, options.force)?;
        info!(files = plan.file_count(), "Script module generated");
        Ok(plan)
    }
}

/// Build the settings constant from a comma-separated variable list.
///
/// Names are camelCased and blanks dropped; the literal `false` disables the
/// block entirely.
fn settings_block(vars: &str) -> String {
    if vars == "false" {
        return String::new();
    }

    let names: Vec<String> = vars
        .split(',')
        .map(|v| naming::camel_case(v.trim()))
        .filter(|v| !v.is_empty())
        .collect();

    if names.is_empty() {
        return String::new();
    }

    let mut block = String::from("const SETTINGS = {\n");
    for name in &names {
        block.push_str(&format!("  {name}: variables.get('{name}'),\n"));
    }
    block.push_str("};\n");
    block
}
