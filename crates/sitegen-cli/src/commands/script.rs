//! `sitegen script` — generate a script module inside the current project.

use serde_json::json;
use tracing::{debug, info, instrument};

use sitegen_adapters::{JsonSettingsStore, LocalFilesystem, SimpleRenderer, templates};
use sitegen_core::application::{ConfigInjector, ScriptOptions, ScriptService};

use crate::{
    cli::{GlobalArgs, ScriptArgs},
    commands::{author_defaults, project_paths, show_plan},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitegen script` command.
///
/// Same shape as the component command: locate the root, assemble the
/// effective configuration, plan (or generate) via `ScriptService`.
#[instrument(skip_all, fields(script = %args.name))]
pub fn execute(
    args: ScriptArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (cwd, root) = project_paths()?;

    let defaults = json!({
        "sm": {
            "dir": config.defaults.script_dir,
            "cssPrefix": config.defaults.css_prefix,
        },
        "author": author_defaults(&config),
    });

    let filesystem = LocalFilesystem::new();
    let store = JsonSettingsStore::new(Box::new(LocalFilesystem::new()));
    let conf = ConfigInjector::new(&filesystem, &store).inject(&cwd, &root, defaults);

    debug!(
        root = %root.display(),
        styles = args.styles,
        client = args.js,
        "Script configuration assembled"
    );

    let service = ScriptService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        templates::script_templates(),
    );

    let options = ScriptOptions {
        name: args.name.clone(),
        styles: args.styles,
        js: args.js,
        vars: args.vars.clone(),
        force: args.force,
    };

    if args.dry_run {
        let plan = service.plan(&root, &conf, &options).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create {} file(s)",
            plan.file_count()
        ))?;
        show_plan(&plan, &output)?;
        return Ok(());
    }

    let plan = service
        .generate(&root, &conf, &options)
        .map_err(CliError::Core)?;

    info!(files = plan.file_count(), "Script command finished");

    output.success(&format!("Script module '{}' created", args.name))?;
    if !global.quiet {
        show_plan(&plan, &output)?;
    }

    Ok(())
}
