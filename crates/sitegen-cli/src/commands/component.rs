//! `sitegen component` — generate a component inside the current project.

use serde_json::json;
use tracing::{debug, info, instrument};

use sitegen_adapters::{JsonSettingsStore, LocalFilesystem, SimpleRenderer, templates};
use sitegen_core::application::{ComponentOptions, ComponentService, ConfigInjector};

use crate::{
    cli::{ComponentArgs, GlobalArgs},
    commands::{author_defaults, project_paths, show_plan},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitegen component` command.
///
/// Dispatch sequence:
/// 1. Locate the project root (nearest settings file, else CWD)
/// 2. Assemble the effective configuration (defaults < config files < settings),
///    resolving config files from the invocation directory upward
/// 3. Plan + early-exit on `--dry-run`
/// 4. Generate via `ComponentService`
#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(
    args: ComponentArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (cwd, root) = project_paths()?;

    // Tool-level defaults are the lowest-precedence configuration layer.
    let defaults = json!({
        "app": {
            "componentDir": config.defaults.component_dir,
            "componentStructure": config.defaults.component_structure,
        },
        "author": author_defaults(&config),
    });

    let filesystem = LocalFilesystem::new();
    let store = JsonSettingsStore::new(Box::new(LocalFilesystem::new()));
    let conf = ConfigInjector::new(&filesystem, &store).inject(&cwd, &root, defaults);

    debug!(
        root = %root.display(),
        styles = args.styles,
        "Component configuration assembled"
    );

    let service = ComponentService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        templates::component_templates(),
    );

    let options = ComponentOptions {
        name: args.name.clone(),
        styles: args.styles,
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

    info!(files = plan.file_count(), "Component command finished");

    output.success(&format!("Component '{}' created", args.name))?;
    if !global.quiet {
        show_plan(&plan, &output)?;
    }

    Ok(())
}
