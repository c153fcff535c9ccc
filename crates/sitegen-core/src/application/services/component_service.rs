//! Component generation.
//!
//! Turns a component name plus the effective configuration into rendered
//! component files under `conf.app.componentDir`, honouring the configured
//! component structure (per-component subdirectory or flat).

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, instrument};

use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::application::services::{author_of, conf_str, validate_name, write_plan};
use crate::domain::{ComponentStructure, RenderContext, ScaffoldPlan, naming};
use crate::error::{SitegenError, SitegenResult};

/// Fallback when the configuration carries no `app` group.
const DEFAULT_COMPONENT_DIR: &str = "src/components";

/// Template sources for component generation. Owned strings so templates can
/// come from the built-in set or be loaded from elsewhere.
#[derive(Debug, Clone)]
pub struct ComponentTemplates {
    /// The component itself (`{{componentName}}.js`).
    pub component: String,
    /// Optional stylesheet (`{{componentName}}.scss`).
    pub stylesheet: String,
    /// Re-export written when each component has its own directory.
    pub index: String,
}

/// Options parsed from the `component` command.
#[derive(Debug, Clone)]
pub struct ComponentOptions {
    /// Raw name as given; converted to PascalCase for file names.
    pub name: String,
    /// Also generate a stylesheet.
    pub styles: bool,
    /// Overwrite existing files.
    pub force: bool,
}

/// Generates component files inside an existing project.
pub struct ComponentService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    templates: ComponentTemplates,
}

impl ComponentService {
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        templates: ComponentTemplates,
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
        options: &ComponentOptions,
    ) -> SitegenResult<ScaffoldPlan> {
        validate_name(&options.name).map_err(SitegenError::Domain)?;

        let component_name = naming::pascal_case(&options.name);
        let component_dir = conf_str(conf, "app", "componentDir").unwrap_or(DEFAULT_COMPONENT_DIR);
        let structure: ComponentStructure = conf_str(conf, "app", "componentStructure")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let (author_name, author_email) = author_of(conf);

        let context = RenderContext::new()
            .with_variable("name", options.name.trim())
            .with_variable("componentName", &component_name)
            .with_variable("authorName", author_name)
            .with_variable("authorEmail", author_email);

        let mut dir = PathBuf::from(component_dir);
        if structure.uses_subdirectory() {
            dir.push(&component_name);
        }

        let mut plan = ScaffoldPlan::new(project_root);
        plan.add_file(
            dir.join(format!("{component_name}.js")),
            self.renderer.render(&self.templates.component, &context),
        );

        if options.styles {
            plan.add_file(
                dir.join(format!("{component_name}.scss")),
                self.renderer.render(&self.templates.stylesheet, &context),
            );
        }

        if structure.uses_subdirectory() {
            plan.add_file(
                dir.join("index.js"),
                self.renderer.render(&self.templates.index, &context),
            );
        }

        Ok(plan)
    }

    /// Plan and write the component files.
    #[instrument(skip_all, fields(name = %options.name, root = %project_root.display()))]
    pub fn generate(
        &self,
        project_root: &Path,
        conf: &Value,
        options: &ComponentOptions,
    ) -> SitegenResult<ScaffoldPlan> {
        let plan = self.plan(project_root, conf, options)?;
        write_plan(self.filesystem.as_ref(), &plan, options.force)?;
        info!(files = plan.file_count(), "Component generated");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use serde_json::json;

    struct SubstRenderer;

    impl TemplateRenderer for SubstRenderer {
        fn render(&self, template: &str, context: &RenderContext) -> String {
            context.render(template)
        }
    }

    fn service() -> ComponentService {
        ComponentService::new(
            Box::new(SubstRenderer),
            Box::new(MockFilesystem::new()),
            ComponentTemplates {
                component: "// {{componentName}} by {{authorName}}".into(),
                stylesheet: ".{{componentName}} {}".into(),
                index: "export { default } from './{{componentName}}';".into(),
            },
        )
    }

    fn opts(name: &str, styles: bool) -> ComponentOptions {
        ComponentOptions {
            name: name.into(),
            styles,
            force: false,
        }
    }

    #[test]
    fn directory_structure_adds_subdir_and_index() {
        let conf = json!({"app": {"componentDir": "src/components", "componentStructure": "directory"}});
        let plan = service()
            .plan(Path::new("/proj"), &conf, &opts("nav bar", false))
            .unwrap();

        let paths: Vec<_> = plan.files().iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("src/components/NavBar/NavBar.js"),
                PathBuf::from("src/components/NavBar/index.js"),
            ]
        );
    }

    #[test]
    fn flat_structure_skips_subdir_and_index() {
        let conf = json!({"app": {"componentDir": "comps", "componentStructure": "flat"}});
        let plan = service()
            .plan(Path::new("/proj"), &conf, &opts("NavBar", true))
            .unwrap();

        let paths: Vec<_> = plan.files().iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("comps/NavBar.js"),
                PathBuf::from("comps/NavBar.scss"),
            ]
        );
    }

    #[test]
    fn defaults_apply_when_conf_is_empty() {
        let plan = service()
            .plan(Path::new("/proj"), &json!({}), &opts("widget", false))
            .unwrap();
        assert_eq!(
            plan.files()[0].path,
            PathBuf::from("src/components/Widget/Widget.js")
        );
    }

    #[test]
    fn author_is_rendered_into_content() {
        let conf = json!({"author": {"name": "Alice"}});
        let plan = service()
            .plan(Path::new("/proj"), &conf, &opts("widget", false))
            .unwrap();
        assert_eq!(plan.files()[0].content, "// Widget by Alice");
    }

    #[test]
    fn invalid_name_is_rejected() {
        let result = service().plan(Path::new("/proj"), &json!({}), &opts("  ", false));
        assert!(matches!(result, Err(SitegenError::Domain(_))));
    }
}
