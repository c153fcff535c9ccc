//! Simple variable substitution renderer.

use sitegen_core::{application::ports::TemplateRenderer, domain::RenderContext};
use tracing::instrument;

/// Simple renderer using basic `{{variable}}` substitution.
///
/// Delegates to [`RenderContext::render`]; this adapter exists so that a
/// richer engine could be swapped in behind the port without touching the
/// services.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, context: &RenderContext) -> String {
        context.render(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_variables() {
        let ctx = RenderContext::new().with_variable("componentName", "NavBar");
        let rendered = SimpleRenderer::new().render("class {{componentName}} {}", &ctx);
        assert_eq!(rendered, "class NavBar {}");
    }
}
