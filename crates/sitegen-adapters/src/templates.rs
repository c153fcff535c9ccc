//! Built-in templates for component and script-module generation.
//!
//! Templates use `{{variable}}` placeholders resolved by the renderer. The
//! variable set is the contract with the services in `sitegen-core`:
//! components get `name`, `componentName`, `authorName`, `authorEmail`;
//! script modules additionally get `camelName`, `hyphenedName`, `cssClass`,
//! and `settingsBlock`.

use sitegen_core::application::{ComponentTemplates, ScriptTemplates};

const COMPONENT_JS: &str = r#"import React from 'react';

/**
 * {{name}}
 *
 * @author {{authorName}} <{{authorEmail}}>
 */
const {{componentName}} = (props) => {
  return (
    <div data-component="{{componentName}}">
      {{name}}
    </div>
  );
};

export default {{componentName}};
"#;

const COMPONENT_SCSS: &str = r#".{{componentName}} {
  display: block;
}
"#;

const COMPONENT_INDEX_JS: &str = r#"export { default } from './{{componentName}}';
"#;

const SCRIPT_SERVER_JS: &str = r#"/**
 * {{name}} (server)
 *
 * @author {{authorName}} <{{authorEmail}}>
 */
{{settingsBlock}}
(function () {
  renderer.render('{{hyphenedName}}', {
    cssClass: '{{cssClass}}',
  });
})();
"#;

const SCRIPT_TEMPLATE_VM: &str = r#"## {{name}}
<div class="{{cssClass}}">
  $!{content}
</div>
"#;

const SCRIPT_STYLES_CSS: &str = r#".{{cssClass}} {
  display: block;
}
"#;

const SCRIPT_CLIENT_JS: &str = r#"/**
 * {{name}} (client)
 *
 * @author {{authorName}} <{{authorEmail}}>
 */
(function () {
  var elements = document.querySelectorAll('.{{cssClass}}');

  Array.prototype.forEach.call(elements, function (element) {
    // Wire client behaviour for {{camelName}} here.
  });
})();
"#;

/// The built-in component template set.
pub fn component_templates() -> ComponentTemplates {
    ComponentTemplates {
        component: COMPONENT_JS.to_string(),
        stylesheet: COMPONENT_SCSS.to_string(),
        index: COMPONENT_INDEX_JS.to_string(),
    }
}

/// The built-in script-module template set.
pub fn script_templates() -> ScriptTemplates {
    ScriptTemplates {
        server: SCRIPT_SERVER_JS.to_string(),
        template: SCRIPT_TEMPLATE_VM.to_string(),
        stylesheet: SCRIPT_STYLES_CSS.to_string(),
        client: SCRIPT_CLIENT_JS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_templates_use_contract_variables() {
        let t = component_templates();
        assert!(t.component.contains("{{componentName}}"));
        assert!(t.index.contains("{{componentName}}"));
        assert!(t.stylesheet.contains("{{componentName}}"));
    }

    #[test]
    fn script_templates_use_contract_variables() {
        let t = script_templates();
        assert!(t.server.contains("{{settingsBlock}}"));
        assert!(t.template.contains("{{cssClass}}"));
        assert!(t.client.contains("{{cssClass}}"));
    }
}
