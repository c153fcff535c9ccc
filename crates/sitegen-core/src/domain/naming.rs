//! Name casing helpers for generated files.
//!
//! Component names become PascalCase (`nav bar` → `NavBar`); script module
//! names are camelCased then hyphenated (`Nav Bar` → `nav-bar`), matching the
//! file-name conventions the generated projects expect.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

/// PascalCase (`my widget` → `MyWidget`). Used for component file names.
pub fn pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// camelCase (`my widget` → `myWidget`). Used for script variable names.
pub fn camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Lower-cased, hyphen-separated (`MyWidget` → `my-widget`). Used for script
/// module directories and file names.
pub fn hyphen_case(name: &str) -> String {
    name.to_kebab_case()
}

/// Build a css class from a configured prefix and a hyphenated module name.
///
/// The prefix is applied verbatim; `"sv-"` + `"nav-bar"` → `"sv-nav-bar"`.
pub fn css_class(prefix: &str, hyphened_name: &str) -> String {
    format!("{prefix}{hyphened_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_from_spaced_words() {
        assert_eq!(pascal_case("nav bar"), "NavBar");
        assert_eq!(pascal_case("navBar"), "NavBar");
        assert_eq!(pascal_case("nav-bar"), "NavBar");
    }

    #[test]
    fn camel_case_from_mixed_input() {
        assert_eq!(camel_case("Nav Bar"), "navBar");
        assert_eq!(camel_case("nav-bar"), "navBar");
        assert_eq!(camel_case("NAV"), "nav");
    }

    #[test]
    fn hyphen_case_from_camel() {
        assert_eq!(hyphen_case("navBar"), "nav-bar");
        assert_eq!(hyphen_case("Nav Bar"), "nav-bar");
        assert_eq!(hyphen_case("nav_bar"), "nav-bar");
    }

    #[test]
    fn css_class_applies_prefix_verbatim() {
        assert_eq!(css_class("sv-", "nav-bar"), "sv-nav-bar");
        assert_eq!(css_class("", "nav-bar"), "nav-bar");
    }
}
