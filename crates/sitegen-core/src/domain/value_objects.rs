//! Domain value objects: ProjectType, ComponentStructure.
//!
//! Pure value types — `Copy`, equality-by-value, no identity. Their only job
//! is to define the types, their string representations, and their `FromStr`
//! parsers. They mirror the values stored in project configuration files, so
//! the `as_str` forms are also the on-disk forms.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of project a configuration file describes.
///
/// Stored under the `type` key of the project settings file. `Other` is the
/// catch-all for projects that use the config machinery without any of the
/// type-specific generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectType {
    WebApp,
    RestApp,
    #[default]
    Website,
    Other,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WebApp => "webapp",
            Self::RestApp => "restapp",
            Self::Website => "website",
            Self::Other => "other",
        }
    }

    /// Whether this project type carries script modules.
    pub const fn has_script_modules(self) -> bool {
        matches!(self, Self::Website)
    }

    /// Whether this project type carries components.
    pub const fn has_components(self) -> bool {
        matches!(self, Self::WebApp)
    }

    /// Whether this project type can be written in TypeScript.
    pub const fn may_use_typescript(self) -> bool {
        matches!(self, Self::WebApp | Self::RestApp)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webapp" | "web-app" | "app" => Ok(Self::WebApp),
            "restapp" | "rest-app" | "rest" | "api" => Ok(Self::RestApp),
            "website" | "site" => Ok(Self::Website),
            // Legacy settings files store the catch-all as an empty string.
            "other" | "" => Ok(Self::Other),
            other => Err(DomainError::UnknownProjectType(other.to_string())),
        }
    }
}

// ── ComponentStructure ────────────────────────────────────────────────────────

/// How generated components are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentStructure {
    /// One directory per component: `components/Widget/Widget.js` plus an
    /// `index.js` re-export.
    #[default]
    Directory,
    /// All components side by side: `components/Widget.js`.
    Flat,
}

impl ComponentStructure {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Flat => "flat",
        }
    }

    /// Whether each component gets its own subdirectory.
    pub const fn uses_subdirectory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for ComponentStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentStructure {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "dir" | "nested" => Ok(Self::Directory),
            "flat" => Ok(Self::Flat),
            other => Err(DomainError::UnknownComponentStructure(other.to_string())),
        }
    }
}
