//! Scaffold plan and render context.
//!
//! A [`ScaffoldPlan`] is the output of the generation services: a project
//! root plus a list of files to write, with no I/O performed yet. Splitting
//! "decide what to write" from "write it" keeps the services testable and
//! gives the CLI a free dry-run mode.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Files to be written relative to a project root.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: PathBuf,
    files: Vec<FileToWrite>,
}

impl ScaffoldPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
        });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Absolute paths the plan will touch, in plan order.
    pub fn absolute_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| self.root.join(&f.path))
    }

    /// Invariants: non-empty, relative paths only, no duplicates.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.display().to_string(),
                });
            }
            if !seen.insert(file.path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// A single file to be materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    /// Path relative to the plan root.
    pub path: PathBuf,
    pub content: String,
}

/// Variable substitution context for template rendering.
///
/// Templates use `{{variable}}` placeholders; unknown placeholders are left
/// in place rather than erroring, so a stray brace pair in generated css or
/// javascript never aborts a scaffold.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self for fluent construction.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string by replacing `{{variable}}` placeholders.
    ///
    /// Simple linear scan-and-replace; adequate for the file sizes involved.
    /// Variables are independent, so replacement order does not matter.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
