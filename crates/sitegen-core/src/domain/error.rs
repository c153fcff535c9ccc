//! Domain-layer errors.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("Unknown component structure: {0}")]
    UnknownComponentStructure(String),

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in scaffold plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Scaffold plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("The name '{}' cannot be used: {}", name, reason),
                "Use letters, digits, hyphens, underscores, and spaces".into(),
            ],
            Self::UnknownProjectType(value) => vec![
                format!("'{}' is not a recognised project type", value),
                "Supported types: webapp, restapp, website, other".into(),
            ],
            Self::UnknownComponentStructure(value) => vec![
                format!("'{}' is not a recognised component structure", value),
                "Supported structures: directory, flat".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnknownProjectType(_)
            | Self::UnknownComponentStructure(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
