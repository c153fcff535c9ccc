//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project settings file could not be written.
    #[error("Failed to persist settings at {path}: {reason}")]
    SettingsPersistence { path: PathBuf, reason: String },

    /// A generated file already exists at the target location.
    #[error("File already exists at {path}")]
    TargetExists { path: PathBuf },

    /// Shared state access failed (lock poisoned, etc.).
    #[error("Adapter state error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SettingsPersistence { path, .. } => vec![
                format!("Could not write settings to: {}", path.display()),
                "Check write permissions on the project root".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different name".into(),
            ],
            Self::StoreLockError => vec![
                "Internal adapter state was poisoned".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::SettingsPersistence { .. } => {
                ErrorCategory::Internal
            }
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
