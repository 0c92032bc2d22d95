//! Application layer errors.
//!
//! These errors represent failures in orchestration, not export-map rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No manifest at the given location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest exists but could not be read.
    #[error("Failed to read manifest {path}: {reason}")]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// Manifest was read but its exports table could not be understood.
    #[error("Malformed manifest {path}: {reason}")]
    ManifestMalformed { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Manifest store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Pass the package.json of the library, or a bare exports JSON file".into(),
            ],
            Self::ManifestUnreadable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::ManifestMalformed { reason, .. } => vec![
                format!("Parse failed: {}", reason),
                "The 'exports' field must be a string or an object".into(),
                "Condition objects may use 'types', 'import', 'default' or 'require'".into(),
            ],
            Self::StoreLockError => vec![
                "The manifest store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::ManifestMalformed { .. } => ErrorCategory::Validation,
            Self::ManifestUnreadable { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
