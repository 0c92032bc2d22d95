//! Errors raised by the export-map domain: unknown kinds and platforms,
//! malformed keys or layouts, and overlapping wildcards.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them alongside results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Expected outcomes (unsupported kinds, unpublished paths, empty targets)
/// are data, not errors. This enum only covers construction mistakes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown library kind: {0}")]
    UnknownKind(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("invalid export key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid layout field '{field}': {reason}")]
    InvalidLayout { field: &'static str, reason: String },

    // ========================================================================
    // Construction Errors
    // ========================================================================
    #[error("wildcard '{first}' overlaps wildcard '{second}'")]
    OverlappingWildcards { first: String, second: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not a library kind", kind),
                "Supported kinds: contract, data-access, feature, infra, provider".into(),
                "Try: barrel kinds".into(),
            ],
            Self::UnknownPlatform(platform) => vec![
                format!("'{}' is not a platform", platform),
                "Supported platforms: client, server, edge".into(),
            ],
            Self::InvalidKey { key, .. } => vec![
                format!("Export key '{}' is malformed", key),
                "Keys are '.' or start with './'; wildcards end in '/*'".into(),
            ],
            Self::InvalidLayout { field, .. } => vec![
                format!("Check the [layout] {} setting", field),
                "Try: barrel config list".into(),
            ],
            Self::OverlappingWildcards { first, second } => vec![
                format!("'{}' and '{}' can both answer the same import", first, second),
                "Remove one wildcard or move it under a distinct directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownKind(_) | Self::UnknownPlatform(_) | Self::InvalidKey { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidLayout { .. } => ErrorCategory::Configuration,
            Self::OverlappingWildcards { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
}
