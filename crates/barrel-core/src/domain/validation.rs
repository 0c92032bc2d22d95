use std::fmt;

use crate::domain::{
    entities::{ExportKey, ExportLayout, ExportMap},
    error::DomainError,
};

/// One malformed entry found by export-map validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportIssue {
    pub key: ExportKey,
    /// Empty target fields, `importTarget` before `typesTarget`.
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ExportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "export '{}' has an empty {}",
            self.key,
            self.missing.join(" and ")
        )
    }
}

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &ExportLayout) -> Result<(), DomainError> {
        layout.validate()
    }

    /// Structural check: no two wildcards may answer one request.
    pub fn validate_wildcards(map: &ExportMap) -> Result<(), DomainError> {
        match map.wildcard_overlaps().first() {
            Some((first, second)) => Err(DomainError::OverlappingWildcards {
                first: first.to_string(),
                second: second.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Entry check: one issue per entry with an empty target.
    pub fn export_issues(map: &ExportMap) -> Vec<ExportIssue> {
        map.iter()
            .filter_map(|(key, entry)| {
                let missing = entry.missing_fields();
                (!missing.is_empty()).then(|| ExportIssue {
                    key: key.clone(),
                    missing,
                })
            })
            .collect()
    }
}
