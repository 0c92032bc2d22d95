//! Source-tree conventions used to build export targets.
//!
//! Passed explicitly to the resolver; nothing here reads process-wide state.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Where a generated library keeps its sources.
///
/// With the defaults, `lib_index("queries")` is
/// `./src/lib/queries/index.ts` and `lib_pattern("queries")` is
/// `./src/lib/queries/*.ts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLayout {
    /// Root of the library sources, relative to the package (`./src`).
    pub source_root: String,
    /// Directory under `source_root` holding implementation modules (`lib`).
    /// Empty places modules directly under `source_root`.
    pub lib_dir: String,
    /// File extension without the dot (`ts`).
    pub extension: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            source_root: "./src".into(),
            lib_dir: "lib".into(),
            extension: "ts".into(),
        }
    }
}

impl ExportLayout {
    /// Build a validated layout.
    pub fn new(
        source_root: impl Into<String>,
        lib_dir: impl Into<String>,
        extension: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let layout = Self {
            source_root: source_root.into(),
            lib_dir: lib_dir.into(),
            extension: extension.into(),
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Check the layout produces package-relative targets.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.source_root != "." && !self.source_root.starts_with("./") {
            return Err(DomainError::InvalidLayout {
                field: "source_root",
                reason: format!("'{}' must start with './'", self.source_root),
            });
        }
        if self.source_root.ends_with('/') {
            return Err(DomainError::InvalidLayout {
                field: "source_root",
                reason: "trailing '/' is not allowed".into(),
            });
        }
        if self.lib_dir.starts_with('/') || self.lib_dir.ends_with('/') {
            return Err(DomainError::InvalidLayout {
                field: "lib_dir",
                reason: format!("'{}' must not start or end with '/'", self.lib_dir),
            });
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(DomainError::InvalidLayout {
                field: "extension",
                reason: format!("'{}' must be non-empty and without a leading '.'", self.extension),
            });
        }
        for (field, value) in [
            ("source_root", &self.source_root),
            ("lib_dir", &self.lib_dir),
            ("extension", &self.extension),
        ] {
            if value.contains('*') {
                return Err(DomainError::InvalidLayout {
                    field,
                    reason: "'*' is reserved for wildcard targets".into(),
                });
            }
        }
        Ok(())
    }

    /// The library barrel: `./src/index.ts`.
    pub fn barrel(&self) -> String {
        format!("{}/index.{}", self.source_root, self.extension)
    }

    /// The type-only barrel: `./src/types.ts`.
    pub fn types_barrel(&self) -> String {
        format!("{}/types.{}", self.source_root, self.extension)
    }

    /// A single module under the lib dir: `./src/lib/errors.ts`.
    pub fn lib_file(&self, stem: &str) -> String {
        format!("{}/{}.{}", self.lib_root(), stem, self.extension)
    }

    /// The index of a lib directory: `./src/lib/queries/index.ts`.
    pub fn lib_index(&self, dir: &str) -> String {
        format!("{}/{}/index.{}", self.lib_root(), dir, self.extension)
    }

    /// Per-item pattern in a lib directory: `./src/lib/queries/*.ts`.
    pub fn lib_pattern(&self, dir: &str) -> String {
        format!("{}/{}/*.{}", self.lib_root(), dir, self.extension)
    }

    fn lib_root(&self) -> String {
        if self.lib_dir.is_empty() {
            self.source_root.clone()
        } else {
            format!("{}/{}", self.source_root, self.lib_dir)
        }
    }
}
