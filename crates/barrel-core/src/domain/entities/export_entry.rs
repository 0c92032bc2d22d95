use serde::{Deserialize, Serialize};

/// Manifest field names for the two targets, as reported by validation.
pub const IMPORT_FIELD: &str = "importTarget";
pub const TYPES_FIELD: &str = "typesTarget";

/// The right-hand side of an export map: one runtime target, one types target.
///
/// Serializes as a manifest condition pair with `types` first, which is the
/// order TypeScript requires when it scans conditions.
///
/// Empty targets are representable so hand-authored manifests can be loaded
/// as-is; `validate_export_map` reports them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportEntry {
    #[serde(rename = "types")]
    pub types_target: String,
    #[serde(rename = "import")]
    pub import_target: String,
}

impl ExportEntry {
    pub fn new(import_target: impl Into<String>, types_target: impl Into<String>) -> Self {
        Self {
            import_target: import_target.into(),
            types_target: types_target.into(),
        }
    }

    /// Entry whose runtime and types targets are the same source file.
    pub fn source(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            types_target: target.clone(),
            import_target: target,
        }
    }

    /// Replace every `*` in both targets with `suffix`.
    pub fn substitute(&self, suffix: &str) -> Self {
        Self {
            import_target: self.import_target.replace('*', suffix),
            types_target: self.types_target.replace('*', suffix),
        }
    }

    /// Whether either target carries a `*` placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.import_target.contains('*') || self.types_target.contains('*')
    }

    /// Names of the empty target fields, in manifest order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.import_target.is_empty() {
            missing.push(IMPORT_FIELD);
        }
        if self.types_target.is_empty() {
            missing.push(TYPES_FIELD);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_both_targets() {
        let entry = ExportEntry::new("./src/lib/queries/*.ts", "./src/lib/queries/*.d.ts");
        let resolved = entry.substitute("find-by-id");
        assert_eq!(resolved.import_target, "./src/lib/queries/find-by-id.ts");
        assert_eq!(resolved.types_target, "./src/lib/queries/find-by-id.d.ts");
        assert!(!resolved.is_parameterized());
    }

    #[test]
    fn missing_fields_reports_each_empty_target() {
        assert_eq!(
            ExportEntry::new("", "./x.ts").missing_fields(),
            vec![IMPORT_FIELD]
        );
        assert_eq!(
            ExportEntry::new("", "").missing_fields(),
            vec![IMPORT_FIELD, TYPES_FIELD]
        );
        assert!(ExportEntry::source("./x.ts").missing_fields().is_empty());
    }

    #[test]
    fn serializes_as_condition_pair_types_first() {
        let json = serde_json::to_string(&ExportEntry::source("./src/index.ts")).unwrap();
        assert_eq!(
            json,
            r#"{"types":"./src/index.ts","import":"./src/index.ts"}"#
        );
    }
}
