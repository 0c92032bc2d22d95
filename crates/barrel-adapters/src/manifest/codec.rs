//! Conversion between [`ExportMap`] and the `exports` field of a package.json.
//!
//! Reading accepts the shapes Node tooling actually emits:
//! - `"exports": "./index.js"` - string shorthand for the root entry
//! - `"exports": { ".": "./index.js", "./feature": { ... } }` - subpath map
//! - `"exports": { "types": "...", "import": "..." }` - root conditions
//!
//! Condition objects may use `types`, `import`, `default` and `require`.
//! The import target prefers `import`, then `default`, then `require`; the
//! types target prefers `types` and otherwise follows the import target.
//! Nested condition objects and fallback arrays are flattened to the first
//! string found. A missing target becomes an empty string so that
//! validation can report it.
//!
//! An object without `exports` is read as a bare exports value only if it
//! has a subpath or condition key; any other object is a package.json that
//! publishes nothing.

use serde_json::{Map, Value};
use thiserror::Error;

use barrel_core::{
    domain::{ExportEntry, ExportKey, ExportMap},
    error::{BarrelResult, Context},
};

/// Conditions consulted for the import target, in preference order.
const IMPORT_CONDITIONS: &[&str] = &["import", "default", "require"];

/// Conditions consulted for the types target, in preference order.
const TYPES_CONDITIONS: &[&str] = &["types", "import", "default", "require"];


/// Why a manifest value could not be read as an export map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("package.json has no 'exports' field")]
    NoExports,

    #[error("'exports' must be a string or an object, found {found}")]
    InvalidShape { found: &'static str },

    #[error("'exports' mixes subpath keys and condition keys ('{subpath}' and '{condition}')")]
    MixedKeys { subpath: String, condition: String },

    #[error("invalid export key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Render a map as a JSON `exports` object.
pub fn to_manifest_value(map: &ExportMap) -> Value {
    let entries: Map<String, Value> = map
        .iter()
        .map(|(key, entry)| {
            let mut conditions = Map::new();
            conditions.insert("types".into(), Value::String(entry.types_target.clone()));
            conditions.insert("import".into(), Value::String(entry.import_target.clone()));
            (key.to_string(), Value::Object(conditions))
        })
        .collect();

    Value::Object(entries)
}

/// Render a map as pretty-printed JSON.
pub fn to_manifest_string(map: &ExportMap) -> BarrelResult<String> {
    serde_json::to_string_pretty(&to_manifest_value(map)).context("serializing export map")
}

/// Read an export map from a package.json object or a bare exports value.
pub fn from_manifest_value(value: &Value) -> Result<ExportMap, CodecError> {
    match value {
        Value::Object(obj) => match obj.get("exports") {
            Some(exports) => parse_exports(exports),
            None if looks_like_exports(obj) => parse_exports(value),
            None => Err(CodecError::NoExports),
        },
        other => parse_exports(other),
    }
}

/// Parse a JSON document and read its export map.
pub fn from_manifest_str(source: &str) -> Result<ExportMap, CodecError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| CodecError::Json(e.to_string()))?;
    from_manifest_value(&value)
}

fn parse_exports(exports: &Value) -> Result<ExportMap, CodecError> {
    match exports {
        Value::String(target) => Ok(root_only(ExportEntry::source(target.as_str()))),
        Value::Object(obj) => parse_object(exports, obj),
        other => Err(CodecError::InvalidShape {
            found: json_type(other),
        }),
    }
}

fn parse_object(exports: &Value, obj: &Map<String, Value>) -> Result<ExportMap, CodecError> {
    let subpath = obj.keys().find(|k| k.starts_with('.'));
    let condition = obj.keys().find(|k| !k.starts_with('.'));

    match (subpath, condition) {
        (Some(subpath), Some(condition)) => Err(CodecError::MixedKeys {
            subpath: subpath.clone(),
            condition: condition.clone(),
        }),
        // Root conditions object
        (None, Some(_)) => Ok(root_only(entry_from(exports))),
        _ => obj
            .iter()
            .map(|(raw, target)| {
                ExportKey::try_parse(raw)
                    .map(|key| (key, entry_from(target)))
                    .map_err(|e| CodecError::InvalidKey {
                        key: raw.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect(),
    }
}

/// A bare exports object has a subpath key or a known condition key.
fn looks_like_exports(obj: &Map<String, Value>) -> bool {
    obj.keys()
        .any(|k| k.starts_with('.') || TYPES_CONDITIONS.contains(&k.as_str()))
}

fn root_only(entry: ExportEntry) -> ExportMap {
    let mut map = ExportMap::new();
    map.insert(ExportKey::exact("."), entry);
    map
}

fn entry_from(target: &Value) -> ExportEntry {
    let import = pick(target, IMPORT_CONDITIONS).unwrap_or_default();
    let types = pick(target, TYPES_CONDITIONS).unwrap_or_else(|| import.clone());
    ExportEntry::new(import, types)
}

/// First string reachable from `value` through `conditions`.
fn pick(value: &Value, conditions: &[&str]) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => conditions
            .iter()
            .filter_map(|c| obj.get(*c))
            .find_map(|nested| pick(nested, conditions)),
        Value::Array(fallbacks) => fallbacks.iter().find_map(|v| pick(v, conditions)),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrel_core::domain::{LibraryKind, LibraryKindConfig, resolve_exports};
    use serde_json::json;

    #[test]
    fn reads_string_shorthand() {
        let map = from_manifest_value(&json!({ "name": "pkg", "exports": "./index.js" })).unwrap();

        assert_eq!(map.key_strings(), ["."]);
        assert_eq!(map.get_str(".").unwrap(), &ExportEntry::source("./index.js"));
    }

    #[test]
    fn reads_bare_exports_object() {
        let map = from_manifest_value(&json!({
            ".": "./src/index.ts",
            "./queries/*": "./src/lib/queries/*.ts",
        }))
        .unwrap();

        assert_eq!(map.key_strings(), [".", "./queries/*"]);
        assert!(map.get(&ExportKey::prefix("./queries")).is_some());
    }

    #[test]
    fn import_falls_back_to_default_then_require() {
        let map = from_manifest_value(&json!({
            "exports": {
                "./a": { "default": "./a.js", "require": "./a.cjs" },
                "./b": { "require": "./b.cjs" },
            }
        }))
        .unwrap();

        assert_eq!(map.get_str("./a").unwrap().import_target, "./a.js");
        assert_eq!(map.get_str("./b").unwrap().import_target, "./b.cjs");
        assert_eq!(map.get_str("./b").unwrap().types_target, "./b.cjs");
    }

    #[test]
    fn types_condition_is_preferred() {
        let map = from_manifest_value(&json!({
            "exports": { ".": { "types": "./index.d.ts", "import": "./index.js" } }
        }))
        .unwrap();

        assert_eq!(
            map.get_str(".").unwrap(),
            &ExportEntry::new("./index.js", "./index.d.ts")
        );
    }

    #[test]
    fn nested_conditions_are_flattened() {
        let map = from_manifest_value(&json!({
            "exports": {
                ".": { "import": { "types": "./esm/index.d.ts", "default": "./esm/index.js" } }
            }
        }))
        .unwrap();

        let entry = map.get_str(".").unwrap();
        assert_eq!(entry.import_target, "./esm/index.js");
        assert_eq!(entry.types_target, "./esm/index.d.ts");
    }

    #[test]
    fn root_conditions_object_is_the_barrel() {
        let map = from_manifest_value(&json!({
            "exports": { "import": "./index.js", "types": "./index.d.ts" }
        }))
        .unwrap();

        assert_eq!(map.key_strings(), ["."]);
    }

    #[test]
    fn unusable_values_become_empty_targets() {
        let map = from_manifest_value(&json!({ "exports": { "./x": null, "./y": {} } })).unwrap();

        assert_eq!(map.get_str("./x").unwrap(), &ExportEntry::new("", ""));
        assert_eq!(
            map.get_str("./y").unwrap().missing_fields(),
            vec!["importTarget", "typesTarget"]
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(
            from_manifest_value(&json!({ "exports": 42 })),
            Err(CodecError::InvalidShape { found: "a number" })
        );
        assert_eq!(
            from_manifest_value(&json!({ "name": "pkg" })),
            Err(CodecError::NoExports)
        );
        assert!(matches!(
            from_manifest_value(&json!({ "exports": { ".": "./a.js", "import": "./b.js" } })),
            Err(CodecError::MixedKeys { .. })
        ));
        assert!(matches!(
            from_manifest_value(&json!({ "exports": { "./a/*/b/*": "./x.js" } })),
            Err(CodecError::InvalidKey { .. })
        ));
    }

    #[test]
    fn manifest_without_exports_is_rejected() {
        let workspace_root = json!({
            "private": true,
            "scripts": { "build": "tsc" },
            "workspaces": ["libs/*"],
        });
        assert_eq!(
            from_manifest_value(&workspace_root),
            Err(CodecError::NoExports)
        );
        assert_eq!(from_manifest_value(&json!({})), Err(CodecError::NoExports));
        assert_eq!(
            from_manifest_str(r#"{ "name": "pkg", "version": "1.0.0" }"#),
            Err(CodecError::NoExports)
        );
    }

    #[test]
    fn bare_root_conditions_are_read() {
        let map = from_manifest_value(&json!({ "types": "./index.d.ts", "import": "./index.js" }))
            .unwrap();

        assert_eq!(
            map.get_str(".").unwrap(),
            &ExportEntry::new("./index.js", "./index.d.ts")
        );
    }

    #[test]
    fn bare_string_is_the_barrel() {
        let map = from_manifest_str("\"./index.js\"").unwrap();
        assert_eq!(map.key_strings(), ["."]);
        assert!(matches!(
            from_manifest_str("{ not json"),
            Err(CodecError::Json(_))
        ));
    }

    #[test]
    fn written_manifest_reads_back() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Infra));
        let value = to_manifest_value(&map);

        assert_eq!(
            value["./providers/*"],
            json!({ "types": "./src/lib/providers/*.ts", "import": "./src/lib/providers/*.ts" })
        );
        assert_eq!(from_manifest_value(&value).unwrap(), map);
    }

    #[test]
    fn pretty_string_contains_keys() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Feature));
        let text = to_manifest_string(&map).unwrap();
        assert!(text.contains("\"./types\""));
    }
}
