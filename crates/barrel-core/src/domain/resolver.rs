//! Export-map resolution, merging, lookup and validation.
//!
//! Every function here is pure: inputs in, fresh data out. None of them
//! fail on well-formed input; expected outcomes (unsupported kind,
//! unpublished path, empty target) come back as data.

use crate::domain::{
    entities::{ExportEntry, ExportKey, ExportLayout, ExportMap, LibraryKindConfig},
    registry::{self, ExportDef},
    validation::{DomainValidator, ExportIssue},
    value_objects::KindSelection,
};

/// Compute the export map for a library using the default layout.
///
/// Unsupported kinds get [`registry::MINIMAL_EXPORTS`]: the `.` barrel only.
pub fn resolve_exports(config: &LibraryKindConfig) -> ExportMap {
    resolve_exports_with_layout(config, &ExportLayout::default())
}

/// Compute the export map for a library under an explicit layout.
pub fn resolve_exports_with_layout(config: &LibraryKindConfig, layout: &ExportLayout) -> ExportMap {
    let table: &[ExportDef] = match config.kind() {
        KindSelection::Supported(kind) => registry::exports_for(*kind),
        KindSelection::Unsupported(_) => registry::MINIMAL_EXPORTS,
    };

    table
        .iter()
        .filter(|def| def.when.holds(config))
        .map(|def| {
            (
                ExportKey::parse(def.key),
                ExportEntry::source(def.target.render(layout)),
            )
        })
        .collect()
}

/// Merge two maps: every `base` key, then every `overrides` key on top.
///
/// Shared keys take the override entry whole; there is no field-level merge.
pub fn merge_exports(base: &ExportMap, overrides: &ExportMap) -> ExportMap {
    let mut merged = base.clone();
    for (key, entry) in overrides {
        merged.insert(key.clone(), entry.clone());
    }
    merged
}

/// The key that answers an import request, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch {
    pub key: ExportKey,
    /// What `*` stands for; `None` for exact matches.
    pub suffix: Option<String>,
    /// Other wildcard keys that also matched and lost the tie-break.
    ///
    /// Always empty for maps without overlapping wildcards.
    pub shadowed: Vec<ExportKey>,
}

impl ImportMatch {
    pub fn is_wildcard(&self) -> bool {
        self.suffix.is_some()
    }

    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }

    /// The declared entry for the matched key, unsubstituted.
    pub fn entry<'m>(&self, map: &'m ExportMap) -> Option<&'m ExportEntry> {
        map.get(&self.key)
    }

    /// The entry with `*` replaced by the matched suffix.
    pub fn target(&self, map: &ExportMap) -> Option<ExportEntry> {
        let entry = self.entry(map)?;
        Some(match &self.suffix {
            Some(suffix) => entry.substitute(suffix),
            None => entry.clone(),
        })
    }
}

/// Find the key that would serve `requested`.
///
/// 1. An exact key equal to the request wins outright.
/// 2. Otherwise a wildcard whose base plus `/` starts the request matches.
/// 3. If several wildcards match (overlapping prefixes, only possible for
///    maps assembled outside [`ExportMap::builder`]), the first in map
///    order wins and the rest are reported in [`ImportMatch::shadowed`].
/// 4. No match returns `None`; callers treat that as an unpublished path.
///    A request containing `*` is a key pattern, not an import path, and
///    never matches.
pub fn resolve_import_path(map: &ExportMap, requested: &str) -> Option<ImportMatch> {
    // An import path never contains `*`; only keys do.
    if requested.contains('*') {
        return None;
    }

    let exact = ExportKey::Exact(requested.to_string());
    if map.get(&exact).is_some() {
        return Some(ImportMatch {
            key: exact,
            suffix: None,
            shadowed: Vec::new(),
        });
    }

    let mut candidates = map
        .wildcards()
        .filter_map(|(key, _)| key.match_request(requested).map(|suffix| (key, suffix)));

    let (key, suffix) = candidates.next()?;
    Some(ImportMatch {
        key: key.clone(),
        suffix: Some(suffix.to_string()),
        shadowed: candidates.map(|(other, _)| other.clone()).collect(),
    })
}

/// Resolve `requested` straight to its substituted entry.
pub fn resolve_target(map: &ExportMap, requested: &str) -> Option<ExportEntry> {
    resolve_import_path(map, requested)?.target(map)
}

/// Report every entry with an empty import or types target.
pub fn validate_export_map(map: &ExportMap) -> Vec<ExportIssue> {
    DomainValidator::export_issues(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{LibraryKind, Platform};

    fn keys(map: &ExportMap) -> Vec<String> {
        map.key_strings()
    }

    // ========================================================================
    // resolve_exports
    // ========================================================================

    #[test]
    fn resolution_is_deterministic() {
        let config = LibraryKindConfig::new(LibraryKind::DataAccess);
        assert_eq!(resolve_exports(&config), resolve_exports(&config));
    }

    #[test]
    fn contract_without_entities() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Contract));
        assert_eq!(
            keys(&map),
            [".", "./errors", "./events", "./ports", "./types"]
        );
        assert!(!map.contains_key("./entities"));
        assert!(!map.contains_key("./entities/*"));
    }

    #[test]
    fn contract_with_entities() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Contract).with_entities(true));
        assert!(map.contains_key("./entities"));
        assert_eq!(
            map.get_str("./entities/*").unwrap().import_target,
            "./src/lib/entities/*.ts"
        );
    }

    #[test]
    fn data_access_table() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));
        assert_eq!(
            keys(&map),
            [
                ".",
                "./layers",
                "./layers/*",
                "./queries",
                "./queries/*",
                "./repository",
                "./repository/operations",
                "./repository/operations/*",
                "./types",
                "./validation",
                "./validation/*",
            ]
        );
    }

    #[test]
    fn feature_without_rpc_is_barrels_only() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Feature));
        assert_eq!(keys(&map), [".", "./types"]);
    }

    #[test]
    fn feature_with_rpc_adds_handlers() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Feature).with_rpc(true));
        assert_eq!(
            keys(&map),
            [".", "./rpc/handlers", "./rpc/handlers/*", "./types"]
        );
    }

    #[test]
    fn feature_platforms_never_become_paths() {
        let config = LibraryKindConfig::new(LibraryKind::Feature)
            .with_platform(Platform::Client)
            .with_platform(Platform::Server)
            .with_platform(Platform::Edge);
        assert_eq!(keys(&resolve_exports(&config)), [".", "./types"]);
    }

    #[test]
    fn infra_table() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Infra));
        assert_eq!(
            keys(&map),
            [".", "./layers/*", "./providers/*", "./service", "./types"]
        );
    }

    #[test]
    fn provider_table() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Provider));
        assert_eq!(
            keys(&map),
            [
                ".",
                "./errors",
                "./service",
                "./service/*",
                "./types",
                "./validation"
            ]
        );
    }

    #[test]
    fn unsupported_kind_gets_barrel_only() {
        let map = resolve_exports(&LibraryKindConfig::from_kind_str("unknown-kind"));
        assert_eq!(keys(&map), ["."]);
        assert_eq!(map.get_str(".").unwrap().import_target, "./src/index.ts");
    }

    #[test]
    fn layout_is_applied_to_every_target() {
        let layout = ExportLayout::new("./source", "internal", "mts").unwrap();
        let map = resolve_exports_with_layout(&LibraryKindConfig::new(LibraryKind::Infra), &layout);
        assert_eq!(map.get_str(".").unwrap().import_target, "./source/index.mts");
        assert_eq!(
            map.get_str("./providers/*").unwrap().types_target,
            "./source/internal/providers/*.mts"
        );
    }

    #[test]
    fn every_kind_resolves_without_wildcard_overlaps() {
        for kind in LibraryKind::ALL {
            let config = LibraryKindConfig::new(kind)
                .with_entities(true)
                .with_rpc(true);
            let map = resolve_exports(&config);
            assert!(
                map.wildcard_overlaps().is_empty(),
                "{kind}: {:?}",
                map.wildcard_overlaps()
            );
        }
    }

    // ========================================================================
    // merge_exports
    // ========================================================================

    #[test]
    fn merge_prefers_overrides_whole_entry() {
        let base = ExportMap::builder()
            .exact(".", ExportEntry::source("./src/index.ts"))
            .exact("./legacy", ExportEntry::source("./src/legacy.ts"))
            .build()
            .unwrap();
        let overrides = ExportMap::builder()
            .exact(".", ExportEntry::new("./dist/index.js", ""))
            .build()
            .unwrap();

        let merged = merge_exports(&base, &overrides);
        assert_eq!(
            merged.get_str("."),
            Some(&ExportEntry::new("./dist/index.js", ""))
        );
        assert_eq!(
            merged.get_str("./legacy"),
            Some(&ExportEntry::source("./src/legacy.ts"))
        );
    }

    #[test]
    fn merge_of_disjoint_maps_is_union() {
        let a = ExportMap::builder()
            .exact("./a", ExportEntry::source("./a.ts"))
            .exact("./b", ExportEntry::source("./b.ts"))
            .build()
            .unwrap();
        let c = ExportMap::builder()
            .exact("./c", ExportEntry::source("./c.ts"))
            .build()
            .unwrap();

        assert_eq!(keys(&merge_exports(&a, &c)), ["./a", "./b", "./c"]);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let base = resolve_exports(&LibraryKindConfig::new(LibraryKind::Feature));
        let overrides = resolve_exports(&LibraryKindConfig::new(LibraryKind::Infra));
        let before = base.clone();
        let _ = merge_exports(&base, &overrides);
        assert_eq!(base, before);
    }

    // ========================================================================
    // resolve_import_path
    // ========================================================================

    #[test]
    fn exact_beats_wildcard() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::Provider));
        let hit = resolve_import_path(&map, "./service").unwrap();
        assert_eq!(hit.key, ExportKey::exact("./service"));
        assert!(!hit.is_wildcard());
    }

    #[test]
    fn wildcard_prefix_match() {
        let map = ExportMap::builder()
            .exact(
                "./repository/operations",
                ExportEntry::source("./src/lib/repository/operations/index.ts"),
            )
            .wildcard(
                "./repository/operations",
                ExportEntry::source("./src/lib/repository/operations/*.ts"),
            )
            .wildcard("./queries", ExportEntry::source("./src/lib/queries/*.ts"))
            .build()
            .unwrap();

        let hit = resolve_import_path(&map, "./repository/operations/create").unwrap();
        assert_eq!(hit.key.to_string(), "./repository/operations/*");
        assert_eq!(hit.suffix.as_deref(), Some("create"));
        assert!(!hit.is_ambiguous());
    }

    #[test]
    fn unpublished_path_is_no_match() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));
        assert_eq!(resolve_import_path(&map, "./nonexistent"), None);
    }

    #[test]
    fn overlapping_wildcards_pick_first_in_key_order() {
        let mut map = ExportMap::new();
        map.insert(
            ExportKey::prefix("./layers/http"),
            ExportEntry::source("./src/http/*.ts"),
        );
        map.insert(
            ExportKey::prefix("./layers"),
            ExportEntry::source("./src/layers/*.ts"),
        );

        let hit = resolve_import_path(&map, "./layers/http/live").unwrap();
        assert_eq!(hit.key, ExportKey::prefix("./layers"));
        assert_eq!(hit.suffix.as_deref(), Some("http/live"));
        assert_eq!(hit.shadowed, vec![ExportKey::prefix("./layers/http")]);
    }

    #[test]
    fn wildcard_pattern_is_not_an_import_path() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));

        assert_eq!(resolve_import_path(&map, "./queries/*"), None);
        assert_eq!(resolve_target(&map, "./queries/*"), None);
    }

    #[test]
    fn matched_key_is_always_in_the_map() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));
        for requested in [".", "./types", "./queries/find", "./queries/"] {
            if let Some(hit) = resolve_import_path(&map, requested) {
                assert!(map.get(&hit.key).is_some(), "{requested} -> {}", hit.key);
            }
        }
    }

    #[test]
    fn data_access_query_end_to_end() {
        let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));
        let hit = resolve_import_path(&map, "./queries/find-by-id").unwrap();
        assert_eq!(hit.key.to_string(), "./queries/*");

        let target = hit.target(&map).unwrap();
        assert_eq!(target.import_target, "./src/lib/queries/find-by-id.ts");
        assert_eq!(target.types_target, "./src/lib/queries/find-by-id.ts");
    }

    #[test]
    fn resolve_target_for_entity() {
        let config = LibraryKindConfig::new(LibraryKind::Contract).with_entity("UserProfile");
        let map = resolve_exports(&config);
        let subpath = &config.entity_subpaths()[0];
        assert_eq!(
            resolve_target(&map, subpath).unwrap().import_target,
            "./src/lib/entities/user-profile.ts"
        );
    }

    // ========================================================================
    // validate_export_map
    // ========================================================================

    #[test]
    fn empty_import_target_is_reported() {
        let mut map = ExportMap::new();
        map.insert(ExportKey::exact("./x"), ExportEntry::new("", "./x.ts"));

        let issues = validate_export_map(&map);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().contains("importTarget"));
        assert!(!issues[0].to_string().contains("typesTarget"));
    }

    #[test]
    fn resolved_maps_validate_cleanly() {
        for kind in LibraryKind::ALL {
            for flags in [false, true] {
                let config = LibraryKindConfig::new(kind)
                    .with_entities(flags)
                    .with_rpc(flags);
                let map = resolve_exports(&config);
                assert!(validate_export_map(&map).is_empty(), "{kind}");
            }
        }
        let minimal = resolve_exports(&LibraryKindConfig::from_kind_str("widget"));
        assert!(validate_export_map(&minimal).is_empty());
    }
}
