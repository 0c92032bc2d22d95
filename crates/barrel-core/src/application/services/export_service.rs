//! Export Service - main application orchestrator.
//!
//! This service coordinates the export workflow:
//! 1. Resolve the generated export map for a library kind
//! 2. Optionally load a hand-authored base map through the manifest port
//! 3. Merge the two with the requested precedence
//!
//! It also wraps lookup and validation so that ambiguity and problems are
//! logged once, here, instead of inside the pure domain functions.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ManifestStore},
    domain::{
        DomainValidator as validator, ExportIssue, ExportLayout, ExportMap, ImportMatch,
        KindSelection, LibraryKindConfig, merge_exports, resolve_exports_with_layout,
        resolve_import_path, validate_export_map,
    },
    error::BarrelResult,
};

/// Which side wins when a base manifest and the generated map share a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePrecedence {
    /// Generated entries replace base entries.
    #[default]
    GeneratedWins,
    /// Base entries replace generated entries (hand edits are kept).
    BaseWins,
}

/// Main export-map service.
pub struct ExportService {
    store: Box<dyn ManifestStore>,
    layout: ExportLayout,
}

impl ExportService {
    /// Create a service using the default source layout.
    pub fn new(store: Box<dyn ManifestStore>) -> Self {
        Self {
            store,
            layout: ExportLayout::default(),
        }
    }

    /// Create a service with an explicit source layout.
    pub fn with_layout(store: Box<dyn ManifestStore>, layout: ExportLayout) -> BarrelResult<Self> {
        validator::validate_layout(&layout)?;
        Ok(Self { store, layout })
    }

    pub fn layout(&self) -> &ExportLayout {
        &self.layout
    }

    /// Resolve the generated export map for a library.
    ///
    /// Unsupported kinds yield the barrel-only map and a warning.
    #[instrument(skip_all, fields(kind = %config.kind()))]
    pub fn generate(&self, config: &LibraryKindConfig) -> ExportMap {
        if let KindSelection::Unsupported(raw) = config.kind() {
            warn!(kind = %raw, "Unsupported library kind, emitting barrel only");
        }

        let map = resolve_exports_with_layout(config, &self.layout);
        debug!(entries = map.len(), "Export map resolved");
        map
    }

    /// Load the export map declared by a manifest.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> BarrelResult<ExportMap> {
        if !self.store.exists(path) {
            return Err(ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let map = self.store.load(path)?;
        info!(entries = map.len(), "Manifest loaded");
        Ok(map)
    }

    /// Resolve the generated map and merge it with a manifest's map.
    #[instrument(skip_all, fields(kind = %config.kind(), base = %base_path.display()))]
    pub fn generate_with_base(
        &self,
        config: &LibraryKindConfig,
        base_path: &Path,
        precedence: MergePrecedence,
    ) -> BarrelResult<ExportMap> {
        let generated = self.generate(config);
        let base = self.load(base_path)?;

        let merged = match precedence {
            MergePrecedence::GeneratedWins => merge_exports(&base, &generated),
            MergePrecedence::BaseWins => merge_exports(&generated, &base),
        };

        info!(
            generated = generated.len(),
            base = base.len(),
            merged = merged.len(),
            ?precedence,
            "Export maps merged"
        );
        Ok(merged)
    }

    /// Find the key serving `requested`, logging ambiguous wildcard ties.
    #[instrument(skip(self, map))]
    pub fn lookup(&self, map: &ExportMap, requested: &str) -> Option<ImportMatch> {
        let hit = resolve_import_path(map, requested);

        match &hit {
            Some(m) if m.is_ambiguous() => warn!(
                chosen = %m.key,
                shadowed = m.shadowed.len(),
                "Several wildcards match; using the first in key order"
            ),
            Some(m) => debug!(key = %m.key, "Import path resolved"),
            None => debug!("Import path is not published"),
        }

        hit
    }

    /// Validate entries and log structural problems.
    #[instrument(skip_all, fields(entries = map.len()))]
    pub fn validate(&self, map: &ExportMap) -> Vec<ExportIssue> {
        if let Err(e) = validator::validate_wildcards(map) {
            warn!(error = %e, "Export map has overlapping wildcards");
        }

        let issues = validate_export_map(map);
        if !issues.is_empty() {
            warn!(issues = issues.len(), "Export map has malformed entries");
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockManifestStore;
    use crate::domain::{ExportEntry, ExportKey, LibraryKind};
    use crate::error::BarrelError;

    fn base_manifest() -> ExportMap {
        ExportMap::builder()
            .exact(".", ExportEntry::new("./dist/index.js", "./dist/index.d.ts"))
            .exact("./package.json", ExportEntry::source("./package.json"))
            .build()
            .unwrap()
    }

    fn store_with(map: ExportMap) -> Box<MockManifestStore> {
        let mut store = MockManifestStore::new();
        store.expect_exists().returning(|_| true);
        store.expect_load().returning(move |_| Ok(map.clone()));
        Box::new(store)
    }

    #[test]
    fn generate_uses_layout() {
        let layout = ExportLayout::new("./lib-src", "lib", "ts").unwrap();
        let service =
            ExportService::with_layout(Box::new(MockManifestStore::new()), layout).unwrap();

        let map = service.generate(&LibraryKindConfig::new(LibraryKind::Feature));
        assert_eq!(map.get_str(".").unwrap().import_target, "./lib-src/index.ts");
    }

    #[test]
    fn with_layout_rejects_invalid_layout() {
        let layout = ExportLayout {
            source_root: "src".into(),
            ..ExportLayout::default()
        };
        let result = ExportService::with_layout(Box::new(MockManifestStore::new()), layout);
        assert!(matches!(result, Err(BarrelError::Domain(_))));
    }

    #[test]
    fn generated_wins_by_default() {
        let service = ExportService::new(store_with(base_manifest()));
        let merged = service
            .generate_with_base(
                &LibraryKindConfig::new(LibraryKind::Feature),
                Path::new("package.json"),
                MergePrecedence::default(),
            )
            .unwrap();

        assert_eq!(merged.get_str(".").unwrap().import_target, "./src/index.ts");
        assert!(merged.contains_key("./package.json"));
        assert!(merged.contains_key("./types"));
    }

    #[test]
    fn base_wins_keeps_hand_edits() {
        let service = ExportService::new(store_with(base_manifest()));
        let merged = service
            .generate_with_base(
                &LibraryKindConfig::new(LibraryKind::Feature),
                Path::new("package.json"),
                MergePrecedence::BaseWins,
            )
            .unwrap();

        assert_eq!(
            merged.get_str(".").unwrap(),
            &ExportEntry::new("./dist/index.js", "./dist/index.d.ts")
        );
        assert!(merged.contains_key("./types"));
    }

    #[test]
    fn missing_manifest_is_not_found() {
        let mut store = MockManifestStore::new();
        store.expect_exists().returning(|_| false);
        store.expect_load().never();

        let service = ExportService::new(Box::new(store));
        let err = service.load(Path::new("missing/package.json")).unwrap_err();
        assert!(matches!(
            err,
            BarrelError::Application(ApplicationError::ManifestNotFound { .. })
        ));
    }

    #[test]
    fn lookup_reports_shadowed_wildcards() {
        let service = ExportService::new(Box::new(MockManifestStore::new()));
        let mut map = ExportMap::new();
        map.insert(ExportKey::prefix("./a"), ExportEntry::source("./a/*.ts"));
        map.insert(ExportKey::prefix("./a/b"), ExportEntry::source("./b/*.ts"));

        let hit = service.lookup(&map, "./a/b/c").unwrap();
        assert!(hit.is_ambiguous());
    }

    #[test]
    fn validate_returns_issues() {
        let service = ExportService::new(Box::new(MockManifestStore::new()));
        let mut map = ExportMap::new();
        map.insert(ExportKey::exact("./x"), ExportEntry::new("./x.js", ""));

        let issues = service.validate(&map);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].missing, vec!["typesTarget"]);
    }
}
