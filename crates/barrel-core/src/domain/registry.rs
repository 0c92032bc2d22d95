//! Export-table registry: which sub-paths each library kind publishes.
//!
//! Each kind is described exactly once by a [`KindExports`] entry. Every
//! entry lists its full table, including the `.` and `./types` barrels, so
//! no kind's output depends on another's. Resolution is a filter over the
//! table plus a render of each target through an [`ExportLayout`].
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to `LibraryKind` in `value_objects.rs`
//! 2. Add one [`KindExports`] entry to [`KIND_REGISTRY`]
//! 3. Run the tests: `assert_registry_integrity` checks the new table

use crate::domain::{
    entities::{ExportKey, ExportLayout, LibraryKindConfig},
    value_objects::LibraryKind,
};

// ── Table vocabulary ─────────────────────────────────────────────────────────

/// When an export is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Contract libraries with at least one entity.
    HasEntities,
    /// Libraries generated with RPC handlers.
    IncludeRpc,
}

impl Condition {
    pub fn holds(self, config: &LibraryKindConfig) -> bool {
        match self {
            Self::Always => true,
            Self::HasEntities => config.has_entities(),
            Self::IncludeRpc => config.include_rpc(),
        }
    }
}

/// Where an export points, independent of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    /// `<root>/index.<ext>`
    Barrel,
    /// `<root>/types.<ext>`
    TypesBarrel,
    /// `<root>/<lib>/<stem>.<ext>`
    File(&'static str),
    /// `<root>/<lib>/<dir>/index.<ext>`
    Index(&'static str),
    /// `<root>/<lib>/<dir>/*.<ext>`
    Pattern(&'static str),
}

impl TargetSpec {
    pub fn render(self, layout: &ExportLayout) -> String {
        match self {
            Self::Barrel => layout.barrel(),
            Self::TypesBarrel => layout.types_barrel(),
            Self::File(stem) => layout.lib_file(stem),
            Self::Index(dir) => layout.lib_index(dir),
            Self::Pattern(dir) => layout.lib_pattern(dir),
        }
    }
}

/// One row of a kind's export table.
#[derive(Debug, Clone, Copy)]
pub struct ExportDef {
    /// Manifest key; a trailing `/*` makes it a wildcard.
    pub key: &'static str,
    pub target: TargetSpec,
    pub when: Condition,
}

const fn always(key: &'static str, target: TargetSpec) -> ExportDef {
    ExportDef {
        key,
        target,
        when: Condition::Always,
    }
}

const fn gated(key: &'static str, target: TargetSpec, when: Condition) -> ExportDef {
    ExportDef { key, target, when }
}

/// The full export table of one kind.
#[derive(Debug, Clone, Copy)]
pub struct KindExports {
    pub kind: LibraryKind,
    pub exports: &'static [ExportDef],
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Single source of truth for per-kind export tables.
///
/// Feature libraries intentionally have no client/server/edge rows; platform
/// splitting is left to the consumer's tree-shaking.
pub static KIND_REGISTRY: &[KindExports] = &[
    KindExports {
        kind: LibraryKind::Contract,
        exports: &[
            always(".", TargetSpec::Barrel),
            always("./types", TargetSpec::TypesBarrel),
            always("./errors", TargetSpec::File("errors")),
            always("./ports", TargetSpec::File("ports")),
            always("./events", TargetSpec::File("events")),
            gated(
                "./entities",
                TargetSpec::Index("entities"),
                Condition::HasEntities,
            ),
            gated(
                "./entities/*",
                TargetSpec::Pattern("entities"),
                Condition::HasEntities,
            ),
        ],
    },
    KindExports {
        kind: LibraryKind::DataAccess,
        exports: &[
            always(".", TargetSpec::Barrel),
            always("./types", TargetSpec::TypesBarrel),
            always("./repository", TargetSpec::Index("repository")),
            always(
                "./repository/operations",
                TargetSpec::Index("repository/operations"),
            ),
            always(
                "./repository/operations/*",
                TargetSpec::Pattern("repository/operations"),
            ),
            always("./queries", TargetSpec::Index("queries")),
            always("./queries/*", TargetSpec::Pattern("queries")),
            always("./validation", TargetSpec::Index("validation")),
            always("./validation/*", TargetSpec::Pattern("validation")),
            always("./layers", TargetSpec::Index("layers")),
            always("./layers/*", TargetSpec::Pattern("layers")),
        ],
    },
    KindExports {
        kind: LibraryKind::Feature,
        exports: &[
            always(".", TargetSpec::Barrel),
            always("./types", TargetSpec::TypesBarrel),
            gated(
                "./rpc/handlers",
                TargetSpec::Index("rpc/handlers"),
                Condition::IncludeRpc,
            ),
            gated(
                "./rpc/handlers/*",
                TargetSpec::Pattern("rpc/handlers"),
                Condition::IncludeRpc,
            ),
        ],
    },
    KindExports {
        kind: LibraryKind::Infra,
        exports: &[
            always(".", TargetSpec::Barrel),
            always("./types", TargetSpec::TypesBarrel),
            always("./service", TargetSpec::Index("service")),
            always("./providers/*", TargetSpec::Pattern("providers")),
            always("./layers/*", TargetSpec::Pattern("layers")),
        ],
    },
    KindExports {
        kind: LibraryKind::Provider,
        exports: &[
            always(".", TargetSpec::Barrel),
            always("./types", TargetSpec::TypesBarrel),
            always("./service", TargetSpec::Index("service")),
            always("./errors", TargetSpec::File("errors")),
            always("./validation", TargetSpec::File("validation")),
            always("./service/*", TargetSpec::Pattern("service/operations")),
        ],
    },
];

/// Table used when the requested kind is not supported: the barrel only.
pub static MINIMAL_EXPORTS: &[ExportDef] = &[always(".", TargetSpec::Barrel)];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Find the registry entry for a kind.
pub fn find_kind(kind: LibraryKind) -> Option<&'static KindExports> {
    KIND_REGISTRY.iter().find(|def| def.kind == kind)
}

/// The export table for a kind, falling back to [`MINIMAL_EXPORTS`].
pub fn exports_for(kind: LibraryKind) -> &'static [ExportDef] {
    find_kind(kind).map_or(MINIMAL_EXPORTS, |def| def.exports)
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    // Every kind registered exactly once.
    for kind in LibraryKind::ALL {
        let count = KIND_REGISTRY.iter().filter(|def| def.kind == kind).count();
        assert_eq!(count, 1, "{kind:?} registered {count} times");
    }

    for def in KIND_REGISTRY {
        let keys: Vec<ExportKey> = def.exports.iter().map(|e| ExportKey::parse(e.key)).collect();

        // Every key is well-formed and unique.
        for (i, key) in keys.iter().enumerate() {
            assert!(
                ExportKey::try_parse(def.exports[i].key).is_ok(),
                "{:?}: malformed key {}",
                def.kind,
                key
            );
            assert!(
                !keys[i + 1..].contains(key),
                "{:?}: duplicate key {}",
                def.kind,
                key
            );
        }

        // No two wildcards can answer the same request.
        for (i, first) in keys.iter().enumerate() {
            for second in &keys[i + 1..] {
                assert!(
                    !first.overlaps(second),
                    "{:?}: wildcard {} overlaps {}",
                    def.kind,
                    first,
                    second
                );
            }
        }

        // Wildcard rows point at pattern targets and only there.
        for export in def.exports {
            let is_wildcard = ExportKey::parse(export.key).is_wildcard();
            let is_pattern = matches!(export.target, TargetSpec::Pattern(_));
            assert_eq!(
                is_wildcard, is_pattern,
                "{:?}: key {} and target {:?} disagree on wildcard-ness",
                def.kind, export.key, export.target
            );
        }

        // Every kind publishes the barrel unconditionally.
        assert!(
            def.exports
                .iter()
                .any(|e| e.key == "." && e.when == Condition::Always),
            "{:?}: missing unconditional '.' barrel",
            def.kind
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
