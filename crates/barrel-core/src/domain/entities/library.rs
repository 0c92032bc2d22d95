//! The `LibraryKindConfig` input: which kind, which export-shaping flags.

use crate::domain::{
    naming::to_kebab_case,
    value_objects::{KindSelection, LibraryKind, Platform},
};

/// Everything the resolver needs to know about one library.
///
/// Built by the caller (CLI or generator), consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryKindConfig {
    kind: KindSelection,
    has_entities: bool,
    entities: Vec<String>,
    include_rpc: bool,
    platforms: Vec<Platform>,
}

impl LibraryKindConfig {
    pub fn new(kind: impl Into<KindSelection>) -> Self {
        Self {
            kind: kind.into(),
            has_entities: false,
            entities: Vec::new(),
            include_rpc: false,
            platforms: Vec::new(),
        }
    }

    /// Start from a raw kind string; unknown strings stay `Unsupported`.
    pub fn from_kind_str(raw: &str) -> Self {
        Self::new(KindSelection::parse(raw))
    }

    pub fn with_entities(mut self, has_entities: bool) -> Self {
        self.has_entities = has_entities;
        self
    }

    /// Add an entity name (accumulates). Implies `has_entities`.
    pub fn with_entity(mut self, name: impl Into<String>) -> Self {
        self.entities.push(name.into());
        self
    }

    pub fn with_rpc(mut self, include_rpc: bool) -> Self {
        self.include_rpc = include_rpc;
        self
    }

    /// Add a target platform (accumulates, duplicates ignored).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        if !self.platforms.contains(&platform) {
            self.platforms.push(platform);
        }
        self
    }

    pub fn kind(&self) -> &KindSelection {
        &self.kind
    }

    pub fn supported_kind(&self) -> Option<LibraryKind> {
        self.kind.supported()
    }

    pub fn has_entities(&self) -> bool {
        self.has_entities || !self.entities.is_empty()
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub const fn include_rpc(&self) -> bool {
        self.include_rpc
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Concrete per-entity import paths (`./entities/user-profile`).
    ///
    /// Empty unless this is a contract library with entities.
    pub fn entity_subpaths(&self) -> Vec<String> {
        if self.supported_kind() != Some(LibraryKind::Contract) {
            return Vec::new();
        }
        self.entities
            .iter()
            .map(|name| format!("./entities/{}", to_kebab_case(name)))
            .collect()
    }
}
