//! The export map aggregate and its builder.
//!
//! An [`ExportMap`] is a key-unique mapping from [`ExportKey`] to
//! [`ExportEntry`]. Iteration follows the rendered key order, so two maps
//! with the same contents always print, serialize and compare the same way.
//!
//! Plain insertion is last-write-wins and never fails; that is what merging
//! needs. [`ExportMapBuilder`] additionally rejects overlapping wildcard
//! prefixes, which is what hand-assembled per-kind tables need.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{export_entry::ExportEntry, export_key::ExportKey},
    error::DomainError,
};

/// A library's published sub-paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportMap {
    entries: BTreeMap<ExportKey, ExportEntry>,
}

impl ExportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ExportMapBuilder {
        ExportMapBuilder::default()
    }

    /// Insert an entry, replacing any previous entry under the same key.
    pub fn insert(&mut self, key: ExportKey, entry: ExportEntry) -> Option<ExportEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &ExportKey) -> Option<&ExportEntry> {
        self.entries.get(key)
    }

    /// Look up by manifest key string (`"./queries/*"` addresses the wildcard).
    pub fn get_str(&self, key: &str) -> Option<&ExportEntry> {
        self.entries.get(&ExportKey::parse(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_str(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ExportKey> {
        self.entries.keys()
    }

    /// Rendered keys in map order.
    pub fn key_strings(&self) -> Vec<String> {
        self.entries.keys().map(ToString::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExportKey, &ExportEntry)> {
        self.entries.iter()
    }

    pub fn wildcards(&self) -> impl Iterator<Item = (&ExportKey, &ExportEntry)> {
        self.entries.iter().filter(|(key, _)| key.is_wildcard())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every pair of wildcard keys that could answer the same request.
    ///
    /// Empty for every map produced through [`ExportMapBuilder`].
    pub fn wildcard_overlaps(&self) -> Vec<(&ExportKey, &ExportKey)> {
        let wildcards: Vec<&ExportKey> = self.entries.keys().filter(|k| k.is_wildcard()).collect();

        let mut overlaps = Vec::new();
        for (i, first) in wildcards.iter().enumerate() {
            for second in &wildcards[i + 1..] {
                if first.overlaps(second) {
                    overlaps.push((*first, *second));
                }
            }
        }
        overlaps
    }
}

impl FromIterator<(ExportKey, ExportEntry)> for ExportMap {
    fn from_iter<I: IntoIterator<Item = (ExportKey, ExportEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExportMap {
    type Item = (ExportKey, ExportEntry);
    type IntoIter = std::collections::btree_map::IntoIter<ExportKey, ExportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExportMap {
    type Item = (&'a ExportKey, &'a ExportEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, ExportKey, ExportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates entries and checks wildcard uniqueness on `build()`.
#[derive(Debug, Default)]
pub struct ExportMapBuilder {
    map: ExportMap,
}

impl ExportMapBuilder {
    /// Add an exact sub-path (accumulates; last write wins).
    ///
    /// A path ending in `/*` addresses the wildcard with that base.
    pub fn exact(self, path: impl Into<String>, entry: ExportEntry) -> Self {
        self.entry(ExportKey::exact(path), entry)
    }

    /// Add a wildcard sub-path under `base` (rendered `base/*`).
    pub fn wildcard(self, base: impl Into<String>, entry: ExportEntry) -> Self {
        self.entry(ExportKey::prefix(base), entry)
    }

    pub fn entry(mut self, key: ExportKey, entry: ExportEntry) -> Self {
        self.map.insert(key, entry);
        self
    }

    /// Consume builder and construct the map.
    ///
    /// # Errors
    ///
    /// - `OverlappingWildcards` if two wildcard prefixes could both answer
    ///   the same request
    pub fn build(self) -> Result<ExportMap, DomainError> {
        if let Some((first, second)) = self.map.wildcard_overlaps().first() {
            return Err(DomainError::OverlappingWildcards {
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        Ok(self.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_last_write_wins() {
        let mut map = ExportMap::new();
        map.insert(ExportKey::exact("."), ExportEntry::source("./a.ts"));
        let previous = map.insert(ExportKey::exact("."), ExportEntry::source("./b.ts"));

        assert_eq!(previous, Some(ExportEntry::source("./a.ts")));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_str(".").unwrap().import_target, "./b.ts");
    }

    #[test]
    fn builder_rejects_nested_wildcards() {
        let result = ExportMap::builder()
            .wildcard("./layers", ExportEntry::source("./src/lib/layers/*.ts"))
            .wildcard("./layers/http", ExportEntry::source("./src/lib/http/*.ts"))
            .build();

        assert!(matches!(
            result,
            Err(DomainError::OverlappingWildcards { .. })
        ));
    }

    #[test]
    fn builder_allows_exact_key_under_wildcard_base() {
        let map = ExportMap::builder()
            .exact("./service", ExportEntry::source("./src/lib/service/index.ts"))
            .wildcard("./service", ExportEntry::source("./src/lib/service/*.ts"))
            .build()
            .unwrap();

        assert!(map.contains_key("./service"));
        assert!(map.contains_key("./service/*"));
        assert_eq!(map.wildcards().count(), 1);
    }

    #[test]
    fn exact_in_wildcard_form_addresses_the_wildcard() {
        let map = ExportMap::builder()
            .wildcard("./queries", ExportEntry::source("./src/lib/queries/*.ts"))
            .exact("./queries/*", ExportEntry::source("./src/queries/*.ts"))
            .build()
            .unwrap();

        assert_eq!(map.key_strings(), ["./queries/*"]);
        assert_eq!(map.wildcards().count(), 1);
        assert_eq!(
            map.get(&ExportKey::prefix("./queries")).unwrap().import_target,
            "./src/queries/*.ts"
        );
    }

    #[test]
    fn serializes_in_key_order() {
        let map = ExportMap::builder()
            .exact("./types", ExportEntry::source("./src/types.ts"))
            .exact(".", ExportEntry::source("./src/index.ts"))
            .build()
            .unwrap();

        let json = serde_json::to_value(&map).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, [".", "./types"]);
    }
}
