//! In-memory manifest store for testing and embedding.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use barrel_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::ExportMap,
    error::BarrelResult,
};

/// Thread-safe in-memory manifest store keyed by path.
#[derive(Clone, Default)]
pub struct MemoryManifestStore {
    inner: Arc<RwLock<HashMap<PathBuf, ExportMap>>>,
}

impl MemoryManifestStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manifest, replacing any previous one at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, map: ExportMap) -> BarrelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(path.into(), map);
        Ok(())
    }

    /// Builder-style insert for fixtures.
    pub fn with_manifest(self, path: impl Into<PathBuf>, map: ExportMap) -> BarrelResult<Self> {
        self.insert(path, map)?;
        Ok(self)
    }

    pub fn remove(&self, path: &Path) -> BarrelResult<Option<ExportMap>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(path))
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) -> BarrelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl ManifestStore for MemoryManifestStore {
    fn load(&self, path: &Path) -> BarrelResult<ExportMap> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(path))
            .unwrap_or(false)
    }
}
