//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `barrel-adapters` crate provides implementations.

use crate::domain::ExportMap;
use crate::error::BarrelResult;
use std::path::Path;

/// Port for reading export maps out of package manifests.
///
/// Implemented by:
/// - `barrel_adapters::JsonManifestStore` (production)
/// - `barrel_adapters::MemoryManifestStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ManifestStore: Send + Sync {
    /// Load the export map declared by the manifest at `path`.
    fn load(&self, path: &Path) -> BarrelResult<ExportMap>;

    /// Check if a manifest exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
