//! Infrastructure adapters for Barrel.
//!
//! This crate implements the ports defined in `barrel-core::application::ports`.
//! It contains all external dependencies and I/O operations: the package.json
//! codec, manifest stores and manifest discovery.

pub mod manifest;
pub mod manifest_store;

// Re-export commonly used adapters
pub use manifest::{discover_manifests, from_manifest_value, to_manifest_string, to_manifest_value};
pub use manifest_store::{JsonManifestStore, MemoryManifestStore};
