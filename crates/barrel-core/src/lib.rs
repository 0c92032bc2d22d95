//! Barrel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Barrel, the
//! export-map resolver behind layered TypeScript library generators. Given a
//! library kind (contract, data-access, feature, infra, provider) and a few
//! flags, it computes which sub-paths the library publishes and which source
//! files answer them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           barrel-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ExportService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: ManifestStore)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    barrel-adapters (Infrastructure)     │
//! │ (JsonManifestStore, MemoryManifestStore)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ExportMap, registry, resolver)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use barrel_core::domain::{
//!     LibraryKind, LibraryKindConfig, resolve_exports, resolve_import_path,
//! };
//!
//! let map = resolve_exports(&LibraryKindConfig::new(LibraryKind::DataAccess));
//! let hit = resolve_import_path(&map, "./queries/find-by-id").unwrap();
//!
//! assert_eq!(hit.key.to_string(), "./queries/*");
//! assert_eq!(
//!     hit.target(&map).unwrap().import_target,
//!     "./src/lib/queries/find-by-id.ts"
//! );
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ExportService, ManifestStore, MergePrecedence};
    pub use crate::domain::{
        ExportEntry, ExportIssue, ExportKey, ExportLayout, ExportMap, ImportMatch, KindSelection,
        LibraryKind, LibraryKindConfig, Platform, merge_exports, resolve_exports,
        resolve_import_path, resolve_target, validate_export_map,
    };
    pub use crate::error::{BarrelError, BarrelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
