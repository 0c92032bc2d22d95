//! Core domain layer for Barrel.
//!
//! This module contains the export-map model and the pure functions over it.
//! Manifest I/O is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: ambiguity is reported as data; the application layer logs
//! - **Immutable results**: every operation returns fresh, owned data

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod registry;
pub mod resolver;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    ExportEntry, ExportKey, ExportLayout, ExportMap, ExportMapBuilder, LibraryKindConfig,
};

pub use error::{DomainError, ErrorCategory};

pub use resolver::{
    ImportMatch, merge_exports, resolve_exports, resolve_exports_with_layout,
    resolve_import_path, resolve_target, validate_export_map,
};

pub use value_objects::{KindSelection, LibraryKind, Platform};

pub use validation::{DomainValidator, ExportIssue};
