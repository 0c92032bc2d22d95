//! Application layer for Barrel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ExportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! export-map rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ExportService, MergePrecedence};

// Re-export port traits (for adapter implementation)
pub use ports::ManifestStore;

pub use error::ApplicationError;
