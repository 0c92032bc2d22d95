//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the exports of a library on top of
//! its hand-written manifest".

pub mod export_service;

pub use export_service::{ExportService, MergePrecedence};
