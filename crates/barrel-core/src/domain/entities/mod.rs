pub mod export_entry;
pub mod export_key;
pub mod export_map;
pub mod layout;
pub mod library;

pub use crate::domain::DomainError;
pub use export_entry::ExportEntry;
pub use export_key::ExportKey;
pub use export_map::{ExportMap, ExportMapBuilder};
pub use layout::ExportLayout;
pub use library::LibraryKindConfig;
