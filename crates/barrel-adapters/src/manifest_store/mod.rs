//! Manifest store adapters.

mod json;
mod memory;

pub use json::JsonManifestStore;
pub use memory::MemoryManifestStore;
