//! Manifest reading, writing and discovery.

mod codec;
mod discovery;

pub use codec::{
    CodecError, from_manifest_str, from_manifest_value, to_manifest_string, to_manifest_value,
};
pub use discovery::{MANIFEST_FILE, discover_manifests};
