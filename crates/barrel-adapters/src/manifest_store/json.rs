//! Manifest store reading JSON files using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use barrel_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::ExportMap,
    error::{BarrelError, BarrelResult},
};

use crate::manifest::from_manifest_str;

/// Production manifest store: reads package.json (or bare exports JSON)
/// files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestStore;

impl JsonManifestStore {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestStore for JsonManifestStore {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> BarrelResult<ExportMap> {
        let source = std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))?;
        debug!(bytes = source.len(), "Manifest read");

        from_manifest_str(&source).map_err(|e| {
            ApplicationError::ManifestMalformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> BarrelError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::ManifestUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
    .into()
}
