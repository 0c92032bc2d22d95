//! Locating package.json files below a workspace root.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File name of a library manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Directories never searched for manifests.
const EXCLUDE_DIRS: &[&str] = &["node_modules", "dist", "target", "coverage"];

/// Find every manifest below `root`, sorted by path.
///
/// A `root` that is itself a file is returned as-is. Hidden directories and
/// build or dependency directories are skipped. Unreadable entries are
/// logged and skipped.
pub fn discover_manifests(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && e.file_name() == OsStr::new(MANIFEST_FILE))
        .map(DirEntry::into_path)
        .collect();

    found.sort();
    debug!(root = %root.display(), count = found.len(), "Manifests discovered");
    found
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name();
    name.to_string_lossy().starts_with('.') || EXCLUDE_DIRS.iter().any(|d| name == OsStr::new(*d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_nested_manifests_and_skips_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for sub in ["libs/contract", "libs/infra", "node_modules/dep", ".cache/x"] {
            fs::create_dir_all(root.join(sub)).unwrap();
            fs::write(root.join(sub).join(MANIFEST_FILE), "{}").unwrap();
        }
        fs::write(root.join("libs/contract/README.md"), "").unwrap();

        let found = discover_manifests(root);
        assert_eq!(
            found,
            vec![
                root.join("libs/contract/package.json"),
                root.join("libs/infra/package.json"),
            ]
        );
    }

    #[test]
    fn file_root_is_returned_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("exports.json");
        fs::write(&file, "{}").unwrap();

        assert_eq!(discover_manifests(&file), vec![file]);
    }
}
