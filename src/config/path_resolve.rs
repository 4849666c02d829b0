// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::path::{Path, PathBuf};

/// Resolves the register-folder path to an absolute, canonical `PathBuf`.
///
/// A path that does not exist or is not a directory is rejected with
/// `Error::InvalidRoot`. When canonicalization fails on an existing
/// directory, the non-canonical absolute path is used instead.
pub(super) fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::InvalidRoot {
            path: root.display().to_string(),
        });
    }
    match root.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(e) => {
            log::warn!(
                "Failed to canonicalize '{}': {}. Using a non-canonical absolute path.",
                root.display(),
                e
            );
            std::path::absolute(root).map_err(|e| io_error_with_path(e, root))
        }
    }
}
