//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the fatal errors
//! that can occur during an enumeration run. Recoverable per-entry failures
//! (unreadable rules file, broken symlinks, invalid patterns) are not errors
//! in this sense: they are logged as warnings and the run continues.

use thiserror::Error;

/// A `Result` alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors used throughout `uplist`.
#[derive(Error, Debug)]
pub enum Error {
    /// The register folder does not exist or is not a directory.
    ///
    /// This is the only error with a dedicated exit status (2), so callers
    /// can distinguish a bad root from unexpected failures.
    #[error("register folder '{path}' does not exist or is not a directory")]
    InvalidRoot {
        /// The root path as given by the caller.
        path: String,
    },

    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error serializing or writing the enumeration result.
    #[error("failed to emit enumeration result: {0}")]
    Emit(#[from] serde_json::Error),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
                assert!(source.to_string().contains("File not found"));
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_invalid_root_display() {
        let err = Error::InvalidRoot {
            path: "missing_dir".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing_dir"));
        assert!(msg.contains("not a directory"));
    }
}
