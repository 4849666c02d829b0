//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings parsed and validated from the CLI
//! (or assembled programmatically through `ConfigBuilder`), making them
//! available to the rest of the application in a structured and type-safe
//! manner.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

use crate::constants::DEFAULT_RULES_FILENAME;

/// Configuration for one enumeration run.
///
/// `root` is already resolved to an absolute path by the time a `Config`
/// exists; construction fails with `Error::InvalidRoot` otherwise.
#[derive(Debug, Clone)]
pub struct Config {
    /// The resolved, absolute root of the register folder.
    pub root: PathBuf,
    /// Name of the rules file expected directly under `root`.
    pub rules_filename: String,
    /// Whether directory symlinks are traversed.
    pub follow_symlinks: bool,
    /// Whether rule matching is case-sensitive.
    pub case_sensitive: bool,
    /// Whether files whose basename starts with `.` are considered at all.
    pub include_dotfiles: bool,
}

impl Config {
    /// Creates a `Config` for testing purposes, bypassing root resolution.
    ///
    /// This function is hidden from public documentation and is intended
    /// for use in tests only.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules_filename: DEFAULT_RULES_FILENAME.to_string(),
            follow_symlinks: false,
            case_sensitive: true,
            include_dotfiles: true,
        }
    }
}
