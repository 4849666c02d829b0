//! `uplist` is a library and command-line tool that decides, for every
//! regular file under a register folder, whether it belongs to the upload
//! set.
//!
//! The decision is driven by a declarative rules file at the folder root
//! (default name `.uploaderignore`) that names folders, files, extensions,
//! and exact paths to include or exclude. Include rules always override
//! exclude rules, and files matched by no rule are included.
//!
//! As a library, it provides a small pipeline:
//! 1. **Configure**: build a `Config` with `ConfigBuilder` (this resolves
//!    and validates the root).
//! 2. **Enumerate**: walk the tree, evaluate every file against the rules,
//!    and collect the sorted upload set.
//! 3. **Emit**: serialize the result as JSON.
//!
//! # Example: Library Usage
//!
//! ```
//! use uplist::ConfigBuilder;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a register folder with a rules file.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("report.md"), "# report").unwrap();
//! fs::create_dir(temp_dir.path().join("build")).unwrap();
//! fs::write(temp_dir.path().join("build/artifact.o"), [0u8; 4]).unwrap();
//! fs::write(
//!     temp_dir.path().join(".uploaderignore"),
//!     "[exclude_folder]\nbuild\n",
//! )
//! .unwrap();
//!
//! // 2. Build the configuration.
//! let config = ConfigBuilder::new()
//!     .root(temp_dir.path())
//!     .build()
//!     .unwrap();
//!
//! // 3. Enumerate the upload set.
//! let result = uplist::enumerate(&config).unwrap();
//! assert_eq!(result.files, vec!["report.md".to_string()]);
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod rules;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{Candidate, Enumeration};
pub use rules::{RuleMatcher, RuleSet};

use crate::errors::Result;

/// Enumerates the upload set for the configured register folder.
///
/// This reads the rules file once, walks the tree (honoring the symlink
/// and dotfile policies in the `Config`), and returns the resolved root
/// together with the sorted, deduplicated list of kept relative paths.
///
/// # Arguments
/// * `config` - The configuration for the enumeration run.
///
/// # Errors
/// Per-entry failures are logged and skipped; an error here means the run
/// itself could not proceed.
pub fn enumerate(config: &Config) -> Result<Enumeration> {
    discovery::discover_files(config)
}

/// Executes the complete pipeline: enumerate and print the JSON result.
///
/// This is the primary entry point mirroring command-line execution. The
/// JSON document is the sole stdout output; diagnostics are emitted through
/// the `log` facade.
///
/// # Arguments
/// * `config` - The configuration for the entire run.
pub fn run(config: &Config) -> Result<()> {
    let result = enumerate(config)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_json(&result, &mut handle)
}
