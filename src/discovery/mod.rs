//! Walks the register folder and classifies every candidate file.
//!
//! The walk is single-threaded and depth-first. Exclude rules never prune
//! the traversal: an excluded folder may still contain force-included
//! files, so every reachable directory is descended and each file gets a
//! full rule evaluation. Per-entry failures are logged and skipped; only
//! root validation is fatal (and happens earlier, at config build).

use crate::config::Config;
use crate::core_types::Enumeration;
use crate::errors::Result;
use crate::rules::{RuleMatcher, RuleSet};
use log::{debug, warn};
use std::collections::BTreeSet;
use walkdir::WalkDir;

mod entry_processor;

use entry_processor::process_entry;

/// Enumerates the files kept by the rules under `config.root`.
///
/// The rules file is read once from `root/rules_filename` before the walk.
/// Kept relative paths are collected into a sorted set, so the resulting
/// list is deduplicated and ordered by byte value regardless of filesystem
/// iteration order.
///
/// # Examples
///
/// ```
/// use uplist::config::ConfigBuilder;
/// use uplist::discovery::discover_files;
/// # use std::fs;
/// # use tempfile::tempdir;
///
/// # let temp = tempdir().unwrap();
/// # fs::write(temp.path().join("a.txt"), "data").unwrap();
/// let config = ConfigBuilder::new()
///     .root(temp.path())
///     .build()
///     .unwrap();
/// let result = discover_files(&config).unwrap();
/// assert_eq!(result.files, vec!["a.txt"]);
/// ```
pub fn discover_files(config: &Config) -> Result<Enumeration> {
    let rules_path = config.root.join(&config.rules_filename);
    let rules = RuleSet::load(&rules_path);
    debug!("Loaded rule set from '{}': {:?}", rules_path.display(), rules);

    let matcher = RuleMatcher::new(&rules, &config.rules_filename, config.case_sensitive);

    let mut kept = BTreeSet::new();
    for entry in WalkDir::new(&config.root).follow_links(config.follow_symlinks) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue; // the root itself
        }
        if let Some(relative_path) = process_entry(&entry, config, &matcher) {
            kept.insert(relative_path);
        }
    }

    debug!("Discovery complete. Kept files: {}", kept.len());
    Ok(Enumeration {
        root: config.root.display().to_string(),
        files: kept.into_iter().collect(),
    })
}
