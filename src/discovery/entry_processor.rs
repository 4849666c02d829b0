// src/discovery/entry_processor.rs

use crate::config::Config;
use crate::core_types::Candidate;
use crate::rules::RuleMatcher;
use log::{trace, warn};
use std::path::Path;
use walkdir::DirEntry;

/// Classifies a single directory entry from the walk.
///
/// Returns `Some(relative_path)` when the entry is a candidate file that
/// the rules keep, `None` when it is a directory, a skipped symlink, a
/// skipped dotfile, an entry that cannot be represented, or a file the
/// rules drop.
pub(super) fn process_entry(
    entry: &DirEntry,
    config: &Config,
    matcher: &RuleMatcher,
) -> Option<String> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return None;
    }
    if file_type.is_symlink() {
        // Only reachable with follow_symlinks off: classify by the target.
        // A link to a file is reported as an ordinary file; a link to a
        // directory is not traversed; a broken link is skipped.
        match entry.path().metadata() {
            Ok(target) if target.is_dir() => {
                trace!(
                    "Not traversing directory symlink '{}'",
                    entry.path().display()
                );
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    "Skipping broken symlink '{}': {}",
                    entry.path().display(),
                    e
                );
                return None;
            }
        }
    }

    let relative_path = relative_path_string(entry.path(), &config.root)?;
    let candidate = Candidate::from_relative_path(&relative_path);

    if !config.include_dotfiles && candidate.basename.starts_with('.') {
        trace!("Skipping dotfile '{}'", relative_path);
        return None;
    }

    if matcher.keep(&candidate) {
        Some(relative_path)
    } else {
        None
    }
}

/// Renders the path relative to `root` with forward-slash separators.
///
/// Entries whose path cannot be stripped or holds non-UTF-8 components are
/// warned about and skipped.
fn relative_path_string(path: &Path, root: &Path) -> Option<String> {
    let stripped = match path.strip_prefix(root) {
        Ok(stripped) => stripped,
        Err(e) => {
            warn!(
                "Failed to strip root prefix from '{}': {}. Skipping entry.",
                path.display(),
                e
            );
            return None;
        }
    };
    let mut parts = Vec::new();
    for component in stripped.components() {
        match component.as_os_str().to_str() {
            Some(name) => parts.push(name),
            None => {
                warn!("Skipping '{}': path is not valid UTF-8", path.display());
                return None;
            }
        }
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use walkdir::WalkDir;

    #[test]
    fn test_process_entry_classifies_files_and_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/file.txt"), "data").unwrap();
        fs::write(temp.path().join(".dot"), "hidden").unwrap();

        let mut config = Config::new_for_test(temp.path());
        config.include_dotfiles = false;
        let matcher = RuleMatcher::new(&RuleSet::default(), &config.rules_filename, true);

        let mut kept = Vec::new();
        for entry in WalkDir::new(&config.root) {
            let entry = entry.unwrap();
            if entry.depth() == 0 {
                continue;
            }
            if let Some(relative) = process_entry(&entry, &config, &matcher) {
                kept.push(relative);
            }
        }
        // The directory is not a candidate and the dotfile is skipped.
        assert_eq!(kept, vec!["sub/file.txt"]);
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = PathBuf::from("/data/register");
        let path = root.join("a").join("b").join("file.txt");
        assert_eq!(
            relative_path_string(&path, &root),
            Some("a/b/file.txt".to_string())
        );
    }

    #[test]
    fn test_relative_path_outside_root_is_skipped() {
        let root = PathBuf::from("/data/register");
        let path = PathBuf::from("/elsewhere/file.txt");
        assert_eq!(relative_path_string(&path, &root), None);
    }

    #[test]
    fn test_relative_path_root_level_file() {
        let root = PathBuf::from("/data/register");
        let path = root.join("file.txt");
        assert_eq!(
            relative_path_string(&path, &root),
            Some("file.txt".to_string())
        );
    }
}
