// src/rules/matcher.rs

use crate::core_types::Candidate;
use crate::rules::RuleSet;
use glob::Pattern;
use log::{debug, warn};
use std::borrow::Cow;

/// A glob rule compiled once per run.
///
/// Rules containing a `/` are matched against paths relative to the root;
/// bare rules are matched against a single name (a basename or one ancestor
/// directory).
#[derive(Debug)]
struct GlobRule {
    pattern: Pattern,
    path_anchored: bool,
}

/// Evaluates candidates against a compiled rule set.
///
/// The verdict follows a fixed precedence: any include hit keeps the file,
/// otherwise any exclude hit drops it, otherwise the file is kept. The four
/// rule shapes are:
///
/// 1. **Exact path** (`include_path_by_file`): string equality against the
///    relative path, no glob semantics.
/// 2. **File-name** (`include_file`, `exclude_file`): glob against the
///    relative path when the pattern contains `/`, against the basename
///    otherwise.
/// 3. **Folder** (`include_folder`, `exclude_folder`): glob against the
///    directory portion of the relative path when the pattern contains `/`;
///    otherwise a glob tested against each ancestor directory name, where
///    any single hit satisfies the rule.
/// 4. **Extension** (`include_extension`, `exclude_extension`): string
///    equality against the candidate's extension; candidates without an
///    extension never match.
///
/// In case-insensitive mode both rule values and candidate strings are
/// lowercased before comparison; the glob algorithm itself is case-exact.
///
/// # Examples
///
/// ```
/// use uplist::core_types::Candidate;
/// use uplist::rules::{RuleMatcher, RuleSet};
///
/// let rules = RuleSet::parse("[exclude_folder]\nbuild\n[include_extension]\nmd\n");
/// let matcher = RuleMatcher::new(&rules, ".uploaderignore", true);
///
/// // Include wins over exclude: markdown survives the excluded folder.
/// assert!(matcher.keep(&Candidate::from_relative_path("build/notes.md")));
/// assert!(!matcher.keep(&Candidate::from_relative_path("build/artifact.o")));
/// // Nothing matches: kept by default.
/// assert!(matcher.keep(&Candidate::from_relative_path("src/main.rs")));
/// ```
#[derive(Debug)]
pub struct RuleMatcher {
    case_sensitive: bool,
    rules_filename: String,
    include_paths: Vec<String>,
    include_files: Vec<GlobRule>,
    include_folders: Vec<GlobRule>,
    include_extensions: Vec<String>,
    exclude_files: Vec<GlobRule>,
    exclude_folders: Vec<GlobRule>,
    exclude_extensions: Vec<String>,
}

impl RuleMatcher {
    /// Compiles a rule set.
    ///
    /// Invalid glob patterns are logged and skipped: they match nothing, so
    /// affected candidates fall through to the remaining rules and the
    /// default-include policy.
    pub fn new(rules: &RuleSet, rules_filename: &str, case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            rules_filename: rules_filename.to_string(),
            include_paths: fold_values(&rules.include_path_by_file, case_sensitive),
            include_files: compile_globs(&rules.include_file, case_sensitive),
            include_folders: compile_globs(&rules.include_folder, case_sensitive),
            include_extensions: fold_values(&rules.include_extension, case_sensitive),
            exclude_files: compile_globs(&rules.exclude_file, case_sensitive),
            exclude_folders: compile_globs(&rules.exclude_folder, case_sensitive),
            exclude_extensions: fold_values(&rules.exclude_extension, case_sensitive),
        }
    }

    /// Returns the keep verdict for one candidate.
    pub fn keep(&self, candidate: &Candidate) -> bool {
        if self.is_included(candidate) {
            debug!("Keeping '{}' (include rule hit)", candidate.relative_path);
            return true;
        }
        if self.is_excluded(candidate) {
            debug!("Dropping '{}' (exclude rule hit)", candidate.relative_path);
            return false;
        }
        true
    }

    /// Tests the include rules in their fixed sub-order: exact path, file
    /// patterns, folder patterns, extensions.
    pub fn is_included(&self, candidate: &Candidate) -> bool {
        let relative = self.fold(&candidate.relative_path);
        if self
            .include_paths
            .iter()
            .any(|path| path.as_str() == relative.as_ref())
        {
            return true;
        }
        if self
            .include_files
            .iter()
            .any(|rule| self.file_rule_matches(rule, candidate))
        {
            return true;
        }
        if self
            .include_folders
            .iter()
            .any(|rule| self.folder_rule_matches(rule, candidate))
        {
            return true;
        }
        self.include_extensions
            .iter()
            .any(|ext| self.extension_rule_matches(ext, candidate))
    }

    /// Tests the exclude rules in their fixed sub-order: the rules file
    /// itself, file patterns, folder patterns, extensions.
    pub fn is_excluded(&self, candidate: &Candidate) -> bool {
        // The rules file is never uploaded unless force-included. The
        // comparison is by basename only and stays literal in both case
        // modes.
        if candidate.basename == self.rules_filename {
            return true;
        }
        if self
            .exclude_files
            .iter()
            .any(|rule| self.file_rule_matches(rule, candidate))
        {
            return true;
        }
        if self
            .exclude_folders
            .iter()
            .any(|rule| self.folder_rule_matches(rule, candidate))
        {
            return true;
        }
        self.exclude_extensions
            .iter()
            .any(|ext| self.extension_rule_matches(ext, candidate))
    }

    fn file_rule_matches(&self, rule: &GlobRule, candidate: &Candidate) -> bool {
        if rule.path_anchored {
            rule.pattern.matches(&self.fold(&candidate.relative_path))
        } else {
            rule.pattern.matches(&self.fold(&candidate.basename))
        }
    }

    fn folder_rule_matches(&self, rule: &GlobRule, candidate: &Candidate) -> bool {
        if rule.path_anchored {
            // A root-level file has no directory portion and can never
            // match a path-anchored folder rule.
            match candidate.parent_dir() {
                Some(dir) => rule.pattern.matches(&self.fold(dir)),
                None => false,
            }
        } else {
            candidate
                .ancestors
                .iter()
                .any(|name| rule.pattern.matches(&self.fold(name)))
        }
    }

    fn extension_rule_matches(&self, rule_value: &str, candidate: &Candidate) -> bool {
        match &candidate.extension {
            Some(ext) => rule_value == self.fold(ext).as_ref(),
            None => false,
        }
    }

    fn fold<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(value.to_lowercase())
        }
    }
}

/// Compiles glob patterns, lowercasing them first in case-insensitive mode.
fn compile_globs(patterns: &[String], case_sensitive: bool) -> Vec<GlobRule> {
    patterns
        .iter()
        .filter_map(|raw| {
            let folded = if case_sensitive {
                Cow::Borrowed(raw.as_str())
            } else {
                Cow::Owned(raw.to_lowercase())
            };
            match Pattern::new(&folded) {
                Ok(pattern) => Some(GlobRule {
                    pattern,
                    path_anchored: raw.contains('/'),
                }),
                Err(e) => {
                    warn!("Ignoring invalid glob pattern '{}': {}", raw, e);
                    None
                }
            }
        })
        .collect()
}

fn fold_values(values: &[String], case_sensitive: bool) -> Vec<String> {
    if case_sensitive {
        values.to_vec()
    } else {
        values.iter().map(|v| v.to_lowercase()).collect()
    }
}
