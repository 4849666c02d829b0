//! Defines core data structures used throughout the enumeration pipeline.
//!
//! `Candidate` describes one filesystem entry being evaluated against the
//! rule set; `Enumeration` is the final result handed to the output stage.

use serde::Serialize;

/// One filesystem entry under evaluation.
///
/// A `Candidate` is built from the entry's root-relative path and discarded
/// as soon as the keep/drop verdict is known. All paths use forward-slash
/// separators, with no leading slash or `./`.
///
/// # Examples
///
/// ```
/// use uplist::core_types::Candidate;
///
/// let candidate = Candidate::from_relative_path("src/util/helpers.rs");
/// assert_eq!(candidate.basename, "helpers.rs");
/// assert_eq!(candidate.extension.as_deref(), Some("rs"));
/// assert_eq!(candidate.ancestors, vec!["src", "util"]);
/// assert_eq!(candidate.parent_dir(), Some("src/util"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The final path component.
    pub basename: String,
    /// The path from the root to the file, forward-slash separated.
    pub relative_path: String,
    /// The file extension, if any. Dotfiles with a single leading dot are
    /// treated as "all extension" (`.gitignore` -> `gitignore`).
    pub extension: Option<String>,
    /// The directory names between the root and the file, in order.
    /// Empty for root-level files.
    pub ancestors: Vec<String>,
}

impl Candidate {
    /// Builds a `Candidate` from a root-relative, forward-slash path.
    pub fn from_relative_path(relative_path: &str) -> Self {
        let mut parts: Vec<&str> = relative_path.split('/').collect();
        let basename = parts.pop().unwrap_or_default().to_string();
        let ancestors = parts.into_iter().map(str::to_string).collect();
        let extension = extract_extension(&basename);
        Self {
            basename,
            relative_path: relative_path.to_string(),
            extension,
            ancestors,
        }
    }

    /// Returns the directory portion of the relative path (everything before
    /// the basename), or `None` for root-level files.
    pub fn parent_dir(&self) -> Option<&str> {
        self.relative_path.rsplit_once('/').map(|(dir, _)| dir)
    }
}

/// Extracts a file extension from a basename.
///
/// A basename that starts with a dot and contains exactly one dot yields
/// everything after that dot (`.gitignore` -> `gitignore`). Otherwise the
/// extension is the non-empty substring after the last dot, if any.
fn extract_extension(basename: &str) -> Option<String> {
    if basename.starts_with('.') && basename.matches('.').count() == 1 {
        let rest = &basename[1..];
        return if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        };
    }
    match basename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext.to_string()),
        _ => None,
    }
}

/// The result of one enumeration run.
///
/// Serialized to JSON by the output stage:
///
/// ```json
/// {
///   "root": "/absolute/resolved/root",
///   "files": ["a.txt", "src/main.rs"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// The resolved, absolute root path.
    pub root: String,
    /// The kept relative paths, deduplicated and sorted by byte value.
    pub files: Vec<String>,
}
