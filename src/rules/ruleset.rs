// src/rules/ruleset.rs

use crate::constants::RULES_COMMENT_PREFIX;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// The seven recognized rule categories.
///
/// The category set is closed, so section headers dispatch to a fixed enum
/// rather than an open-ended map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    ExcludeFolder,
    ExcludeFile,
    ExcludeExtension,
    IncludeFolder,
    IncludeFile,
    IncludeExtension,
    IncludePathByFile,
}

impl Section {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "exclude_folder" => Some(Self::ExcludeFolder),
            "exclude_file" => Some(Self::ExcludeFile),
            "exclude_extension" => Some(Self::ExcludeExtension),
            "include_folder" => Some(Self::IncludeFolder),
            "include_file" => Some(Self::IncludeFile),
            "include_extension" => Some(Self::IncludeExtension),
            "include_path_by_file" => Some(Self::IncludePathByFile),
            _ => None,
        }
    }
}

/// The parsed content of a rules file.
///
/// Every category always exists, possibly empty; an empty `RuleSet` means
/// "include everything". Pattern order within a category is the order of
/// first occurrence in the file; literal duplicates are dropped.
///
/// # Examples
///
/// ```
/// use uplist::rules::RuleSet;
///
/// let rules = RuleSet::parse("# comment\n[exclude_folder]\nbuild\n\n[include_extension]\nmd\n");
/// assert_eq!(rules.exclude_folder, vec!["build"]);
/// assert_eq!(rules.include_extension, vec!["md"]);
/// assert!(rules.exclude_file.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Folder patterns whose files are dropped.
    pub exclude_folder: Vec<String>,
    /// File-name patterns to drop.
    pub exclude_file: Vec<String>,
    /// Extensions to drop.
    pub exclude_extension: Vec<String>,
    /// Folder patterns whose files are force-kept.
    pub include_folder: Vec<String>,
    /// File-name patterns to force-keep.
    pub include_file: Vec<String>,
    /// Extensions to force-keep.
    pub include_extension: Vec<String>,
    /// Exact relative paths to force-keep.
    pub include_path_by_file: Vec<String>,
}

impl RuleSet {
    /// Parses rules-file text into a `RuleSet`.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped. A line
    /// of the exact form `[name]` opens a section. Lines under an
    /// unrecognized section, and lines before the first recognized section,
    /// are discarded.
    pub fn parse(text: &str) -> Self {
        let mut rules = RuleSet::default();
        let mut current: Option<Section> = None;

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(RULES_COMMENT_PREFIX) {
                continue;
            }
            if let Some(inner) = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                current = Section::from_name(inner.trim());
                if current.is_none() {
                    debug!("Ignoring unrecognized rules section '[{}]'", inner.trim());
                }
                continue;
            }
            if let Some(section) = current {
                rules.push_unique(section, line);
            }
        }
        rules
    }

    /// Reads and parses the rules file at `path`.
    ///
    /// A missing file is not an error: it yields an empty rule set, which
    /// keeps everything. A file that exists but cannot be read also yields
    /// an empty rule set, with a warning.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(
                "No rules file at '{}'; including everything by default",
                path.display()
            );
            return RuleSet::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                warn!(
                    "Failed to read rules file '{}': {}. Continuing with an empty rule set.",
                    path.display(),
                    e
                );
                RuleSet::default()
            }
        }
    }

    /// Returns `true` when no category holds any pattern.
    pub fn is_empty(&self) -> bool {
        self.exclude_folder.is_empty()
            && self.exclude_file.is_empty()
            && self.exclude_extension.is_empty()
            && self.include_folder.is_empty()
            && self.include_file.is_empty()
            && self.include_extension.is_empty()
            && self.include_path_by_file.is_empty()
    }

    /// Appends `value` to `section`, keeping only the first occurrence of a
    /// literal duplicate.
    fn push_unique(&mut self, section: Section, value: &str) {
        let list = self.category_mut(section);
        if !list.iter().any(|existing| existing == value) {
            list.push(value.to_string());
        }
    }

    fn category_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::ExcludeFolder => &mut self.exclude_folder,
            Section::ExcludeFile => &mut self.exclude_file,
            Section::ExcludeExtension => &mut self.exclude_extension,
            Section::IncludeFolder => &mut self.include_folder,
            Section::IncludeFile => &mut self.include_file,
            Section::IncludeExtension => &mut self.include_extension,
            Section::IncludePathByFile => &mut self.include_path_by_file,
        }
    }
}
