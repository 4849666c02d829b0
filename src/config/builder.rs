// src/config/builder.rs

use super::{path_resolve::resolve_root, Config};
use crate::cli::Cli;
use crate::constants::DEFAULT_RULES_FILENAME;
use crate::errors::Result;
use std::path::PathBuf;

/// Builds a `Config` from CLI arguments or programmatic settings.
///
/// Unset options take the documented defaults: rules filename
/// `.uploaderignore`, symlinks not followed, case-sensitive matching,
/// dotfiles included.
///
/// # Examples
///
/// ```no_run
/// use uplist::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .root("/srv/register")
///     .case_sensitive(false)
///     .build()
///     .unwrap();
/// assert!(!config.case_sensitive);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root: Option<PathBuf>,
    rules_filename: Option<String>,
    follow_symlinks: bool,
    case_sensitive: Option<bool>,
    include_dotfiles: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a builder with all options unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            root: Some(PathBuf::from(cli.register_folder)),
            rules_filename: Some(cli.rules_file),
            follow_symlinks: cli.follow_symlinks,
            case_sensitive: Some(!cli.case_insensitive),
            include_dotfiles: Some(!cli.no_dotfiles),
        }
    }

    /// Sets the register-folder path.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the rules filename looked up at the root.
    pub fn rules_filename(mut self, name: impl Into<String>) -> Self {
        self.rules_filename = Some(name.into());
        self
    }

    /// Sets whether directory symlinks are traversed.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether rule matching is case-sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Sets whether dotfiles are considered at all.
    pub fn include_dotfiles(mut self, include: bool) -> Self {
        self.include_dotfiles = Some(include);
        self
    }

    /// Resolves the root and produces the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::InvalidRoot` when the root path is missing or not a
    /// directory.
    pub fn build(self) -> Result<Config> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = resolve_root(&root)?;
        Ok(Config {
            root,
            rules_filename: self
                .rules_filename
                .unwrap_or_else(|| DEFAULT_RULES_FILENAME.to_string()),
            follow_symlinks: self.follow_symlinks,
            case_sensitive: self.case_sensitive.unwrap_or(true),
            include_dotfiles: self.include_dotfiles.unwrap_or(true),
        })
    }
}
