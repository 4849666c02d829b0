// src/cli.rs

use crate::constants::DEFAULT_RULES_FILENAME;
use clap::Parser;

/// Enumerates the files to upload from a register folder.
///
/// uplist walks the register folder recursively, evaluates every regular
/// file against the rules file found at the folder root, and prints the
/// resulting upload set as JSON on stdout. Include rules always override
/// exclude rules; files matched by no rule are included. Diagnostics go to
/// stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Absolute or relative path to the register folder.
    pub register_folder: String,

    /// Name of the rules file at the register folder root.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_RULES_FILENAME)]
    pub rules_file: String,

    /// Follow directory symlinks during traversal.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Perform case-sensitive matching (default).
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "case_insensitive")]
    pub case_sensitive: bool,

    /// Perform case-insensitive matching.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub case_insensitive: bool,

    /// Include dotfiles (default).
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "no_dotfiles")]
    pub dotfiles: bool,

    /// Skip files whose name starts with a dot, bypassing rule evaluation.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_dotfiles: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["uplist", "some/folder"]);
        assert_eq!(cli.register_folder, "some/folder");
        assert_eq!(cli.rules_file, DEFAULT_RULES_FILENAME);
        assert!(!cli.follow_symlinks);
        assert!(!cli.case_insensitive);
        assert!(!cli.no_dotfiles);
    }

    #[test]
    fn test_cli_case_flags_conflict() {
        let result = Cli::try_parse_from(["uplist", ".", "--case-sensitive", "--case-insensitive"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_dotfile_flags_conflict() {
        let result = Cli::try_parse_from(["uplist", ".", "--dotfiles", "--no-dotfiles"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_register_folder() {
        let result = Cli::try_parse_from(["uplist"]);
        assert!(result.is_err());
    }
}
