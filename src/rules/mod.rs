// src/rules/mod.rs

//! Rule-file parsing and candidate matching.
//!
//! This module holds the core decision logic: `RuleSet` is the parsed
//! content of a rules file, and `RuleMatcher` compiles a rule set once per
//! run and produces the keep/drop verdict for each `Candidate`. Include
//! rules always win over exclude rules; when nothing matches, the file is
//! kept.

mod matcher;
mod ruleset;

pub use matcher::RuleMatcher;
pub use ruleset::RuleSet;
