//! Reusable string pattern.

use crate::config::MatchConfig;
use crate::matcher::{find_matches_with, MatchSet};
use crate::table::{build_table, FailureTable};

/// A `&str` pattern decoded into `char`s with its failure table prebuilt.
///
/// Offsets reported by [`Pattern::find_in`] are `char` indices into the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    chars: Vec<char>,
    table: FailureTable,
    config: MatchConfig,
}

impl Pattern {
    /// Builds a pattern with the default (non-overlapping) configuration.
    pub fn new(pattern: &str) -> Self {
        Self::with_config(pattern, MatchConfig::default())
    }

    /// Builds a pattern with an explicit configuration.
    pub fn with_config(pattern: &str, config: MatchConfig) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let table = build_table(&chars);
        Self {
            chars,
            table,
            config,
        }
    }

    /// The pattern's characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The pattern's failure table.
    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut MatchConfig {
        &mut self.config
    }

    /// Length in `char`s.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` for the empty pattern, which never matches.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Scans `text` for this pattern.
    pub fn find_in(&self, text: &str) -> MatchSet {
        let text: Vec<char> = text.chars().collect();
        self.find_in_chars(&text)
    }

    /// Scans pre-decoded text.
    pub fn find_in_chars(&self, text: &[char]) -> MatchSet {
        find_matches_with(&self.chars, text, &self.table, &self.config)
    }

    /// Returns `true` if `text` contains the pattern.
    pub fn is_found_in(&self, text: &str) -> bool {
        !self.find_in(text).is_empty()
    }
}
