//! Scan configuration.

/// Configuration for the matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// Whether matches may share text elements (`"aa"` in `"aaa"` matches twice).
    ///
    /// When `false` the scan restarts from an empty prefix after each match,
    /// so reported occurrences never overlap.
    pub overlapping: bool,
}

impl MatchConfig {
    /// Configuration reporting overlapping occurrences.
    pub fn overlapping() -> Self {
        Self { overlapping: true }
    }
}
