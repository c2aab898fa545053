//! Two-cursor KMP scan.

use core::ops::Range;

use log::trace;

use crate::config::MatchConfig;
use crate::table::FailureTable;

/// Matches found in a text, in ascending order.
///
/// Each match is stored as its end offset: the index of the text element that
/// completed the pattern. Start offsets and spans are derived from the
/// pattern length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchSet {
    pattern_len: usize,
    ends: Vec<usize>,
}

impl MatchSet {
    fn new(pattern_len: usize) -> Self {
        Self {
            pattern_len,
            ends: Vec::new(),
        }
    }

    /// End offsets (inclusive) in discovery order.
    #[inline]
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Length of the pattern that produced these matches.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Number of matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Returns `true` when nothing matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Iterates over end offsets.
    pub fn iter(&self) -> core::slice::Iter<'_, usize> {
        self.ends.iter()
    }

    /// Iterates over start offsets.
    pub fn starts(&self) -> impl Iterator<Item = usize> + '_ {
        let offset = self.pattern_len.saturating_sub(1);
        self.ends.iter().map(move |&end| end - offset)
    }

    /// Iterates over half-open spans `start..end + 1`, suitable for slicing the text.
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.starts()
            .zip(self.ends.iter())
            .map(|(start, &end)| start..end + 1)
    }

    /// Consumes the set, returning the end offsets.
    pub fn into_ends(self) -> Vec<usize> {
        self.ends
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.ends.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.ends.iter()
    }
}

/// Finds every non-overlapping occurrence of `pattern` in `text`.
///
/// `table` must be the failure table of `pattern`. A table that does not
/// belong to the pattern never causes a panic, but the result is then
/// meaningless.
pub fn find_matches<T: PartialEq>(pattern: &[T], text: &[T], table: &FailureTable) -> MatchSet {
    find_matches_with(pattern, text, table, &MatchConfig::default())
}

/// Finds occurrences of `pattern` in `text` using an explicit configuration.
pub fn find_matches_with<T: PartialEq>(
    pattern: &[T],
    text: &[T],
    table: &FailureTable,
    config: &MatchConfig,
) -> MatchSet {
    let m = pattern.len();
    let mut matches = MatchSet::new(m);
    if m == 0 || m > text.len() {
        return matches;
    }

    let restart = if config.overlapping {
        full_border(pattern, table)
    } else {
        0
    };

    let mut j = 0usize;
    for (i, item) in text.iter().enumerate() {
        while j > 0 && pattern[j] != *item {
            j = fallback(table, j);
        }
        if pattern[j] == *item {
            j += 1;
        }
        if j == m {
            trace!("pattern of length {m} completed at offset {i}");
            matches.ends.push(i);
            j = restart;
        }
    }

    matches
}

/// Next pattern cursor after a mismatch at `j`; always strictly below `j` (or 0).
#[inline]
fn fallback(table: &FailureTable, j: usize) -> usize {
    match table.get(j) {
        Some(entry) if entry >= 0 && (entry as usize) < j => entry as usize,
        _ => 0,
    }
}

/// Length of the longest proper border of the whole pattern.
fn full_border<T: PartialEq>(pattern: &[T], table: &FailureTable) -> usize {
    let m = pattern.len();
    if m < 2 {
        return 0;
    }
    let last = &pattern[m - 1];
    let mut k = fallback(table, m - 1);
    loop {
        if pattern[k] == *last {
            return k + 1;
        }
        if k == 0 {
            return 0;
        }
        k = fallback(table, k);
    }
}
