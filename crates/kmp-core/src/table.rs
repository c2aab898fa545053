//! Failure-table construction.

use core::convert::TryFrom;

use crate::error::TableError;

/// Partial-match table for a pattern.
///
/// Entry `j` is the length of the longest proper prefix of `pattern[..j]` that
/// is also a suffix of it. Entry 0 is the `-1` sentinel, and every later entry
/// satisfies `0 <= t[j] < j`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FailureTable(Vec<isize>);

impl FailureTable {
    /// Sentinel stored at position 0.
    pub const SENTINEL: isize = -1;

    /// Wraps caller-supplied entries after checking the shape invariant.
    ///
    /// Only the shape is checked; whether the entries describe a particular
    /// pattern is the caller's responsibility.
    pub fn from_entries(entries: Vec<isize>) -> Result<Self, TableError> {
        if let Some(&first) = entries.first() {
            if first != Self::SENTINEL {
                return Err(TableError::MissingSentinel(first));
            }
        }
        for (index, &value) in entries.iter().enumerate().skip(1) {
            if value < 0 || value as usize >= index {
                return Err(TableError::InvalidEntry { index, value });
            }
        }
        Ok(Self(entries))
    }

    /// Number of entries (equal to the pattern length).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the table of an empty pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<isize> {
        self.0.get(index).copied()
    }

    /// Borrows the raw entries.
    #[inline]
    pub fn as_slice(&self) -> &[isize] {
        &self.0
    }

    /// Consumes the table, returning the raw entries.
    pub fn into_entries(self) -> Vec<isize> {
        self.0
    }
}

impl TryFrom<Vec<isize>> for FailureTable {
    type Error = TableError;

    fn try_from(entries: Vec<isize>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl AsRef<[isize]> for FailureTable {
    fn as_ref(&self) -> &[isize] {
        &self.0
    }
}

/// Builds the failure table for `pattern` in linear time.
///
/// An empty pattern yields an empty table.
pub fn build_table<T: PartialEq>(pattern: &[T]) -> FailureTable {
    let mut entries = Vec::with_capacity(pattern.len());
    if pattern.is_empty() {
        return FailureTable(entries);
    }
    entries.push(FailureTable::SENTINEL);

    // `border` is the longest proper border of `pattern[..j]` at the top of each iteration.
    let mut border = 0usize;
    for j in 1..pattern.len() {
        entries.push(border as isize);
        while border > 0 && pattern[j] != pattern[border] {
            border = entries[border] as usize;
        }
        if pattern[j] == pattern[border] {
            border += 1;
        }
    }

    FailureTable(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    /// Shrinks the candidate border from `j - 1` down until prefix and suffix agree.
    fn naive_table<T: PartialEq>(pattern: &[T]) -> Vec<isize> {
        if pattern.is_empty() {
            return Vec::new();
        }
        let mut entries = vec![-1];
        for j in 1..pattern.len() {
            let mut k = j - 1;
            while k > 0 && pattern[..k] != pattern[j - k..j] {
                k -= 1;
            }
            entries.push(k as isize);
        }
        entries
    }

    #[test]
    fn known_tables() {
        assert_eq!(build_table(b"ABCDABD").as_slice(), &[-1, 0, 0, 0, 0, 1, 2]);
        assert_eq!(build_table(b"aaaa").as_slice(), &[-1, 0, 1, 2]);
        assert_eq!(build_table(b"abab").as_slice(), &[-1, 0, 0, 1]);
        assert_eq!(
            build_table(b"abacabab").as_slice(),
            &[-1, 0, 0, 1, 0, 1, 2, 3]
        );
        assert_eq!(build_table(b"x").as_slice(), &[-1]);
    }

    #[test]
    fn empty_pattern_has_empty_table() {
        let table = build_table::<u8>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn linear_matches_naive_on_random_patterns() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..500 {
            let len = rng.gen_range(1..40);
            let pattern: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'c')).collect();
            let table = build_table(&pattern);
            assert_eq!(table.as_slice(), naive_table(&pattern).as_slice(), "{pattern:?}");
            assert_eq!(table.get(0), Some(-1));
            for (j, &entry) in table.as_slice().iter().enumerate().skip(1) {
                assert!(entry >= 0 && (entry as usize) < j);
            }
        }
    }

    #[test]
    fn works_over_chars() {
        let pattern: Vec<char> = "ñaña".chars().collect();
        assert_eq!(build_table(&pattern).as_slice(), &[-1, 0, 0, 1]);
    }

    #[test]
    fn from_entries_checks_shape() {
        assert!(FailureTable::from_entries(vec![]).is_ok());
        assert!(FailureTable::from_entries(vec![-1, 0, 1]).is_ok());
        assert_eq!(
            FailureTable::from_entries(vec![0, 0]),
            Err(TableError::MissingSentinel(0))
        );
        assert_eq!(
            FailureTable::try_from(vec![-1, 1]),
            Err(TableError::InvalidEntry { index: 1, value: 1 })
        );
        assert_eq!(
            FailureTable::try_from(vec![-1, 0, -1]),
            Err(TableError::InvalidEntry { index: 2, value: -1 })
        );
    }
}
