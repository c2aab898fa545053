//! Error types for failure tables.

use thiserror::Error;

/// Errors raised when building a [`FailureTable`](crate::FailureTable) from raw entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The first entry must be the `-1` sentinel.
    #[error("first entry must be -1, found {0}")]
    MissingSentinel(isize),

    /// An entry past position 0 is outside `0..index`.
    #[error("entry {value} at position {index} is outside 0..{index}")]
    InvalidEntry {
        /// Position of the offending entry.
        index: usize,
        /// Value found at that position.
        value: isize,
    },
}
