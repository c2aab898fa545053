//! Knuth-Morris-Pratt substring search.
//!
//! This crate provides:
//! - Failure-table construction for any pattern of comparable elements.
//! - A two-cursor scan reporting every match in a text, left to right.
//! - A reusable [`Pattern`] that owns a `&str` pattern and its table.
//!
//! The algorithms are generic over `&[T] where T: PartialEq`, so the same code
//! searches bytes, `char`s or tokens. Offsets are element indices.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod matcher;
mod pattern;
mod table;

pub use crate::config::MatchConfig;
pub use crate::error::TableError;
pub use crate::matcher::{find_matches, find_matches_with, MatchSet};
pub use crate::pattern::Pattern;
pub use crate::table::{build_table, FailureTable};
