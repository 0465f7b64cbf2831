//! One-based display indexes
//!
//! Users address clients by their position in the displayed list, starting
//! at 1. An `Index` keeps the raw one-based value as typed so that an
//! out-of-range position (including 0) is reported by the caller that
//! resolves it against a concrete list, rather than at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the displayed client list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a one-based position
    pub const fn from_one_based(one_based: usize) -> Self {
        Self(one_based)
    }

    /// Creates an index from a zero-based position
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based.saturating_add(1))
    }

    /// Returns the one-based position
    pub const fn one_based(&self) -> usize {
        self.0
    }

    /// Returns the zero-based offset, or `None` for position 0
    pub fn zero_based(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }

    /// Resolves this index against a list of `len` entries
    pub fn resolve(&self, len: usize) -> Option<usize> {
        self.zero_based().filter(|offset| *offset < len)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
