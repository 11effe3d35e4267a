//! Consistency report between declared navigation entries and content
//! files.
//!
//! [`ConsistencyReport`] holds the two-way set difference computed by a
//! single pass over the expected and discovered filename sets. Both sides
//! are ordered sets, so repeated runs over unchanged inputs produce
//! identical output.

use std::collections::BTreeSet;

/// Result of comparing expected filenames against discovered files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyReport {
    /// Navigation entries with no backing content file.
    pub missing: BTreeSet<String>,
    /// Content files not referenced by any navigation entry.
    pub extra: BTreeSet<String>,
}

impl ConsistencyReport {
    /// Compute the two-way difference between expected and discovered
    /// filename sets.
    #[must_use]
    pub fn compare(expected: &BTreeSet<String>, discovered: &BTreeSet<String>) -> Self {
        Self {
            missing: expected.difference(discovered).cloned().collect(),
            extra: discovered.difference(expected).cloned().collect(),
        }
    }

    /// Whether every entry has a file and every file has an entry.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
