//! Sidebar configuration loading for sidecheck.
//!
//! Parses a JSON sidebar configuration into a tree of [`NavItem`]s and
//! collects the set of content identifiers the navigation declares. Each
//! identifier maps to exactly one content file (`<id>.md` under the content
//! root), so a duplicate identifier is a fatal configuration error: routing
//! would be ambiguous.
//!
//! The configuration is a map of named sidebars. All sidebars share one
//! identifier namespace.

mod node;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub use node::{CategoryLink, NavItem, NavNode};

use serde::Deserialize;

/// Extension of content files backing navigation entries.
pub const CONTENT_EXTENSION: &str = "md";

/// Maximum nesting depth accepted during identifier collection.
///
/// The walk recurses, so a bound keeps pathological configurations from
/// exhausting the stack. Real sidebars nest a handful of levels deep.
pub const MAX_DEPTH: usize = 32;

/// Sidebar configuration error.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Configuration file not found.
    #[error("Sidebar configuration not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("Sidebar parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two navigation entries declare the same identifier.
    #[error("Duplicate id found: \"{id}\"")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// Nesting exceeds [`MAX_DEPTH`] levels.
    #[error("Sidebar nesting exceeds {MAX_DEPTH} levels")]
    TooDeep,
}

/// Parsed sidebar configuration: named sidebars, each an ordered item list.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Sidebars {
    sidebars: BTreeMap<String, Vec<NavItem>>,
}

impl Sidebars {
    /// Load a sidebar configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NotFound`] if the file does not exist, or an
    /// I/O / parse error if reading or deserializing fails.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        if !path.exists() {
            return Err(NavError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let sidebars: Self = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            sidebar_count = sidebars.sidebars.len(),
            "Sidebar configuration loaded"
        );
        Ok(sidebars)
    }

    /// Number of sidebars in the configuration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether the configuration declares no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Collect every content identifier declared across all sidebars.
    ///
    /// Walks each sidebar depth-first. Doc nodes, bare-string items, and
    /// category landing-page links all contribute identifiers. Performs no
    /// I/O.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DuplicateId`] as soon as an identifier repeats,
    /// and [`NavError::TooDeep`] if nesting exceeds [`MAX_DEPTH`].
    pub fn doc_ids(&self) -> Result<BTreeSet<String>, NavError> {
        let mut ids = BTreeSet::new();
        for items in self.sidebars.values() {
            collect_items(items, 0, &mut ids)?;
        }
        tracing::debug!(id_count = ids.len(), "Identifiers collected");
        Ok(ids)
    }

    /// Expected content filenames: each identifier with the content
    /// extension appended.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Sidebars::doc_ids`].
    pub fn expected_files(&self) -> Result<BTreeSet<String>, NavError> {
        Ok(self
            .doc_ids()?
            .into_iter()
            .map(|id| format!("{id}.{CONTENT_EXTENSION}"))
            .collect())
    }
}

/// Content root conventionally associated with a configuration file:
/// `docs/` next to it.
#[must_use]
pub fn default_content_root(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("docs")
}

/// Insert an identifier, failing on a repeat.
fn record_id(id: &str, ids: &mut BTreeSet<String>) -> Result<(), NavError> {
    if !ids.insert(id.to_owned()) {
        return Err(NavError::DuplicateId { id: id.to_owned() });
    }
    Ok(())
}

/// Walk an item list, collecting identifiers into `ids`.
fn collect_items(
    items: &[NavItem],
    depth: usize,
    ids: &mut BTreeSet<String>,
) -> Result<(), NavError> {
    if depth >= MAX_DEPTH {
        return Err(NavError::TooDeep);
    }
    for item in items {
        match item {
            NavItem::Id(id) => record_id(id, ids)?,
            NavItem::Node(NavNode::Doc { id, .. }) => record_id(id, ids)?,
            NavItem::Node(NavNode::Category { link, items, .. }) => {
                if let Some(id) = link.as_ref().and_then(CategoryLink::doc_id) {
                    record_id(id, ids)?;
                }
                collect_items(items, depth + 1, ids)?;
            }
        }
    }
    Ok(())
}
