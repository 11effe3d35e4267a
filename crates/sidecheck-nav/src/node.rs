//! Navigation tree node types.
//!
//! Models the sidebar item shapes emitted by documentation frameworks:
//! a bare string is shorthand for a doc entry, a `doc` node carries a
//! content identifier, and a `category` node groups further items and may
//! link to its own landing page.

use serde::Deserialize;

/// One entry in a sidebar's item list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Shorthand form: a bare string is the doc identifier.
    Id(String),
    /// Full object form with an explicit `type` tag.
    Node(NavNode),
}

/// A navigation node, tagged by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NavNode {
    /// Leaf entry backed by a content file.
    Doc {
        /// Content identifier (relative path without extension).
        id: String,
        /// Display label shown in the rendered sidebar.
        #[serde(default)]
        label: Option<String>,
    },
    /// Grouping node with nested items.
    Category {
        /// Display label shown in the rendered sidebar.
        #[serde(default)]
        label: Option<String>,
        /// Optional landing page for the category itself.
        #[serde(default)]
        link: Option<CategoryLink>,
        /// Nested items, arbitrarily deep.
        #[serde(default)]
        items: Vec<NavItem>,
    },
}

/// Landing-page link of a category node.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// The category links to a content file of its own.
    Doc {
        /// Content identifier of the landing page.
        id: String,
    },
    /// The category page is generated from its children; no content file.
    GeneratedIndex {
        /// Optional slug override for the generated page.
        #[serde(default)]
        slug: Option<String>,
    },
}

impl CategoryLink {
    /// Content identifier carried by this link, if any.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { id } => Some(id),
            Self::GeneratedIndex { .. } => None,
        }
    }
}
