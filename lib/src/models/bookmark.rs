use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Title used for Firefox bookmarks that were saved without one
pub const NO_TITLE: &str = "[No Title]";

/// Chromium top-level roots, in walk and display order
pub const ROOT_FOLDERS: [&str; 3] = ["bookmark_bar", "other", "synced"];

/// A bookmark or folder extracted from a browser profile
///
/// Both parsers produce this shape. A record with an empty `url` is a folder,
/// anything else is a leaf bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    /// Name of the containing folder (or root key for top-level records)
    #[serde(rename = "Parent")]
    pub parent: String,
    /// Source-native id of the containing folder, when the source has one
    #[serde(skip)]
    pub parent_id: Option<String>,
}

impl Bookmark {
    /// Create a leaf bookmark
    pub fn new(id: String, name: String, url: String, parent: String) -> Self {
        Self {
            id,
            name,
            url,
            parent,
            parent_id: None,
        }
    }

    /// Create a folder marker
    pub fn folder(id: String, name: String, parent: String) -> Self {
        Self::new(id, name, String::new(), parent)
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_folder(&self) -> bool {
        self.url.is_empty()
    }
}

// Equality and hashing cover the serialized fields only, so a collection
// compares equal to itself after a trip through the JSON output.
impl PartialEq for Bookmark {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.url == other.url
            && self.parent == other.parent
    }
}

impl Eq for Bookmark {}

impl Hash for Bookmark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.url.hash(state);
        self.parent.hash(state);
    }
}
