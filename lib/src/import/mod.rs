pub mod chromium;
pub mod firefox;

use crate::error::Result;
use crate::models::bookmark::Bookmark;
use crate::profile::{BrowserFamily, BrowserProfile};
use crate::snapshot::PlacesSnapshot;
use log::info;
use std::path::Path;

pub use chromium::ChromiumExtractor;
pub use firefox::FirefoxExtractor;

/// Default guard on folder nesting, for both parsing and rendering
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Knobs passed down into every parser call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Emit folder markers alongside leaf bookmarks
    pub include_folders: bool,
    /// Deepest level below a root that may hold entries
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_folders: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Trait for extracting bookmarks from a browser's native storage
pub trait BookmarkExtractor {
    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<Vec<Bookmark>>;
}

/// Extract every bookmark of one profile
///
/// Firefox databases are read through a temporary snapshot, never in place.
/// The snapshot is removed before this returns, whether or not parsing
/// succeeded.
pub fn extract_profile(profile: &BrowserProfile, options: &ExtractOptions) -> Result<Vec<Bookmark>> {
    let bookmarks = match profile.family {
        BrowserFamily::Chromium => ChromiumExtractor.extract(&profile.path, options)?,
        BrowserFamily::Firefox => {
            let snapshot = PlacesSnapshot::capture(&profile.path)?;
            FirefoxExtractor.extract(snapshot.path(), options)?
        }
    };

    info!(
        "Extracted {} records from {}",
        bookmarks.len(),
        profile.display_string()
    );
    Ok(bookmarks)
}
