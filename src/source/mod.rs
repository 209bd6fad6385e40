//! Listing sources.
//!
//! A listing comes either from a JSON file or from the generated demo feed.
//! Sources are re-read on refresh, so a file edited while the pager runs is
//! picked up by the next reload.

pub mod file;

pub use file::{load_listing_file, ListingFile};

use crate::model::SourceError;
use crate::provider::{DemoFeed, ListingContent};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where the listing page gets its posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    /// A listing JSON file.
    File(PathBuf),
    /// The generated feed; `None` for no end.
    Demo {
        /// Maximum number of posts; `None` for no end.
        limit: Option<usize>,
    },
}

impl ListingSource {
    /// Load the listing. `now` is the reference time for ages.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when a listing file is missing, unreadable, or
    /// malformed. The demo feed never fails.
    pub fn load(&self, now: DateTime<Utc>) -> Result<ListingContent, SourceError> {
        match self {
            Self::File(path) => {
                let listing = load_listing_file(path)?;
                let name = listing.name.unwrap_or_else(|| file_title(path));
                Ok(ListingContent::from_posts(name, listing.posts, now))
            }
            Self::Demo { limit } => {
                let feed = limit.map_or_else(DemoFeed::unbounded, DemoFeed::with_limit);
                Ok(ListingContent::generated(feed, now))
            }
        }
    }
}

fn file_title(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
