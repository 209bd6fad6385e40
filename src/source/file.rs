//! Listing JSON files.
//!
//! ```json
//! {
//!   "name": "front page",
//!   "posts": [
//!     {
//!       "title": "Hello",
//!       "author": "ann",
//!       "score": 12,
//!       "created": "2024-05-01T09:00:00Z",
//!       "likes": null,
//!       "comments": [{ "author": "bob", "body": "hi", "replies": [] }]
//!     }
//!   ]
//! }
//! ```

use crate::model::{Post, SourceError};
use serde::Deserialize;
use std::path::Path;

/// Parsed contents of a listing file.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingFile {
    /// Header title; the file name is used when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Posts in display order.
    pub posts: Vec<Post>,
}

/// Read and parse a listing file.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if the file does not exist,
/// [`SourceError::Io`] if it cannot be read, and [`SourceError::Parse`] if
/// it is not a valid listing.
pub fn load_listing_file(path: &Path) -> Result<ListingFile, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
