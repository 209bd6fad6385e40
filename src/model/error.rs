//! Error types for tpager.
//!
//! # Error Hierarchy
//!
//! - [`ProviderError`] - A content provider has no item at an index. Always
//!   recovered locally: the navigator turns it into an invalid move, the
//!   renderer into the end of the sequence.
//! - [`SourceError`] - A listing could not be loaded (missing file, IO,
//!   malformed JSON). Fatal at startup, reported as a notification on refresh.
//!
//! Terminal errors live in [`crate::view::TuiError`], config errors in
//! [`crate::config::ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve a provider index.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No item exists at the index.
    #[error("No item at index {index}")]
    OutOfRange {
        /// The requested index.
        index: i64,
    },
}

/// Failure to load a listing.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The listing file does not exist.
    #[error("Listing file not found: {0:?}")]
    NotFound(PathBuf),

    /// The listing file exists but could not be read.
    #[error("Failed to read listing file {path:?}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The listing file is not valid listing JSON.
    #[error("Invalid listing JSON in {path:?}: {source}")]
    Parse {
        /// Path with invalid contents.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index() {
        let err = ProviderError::OutOfRange { index: -3 };
        assert_eq!(err.to_string(), "No item at index -3");
    }

    #[test]
    fn not_found_message_names_path() {
        let err = SourceError::NotFound(PathBuf::from("/tmp/missing.json"));
        assert!(err.to_string().contains("missing.json"));
    }
}
