//! Domain model types (pure).
//!
//! Positions, votes, listing data and the error taxonomy. Nothing in here
//! touches the terminal.

pub mod entry;
pub mod error;
pub mod position;
pub mod vote;

pub use entry::{Comment, Entry, EntryKind, Post};
pub use error::{ProviderError, SourceError};
pub use position::{offset, Anchor, Direction, Position, Step, SENTINEL_INDEX};
pub use vote::{VoteDirection, VoteState};
