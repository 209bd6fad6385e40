//! Tri-state vote tracking.

use serde::{Deserialize, Serialize};

/// Which vote key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    /// Upvote (default key: a)
    Up,
    /// Downvote (default key: z)
    Down,
}

/// Current vote on an item.
///
/// Serialized as `likes`: `null` (no vote), `true` (up), `false` (down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum VoteState {
    /// No vote cast.
    #[default]
    None,
    /// Upvoted.
    Up,
    /// Downvoted.
    Down,
}

impl VoteState {
    /// Apply a vote key press.
    ///
    /// Pressing the key matching the current vote clears it; pressing any
    /// other vote key replaces the current vote.
    pub fn toggle(self, direction: VoteDirection) -> Self {
        match (self, direction) {
            (Self::Up, VoteDirection::Up) | (Self::Down, VoteDirection::Down) => Self::None,
            (_, VoteDirection::Up) => Self::Up,
            (_, VoteDirection::Down) => Self::Down,
        }
    }

    /// Score contribution of this vote relative to no vote.
    pub fn delta(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl From<Option<bool>> for VoteState {
    fn from(likes: Option<bool>) -> Self {
        match likes {
            None => Self::None,
            Some(true) => Self::Up,
            Some(false) => Self::Down,
        }
    }
}

impl From<VoteState> for Option<bool> {
    fn from(state: VoteState) -> Self {
        match state {
            VoteState::None => None,
            VoteState::Up => Some(true),
            VoteState::Down => Some(false),
        }
    }
}
