//! Cursor position types for the navigator.
//!
//! A position is the triple (anchor, cursor, inverted). The anchor is the
//! provider index the visible window starts from, the cursor is the offset of
//! the selected item from that anchor, measured in the current step direction.

/// Provider index occupied by an unpositioned anchor.
///
/// Providers may expose a header item here (e.g. the post above its
/// comments). It is rendered but never selectable.
pub const SENTINEL_INDEX: i64 = -1;

/// Where the visible window is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Nothing positioned yet; the window starts at [`SENTINEL_INDEX`].
    Unpositioned,
    /// Window starts at a provider index the provider has confirmed exists.
    Positioned(usize),
}

impl Anchor {
    /// Provider index this anchor refers to.
    pub fn index(self) -> i64 {
        match self {
            Self::Unpositioned => SENTINEL_INDEX,
            Self::Positioned(index) => to_signed(index),
        }
    }

    /// Build an anchor from a raw provider index.
    ///
    /// Any negative index collapses to [`Anchor::Unpositioned`].
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index).map_or(Self::Unpositioned, Self::Positioned)
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::Positioned(0)
    }
}

/// Direction the provider sequence is walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards larger indices (+1).
    Forward,
    /// Towards smaller indices (-1).
    Backward,
}

impl Step {
    /// Signed value of the step.
    pub fn value(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The opposite step.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Direction of a requested cursor move, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down the screen (+1).
    Down,
    /// Up the screen (-1).
    Up,
}

impl Direction {
    /// Signed value of the direction.
    pub fn value(self) -> i64 {
        match self {
            Self::Down => 1,
            Self::Up => -1,
        }
    }
}

/// Snapshot of the navigator state.
///
/// # Invariants
/// - `absolute_index()` is `None` (nothing selected) or an index the
///   provider confirmed exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Anchor of the visible window.
    pub anchor: Anchor,
    /// Offset of the selected item from the anchor.
    pub cursor: usize,
    /// Whether the window is laid out bottom-up.
    pub inverted: bool,
}

impl Position {
    /// Create a position.
    pub fn new(anchor: Anchor, cursor: usize, inverted: bool) -> Self {
        Self {
            anchor,
            cursor,
            inverted,
        }
    }

    /// Walk direction implied by the orientation.
    pub fn step(&self) -> Step {
        if self.inverted {
            Step::Backward
        } else {
            Step::Forward
        }
    }

    /// Raw selected provider index, `anchor + step * cursor`.
    ///
    /// May be [`SENTINEL_INDEX`] when the header slot is selected.
    pub fn selected_index(&self) -> i64 {
        offset(self.anchor.index(), self.step(), self.cursor)
    }

    /// Selected provider index, or `None` when nothing is selected.
    pub fn absolute_index(&self) -> Option<usize> {
        usize::try_from(self.selected_index()).ok()
    }
}

/// `index + step * n`, saturating at the i64 bounds.
pub fn offset(index: i64, step: Step, n: usize) -> i64 {
    index.saturating_add(step.value().saturating_mul(to_signed(n)))
}

fn to_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
