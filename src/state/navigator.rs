//! Cursor and page arithmetic (pure).
//!
//! The navigator owns the [`Position`] of a page and is the only thing that
//! mutates it. Moves are validated against the content provider before they
//! are committed; rejected moves leave the position untouched and are reported
//! through [`MoveOutcome::valid`] so the caller can ring the bell.
//!
//! The cursor walks down the visible window until it reaches the last visible
//! row. At that point the window itself moves: the anchor jumps to the
//! selected item and the orientation flips, so the selection stays pinned to
//! the edge of the screen while content scrolls underneath it.

use crate::model::{offset, Anchor, Direction, Position, Step};
use crate::provider::IndexProbe;
use tracing::debug;

/// Result of a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move was committed.
    pub valid: bool,
    /// The window moved, not just the cursor within it.
    pub redraw: bool,
}

impl MoveOutcome {
    const REJECTED: Self = Self {
        valid: false,
        redraw: false,
    };
}

/// Owns a page's position and the arithmetic that moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    position: Position,
}

impl Navigator {
    /// Navigator at an explicit position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Navigator with nothing selected, window starting at the header slot.
    pub fn unpositioned() -> Self {
        Self::new(Position::new(Anchor::Unpositioned, 0, false))
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Walk direction implied by the orientation.
    pub fn step(&self) -> Step {
        self.position.step()
    }

    /// Whether the window is laid out bottom-up.
    pub fn is_inverted(&self) -> bool {
        self.position.inverted
    }

    /// Offset of the selection from the anchor.
    pub fn cursor(&self) -> usize {
        self.position.cursor
    }

    /// Provider index the window starts at.
    pub fn page_index(&self) -> i64 {
        self.position.anchor.index()
    }

    /// Selected provider index, `None` when nothing is selected.
    pub fn absolute_index(&self) -> Option<usize> {
        self.position.absolute_index()
    }

    /// Raw selected index; the header slot reads as `-1`.
    pub fn selected_index(&self) -> i64 {
        self.position.selected_index()
    }

    /// Move the cursor one item down or up the screen.
    ///
    /// `visible_count` is the number of items the last render fit on screen.
    pub fn move_cursor<P>(
        &mut self,
        direction: Direction,
        visible_count: usize,
        content: &P,
    ) -> MoveOutcome
    where
        P: IndexProbe + ?Sized,
    {
        let forward = direction.value() * self.step().value() > 0;
        let outcome = if forward {
            self.advance(visible_count, content)
        } else {
            self.retreat(content)
        };

        if !outcome.valid {
            debug!(?direction, position = ?self.position, "Rejected cursor move");
        }
        outcome
    }

    fn advance<P: IndexProbe + ?Sized>(&mut self, visible_count: usize, content: &P) -> MoveOutcome {
        if self.absolute_index().is_none() {
            if !content.is_valid(0) {
                return MoveOutcome::REJECTED;
            }
            self.position = Position::new(Anchor::Positioned(0), 0, false);
            return MoveOutcome {
                valid: true,
                redraw: true,
            };
        }

        let cursor = self.position.cursor + 1;
        if !content.is_valid(offset(self.page_index(), self.step(), cursor)) {
            return MoveOutcome::REJECTED;
        }
        self.position.cursor = cursor;

        if cursor >= visible_count.saturating_sub(1) {
            self.flip(cursor);
            self.position.cursor = 0;
            return MoveOutcome {
                valid: true,
                redraw: true,
            };
        }
        MoveOutcome {
            valid: true,
            redraw: false,
        }
    }

    fn retreat<P: IndexProbe + ?Sized>(&mut self, content: &P) -> MoveOutcome {
        if self.position.cursor > 0 {
            self.position.cursor -= 1;
            return MoveOutcome {
                valid: true,
                redraw: false,
            };
        }

        let page = self.page_index() - self.step().value();
        if page < Anchor::Unpositioned.index() || !content.is_valid(page) {
            return MoveOutcome::REJECTED;
        }
        self.position.anchor = Anchor::from_index(page);
        MoveOutcome {
            valid: true,
            redraw: true,
        }
    }

    /// Advance the anchor by `n` items, put the cursor at `n`, and toggle
    /// the orientation.
    ///
    /// The item at the old anchor is what ends up selected. Applying the
    /// same `flip(n)` twice restores the orientation but not the anchor.
    pub fn flip(&mut self, n: usize) {
        let page = offset(self.page_index(), self.step(), n);
        self.position = Position::new(Anchor::from_index(page), n, !self.position.inverted);
        debug!(n, position = ?self.position, "Flipped page orientation");
    }

    /// Re-anchor after an inverted render ran out of content before filling
    /// the screen.
    ///
    /// Flips to a top-down layout over the `visible_count` items that were
    /// drawn, keeping the same item selected. Unlike a plain [`flip`], which
    /// leaves the cursor on the old anchor, the cursor is set to
    /// `n - previous cursor`.
    ///
    /// [`flip`]: Navigator::flip
    pub fn correct_underfill(&mut self, visible_count: usize) {
        let n = visible_count.saturating_sub(1);
        let cursor = self.position.cursor;
        self.flip(n);
        self.position.cursor = n.saturating_sub(cursor);
    }

    /// Re-anchor so the selection sits on the edge row, as a forward move
    /// past the last visible row does.
    ///
    /// Used when a smaller viewport leaves the cursor off screen.
    pub fn anchor_at_selection(&mut self) {
        let cursor = self.position.cursor;
        if cursor == 0 {
            return;
        }
        self.flip(cursor);
        self.position.cursor = 0;
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
