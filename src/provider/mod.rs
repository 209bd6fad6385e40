//! Content providers: the lazily-iterated item sources pages display.
//!
//! A provider answers two questions: "is there an item at index `i`?"
//! ([`ContentProvider::get`]) and "describe the items from `i` onwards in
//! this direction" ([`ContentProvider::iterate`]). The renderer never knows
//! how many items exist; it pulls descriptors until the screen is full or the
//! sequence ends.

pub mod demo;
pub mod format;
pub mod listing;
pub mod thread;
pub mod wrap;

pub use demo::DemoFeed;
pub use listing::ListingContent;
pub use thread::ThreadContent;

use crate::model::{Entry, ProviderError, Step, VoteDirection, VoteState};
use std::borrow::Cow;

/// Semantic role of one rendered row, mapped to a style by the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRole {
    /// Post title.
    Title,
    /// Score / author / age line.
    Meta,
    /// Body text.
    Body,
    /// Links and placeholders.
    Hint,
}

/// One pre-wrapped row of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    /// How the row should be styled.
    pub role: RowRole,
    /// Row text, already wrapped to fit.
    pub text: String,
}

impl TextRow {
    /// Create a row.
    pub fn new(role: RowRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Everything the renderer needs to lay out and paint one item.
///
/// # Invariants
/// - `render_height >= 1`
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDescriptor<'a> {
    /// Provider index of the item.
    pub index: i64,
    /// Rows the item occupies when fully visible.
    pub render_height: u16,
    /// Columns to indent the item by.
    pub offset: u16,
    /// Wrapped rows to paint.
    pub rows: Vec<TextRow>,
    /// The item itself.
    pub entry: Cow<'a, Entry>,
}

impl<'a> ItemDescriptor<'a> {
    /// Build a descriptor whose height is the number of rows (at least one).
    pub fn new(index: i64, offset: u16, rows: Vec<TextRow>, entry: Cow<'a, Entry>) -> Self {
        let render_height = u16::try_from(rows.len()).unwrap_or(u16::MAX).max(1);
        Self {
            index,
            render_height,
            offset,
            rows,
            entry,
        }
    }
}

/// Source of items for a page.
pub trait ContentProvider {
    /// Display name for the header bar.
    fn name(&self) -> &str;

    /// The item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::OutOfRange`] when there is no such item.
    fn get(&self, index: i64) -> Result<Cow<'_, Entry>, ProviderError>;

    /// Lay out an item fetched with [`ContentProvider::get`] for `max_width` columns.
    fn describe<'a>(&'a self, index: i64, entry: Cow<'a, Entry>, max_width: u16)
        -> ItemDescriptor<'a>;

    /// Lazily describe items from `start`, walking by `step`.
    ///
    /// Each call starts afresh at `start`; the sequence ends at the first
    /// index [`ContentProvider::get`] rejects.
    fn iterate(&self, start: i64, step: Step, max_width: u16) -> LazyItems<'_, Self> {
        LazyItems::new(self, start, step, max_width)
    }

    /// Apply a vote key to the item at `index`.
    ///
    /// Returns the new vote, or `None` when the item cannot be voted on.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::OutOfRange`] when there is no such item.
    fn vote(
        &mut self,
        index: i64,
        direction: VoteDirection,
    ) -> Result<Option<VoteState>, ProviderError>;
}

/// Validity check the navigator uses before committing a move.
pub trait IndexProbe {
    /// Whether an item exists at `index`.
    fn is_valid(&self, index: i64) -> bool;
}

impl<P: ContentProvider + ?Sized> IndexProbe for P {
    fn is_valid(&self, index: i64) -> bool {
        self.get(index).is_ok()
    }
}

/// Lazy iterator returned by [`ContentProvider::iterate`].
pub struct LazyItems<'a, P: ?Sized> {
    provider: &'a P,
    next: Option<i64>,
    step: Step,
    max_width: u16,
}

impl<'a, P: ContentProvider + ?Sized> LazyItems<'a, P> {
    /// Start a sequence at `start`.
    pub fn new(provider: &'a P, start: i64, step: Step, max_width: u16) -> Self {
        Self {
            provider,
            next: Some(start),
            step,
            max_width,
        }
    }
}

impl<'a, P: ContentProvider + ?Sized> Iterator for LazyItems<'a, P> {
    type Item = ItemDescriptor<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let provider = self.provider;
        match provider.get(index) {
            Ok(entry) => {
                self.next = index.checked_add(self.step.value());
                Some(provider.describe(index, entry, self.max_width))
            }
            Err(_) => {
                self.next = None;
                None
            }
        }
    }
}
