//! A flat listing of posts.

use super::format::post_rows;
use super::thread::ThreadContent;
use super::{ContentProvider, DemoFeed, ItemDescriptor};
use crate::model::{Entry, Post, ProviderError, VoteDirection, VoteState};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Feed {
    /// Posts loaded up front; entries are kept in sync with `posts`.
    Loaded { posts: Vec<Post>, entries: Vec<Entry> },
    /// Posts synthesized on demand; only posts that were voted on are stored.
    Generated {
        feed: DemoFeed,
        edited: HashMap<usize, Post>,
    },
}

/// Listing of posts, index `0` being the first post.
///
/// There is no header slot: index `-1` is always out of range.
#[derive(Debug, Clone)]
pub struct ListingContent {
    name: String,
    feed: Feed,
    loaded_at: DateTime<Utc>,
}

impl ListingContent {
    /// Listing over posts already in memory.
    pub fn from_posts(name: impl Into<String>, posts: Vec<Post>, loaded_at: DateTime<Utc>) -> Self {
        let entries = posts.iter().map(Entry::from_post).collect();
        Self {
            name: name.into(),
            feed: Feed::Loaded { posts, entries },
            loaded_at,
        }
    }

    /// Listing over a generated feed.
    pub fn generated(feed: DemoFeed, loaded_at: DateTime<Utc>) -> Self {
        Self {
            name: feed.name().to_string(),
            feed: Feed::Generated {
                feed,
                edited: HashMap::new(),
            },
            loaded_at,
        }
    }

    /// Time ages are measured against.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// The post at `index`, including its comments and the local vote.
    pub fn post(&self, index: usize) -> Option<Cow<'_, Post>> {
        match &self.feed {
            Feed::Loaded { posts, .. } => posts.get(index).map(Cow::Borrowed),
            Feed::Generated { feed, edited } => match edited.get(&index) {
                Some(post) => Some(Cow::Borrowed(post)),
                None => feed.post(index, self.loaded_at).map(Cow::Owned),
            },
        }
    }

    /// Open the post at `index` as a comment thread.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::OutOfRange`] when there is no such post.
    pub fn thread(&self, index: usize, indent: u16) -> Result<ThreadContent, ProviderError> {
        let post = self.post(index).ok_or(ProviderError::OutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
        })?;
        Ok(ThreadContent::new(post.into_owned(), indent, self.loaded_at))
    }

    /// Put back a post edited elsewhere, e.g. the post of a closed thread.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::OutOfRange`] when there is no such post.
    pub fn store_post(&mut self, index: usize, post: Post) -> Result<(), ProviderError> {
        if self.post(index).is_none() {
            return Err(ProviderError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
            });
        }
        match &mut self.feed {
            Feed::Loaded { posts, entries } => {
                entries[index] = Entry::from_post(&post);
                posts[index] = post;
            }
            Feed::Generated { edited, .. } => {
                edited.insert(index, post);
            }
        }
        Ok(())
    }
}

fn to_index(index: i64) -> Result<usize, ProviderError> {
    usize::try_from(index).map_err(|_| ProviderError::OutOfRange { index })
}

impl ContentProvider for ListingContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, index: i64) -> Result<Cow<'_, Entry>, ProviderError> {
        let position = to_index(index)?;
        let entry = match &self.feed {
            Feed::Loaded { entries, .. } => entries.get(position).map(Cow::Borrowed),
            Feed::Generated { .. } => self
                .post(position)
                .map(|post| Cow::Owned(Entry::from_post(&post))),
        };
        entry.ok_or(ProviderError::OutOfRange { index })
    }

    fn describe<'a>(
        &'a self,
        index: i64,
        entry: Cow<'a, Entry>,
        max_width: u16,
    ) -> ItemDescriptor<'a> {
        let rows = post_rows(&entry, usize::from(max_width), self.loaded_at, false);
        ItemDescriptor::new(index, 0, rows, entry)
    }

    fn vote(
        &mut self,
        index: i64,
        direction: VoteDirection,
    ) -> Result<Option<VoteState>, ProviderError> {
        let position = to_index(index)?;
        let mut post = self
            .post(position)
            .ok_or(ProviderError::OutOfRange { index })?
            .into_owned();
        post.likes = post.likes.toggle(direction);
        let likes = post.likes;
        self.store_post(position, post)?;
        Ok(Some(likes))
    }
}
