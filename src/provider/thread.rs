//! A post and its comment tree, flattened depth-first.
//!
//! Index `-1` is the post itself, shown as a header above the comments and
//! reachable by scrolling back past the first comment. Indices `0..` are the
//! comments that are currently visible; collapsing a comment hides its
//! replies and shifts everything below it up.

use super::format::{collapsed_rows, comment_rows, post_rows};
use super::{ContentProvider, ItemDescriptor};
use crate::model::{
    Comment, Entry, Post, ProviderError, VoteDirection, VoteState, SENTINEL_INDEX,
};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

#[derive(Debug, Clone)]
struct Node {
    /// Comment without its replies; those are the following nodes.
    comment: Comment,
    depth: u16,
    descendants: usize,
    collapsed: bool,
}

impl Node {
    fn entry(&self) -> Entry {
        let mut entry = if self.collapsed {
            Entry::collapsed(&self.comment, self.depth)
        } else {
            Entry::from_comment(&self.comment, self.depth)
        };
        entry.descendants = self.descendants;
        entry
    }
}

/// Comment thread for one post.
#[derive(Debug, Clone)]
pub struct ThreadContent {
    post: Post,
    header: Entry,
    nodes: Vec<Node>,
    /// Node index for every visible comment, in display order.
    visible: Vec<usize>,
    entries: Vec<Entry>,
    indent: u16,
    loaded_at: DateTime<Utc>,
}

fn flatten(comments: &[Comment], depth: u16, nodes: &mut Vec<Node>) {
    for comment in comments {
        nodes.push(Node {
            comment: Comment {
                replies: Vec::new(),
                ..comment.clone()
            },
            depth,
            descendants: comment.tree_size() - 1,
            collapsed: false,
        });
        flatten(&comment.replies, depth.saturating_add(1), nodes);
    }
}

/// Rebuild the tree `flatten` produced, starting at `nodes[*next]`.
fn unflatten(nodes: &[Node], next: &mut usize, depth: u16) -> Vec<Comment> {
    let mut comments = Vec::new();
    while let Some(node) = nodes.get(*next).filter(|node| node.depth == depth) {
        *next += 1;
        let replies = unflatten(nodes, next, depth.saturating_add(1));
        comments.push(Comment {
            replies,
            ..node.comment.clone()
        });
    }
    comments
}

impl ThreadContent {
    /// Build a thread; `indent` is the column offset per nesting level.
    pub fn new(post: Post, indent: u16, loaded_at: DateTime<Utc>) -> Self {
        let mut nodes = Vec::new();
        flatten(&post.comments, 0, &mut nodes);
        let header = Entry::from_post(&post);

        let mut thread = Self {
            post,
            header,
            nodes,
            visible: Vec::new(),
            entries: Vec::new(),
            indent,
            loaded_at,
        };
        thread.rebuild();
        thread
    }

    fn rebuild(&mut self) {
        self.visible.clear();
        let mut next = 0;
        while next < self.nodes.len() {
            let node = &self.nodes[next];
            self.visible.push(next);
            next += if node.collapsed {
                node.descendants + 1
            } else {
                1
            };
        }
        self.entries = self.visible.iter().map(|&n| self.nodes[n].entry()).collect();
    }

    /// Number of comments currently visible.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Collapse the comment at `index` into one row, or expand it again.
    ///
    /// Returns `false` when the comment has no replies to hide.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::OutOfRange`] when no comment is visible at `index`.
    pub fn toggle(&mut self, index: i64) -> Result<bool, ProviderError> {
        let node = self.node_at(index)?;
        if self.nodes[node].descendants == 0 {
            return Ok(false);
        }
        self.nodes[node].collapsed = !self.nodes[node].collapsed;
        self.rebuild();
        Ok(true)
    }

    /// The post with its comment tree, carrying every vote cast in the thread.
    pub fn into_post(self) -> Post {
        let mut next = 0;
        let comments = unflatten(&self.nodes, &mut next, 0);
        Post {
            comments,
            ..self.post
        }
    }

    fn node_at(&self, index: i64) -> Result<usize, ProviderError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.visible.get(i).copied())
            .ok_or(ProviderError::OutOfRange { index })
    }
}

impl ContentProvider for ThreadContent {
    fn name(&self) -> &str {
        &self.post.title
    }

    fn get(&self, index: i64) -> Result<Cow<'_, Entry>, ProviderError> {
        if index == SENTINEL_INDEX {
            return Ok(Cow::Borrowed(&self.header));
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(Cow::Borrowed)
            .ok_or(ProviderError::OutOfRange { index })
    }

    fn describe<'a>(
        &'a self,
        index: i64,
        entry: Cow<'a, Entry>,
        max_width: u16,
    ) -> ItemDescriptor<'a> {
        if index == SENTINEL_INDEX {
            let rows = post_rows(&entry, usize::from(max_width), self.loaded_at, true);
            return ItemDescriptor::new(index, 0, rows, entry);
        }

        let offset = entry.depth.saturating_mul(self.indent);
        let width = usize::from(max_width.saturating_sub(offset));
        let rows = if entry.is_votable() {
            comment_rows(&entry, width, self.loaded_at)
        } else {
            collapsed_rows(&entry)
        };
        ItemDescriptor::new(index, offset, rows, entry)
    }

    fn vote(
        &mut self,
        index: i64,
        direction: VoteDirection,
    ) -> Result<Option<VoteState>, ProviderError> {
        if index == SENTINEL_INDEX {
            self.post.likes = self.post.likes.toggle(direction);
            self.header = Entry::from_post(&self.post);
            return Ok(Some(self.post.likes));
        }

        let node = self.node_at(index)?;
        if self.nodes[node].collapsed {
            return Ok(None);
        }
        let likes = self.nodes[node].comment.likes.toggle(direction);
        self.nodes[node].comment.likes = likes;
        self.rebuild();
        Ok(Some(likes))
    }
}
