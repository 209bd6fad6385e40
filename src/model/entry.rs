//! Listing data: posts, comment trees, and the flat entries pages display.

use super::vote::VoteState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A top-level post in a listing, with its comment tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Self text, empty for link posts.
    #[serde(default)]
    pub body: String,
    /// Link target, if any.
    #[serde(default)]
    pub url: Option<String>,
    /// Score as loaded, before the local vote.
    #[serde(default)]
    pub score: i64,
    /// Creation time.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Current vote.
    #[serde(default)]
    pub likes: VoteState,
    /// Top-level comments.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Total number of comments in the tree.
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(Comment::tree_size).sum()
    }
}

/// A comment and its replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Author name.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Score as loaded.
    #[serde(default)]
    pub score: i64,
    /// Creation time.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Current vote.
    #[serde(default)]
    pub likes: VoteState,
    /// Direct replies.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// This comment plus all of its descendants.
    pub fn tree_size(&self) -> usize {
        1 + self.replies.iter().map(Comment::tree_size).sum::<usize>()
    }
}

/// What kind of row an [`Entry`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A post, in a listing or as a thread header.
    Post,
    /// A visible comment.
    Comment,
    /// A collapsed comment standing in for its hidden subtree.
    Collapsed,
}

/// Flat, display-ready view of one provider item.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Row kind.
    pub kind: EntryKind,
    /// Title (posts only).
    pub title: String,
    /// Author name.
    pub author: String,
    /// Body text.
    pub body: String,
    /// Link target (posts only).
    pub url: Option<String>,
    /// Score including the local vote.
    pub score: i64,
    /// Current vote.
    pub likes: VoteState,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Nesting depth (0 for posts and top-level comments).
    pub depth: u16,
    /// Comment count for posts, hidden reply count for collapsed rows.
    pub descendants: usize,
}

impl Entry {
    /// Entry for a post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            kind: EntryKind::Post,
            title: post.title.clone(),
            author: post.author.clone(),
            body: post.body.clone(),
            url: post.url.clone(),
            score: post.score + post.likes.delta(),
            likes: post.likes,
            created: post.created,
            depth: 0,
            descendants: post.comment_count(),
        }
    }

    /// Entry for a comment at `depth`.
    pub fn from_comment(comment: &Comment, depth: u16) -> Self {
        Self {
            kind: EntryKind::Comment,
            title: String::new(),
            author: comment.author.clone(),
            body: comment.body.clone(),
            url: None,
            score: comment.score + comment.likes.delta(),
            likes: comment.likes,
            created: comment.created,
            depth,
            descendants: comment.tree_size() - 1,
        }
    }

    /// Collapsed stand-in for a comment and its replies.
    pub fn collapsed(comment: &Comment, depth: u16) -> Self {
        Self {
            kind: EntryKind::Collapsed,
            ..Self::from_comment(comment, depth)
        }
    }

    /// Whether vote keys apply to this entry.
    pub fn is_votable(&self) -> bool {
        self.kind != EntryKind::Collapsed
    }
}
