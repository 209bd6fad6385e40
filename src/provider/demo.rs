//! Synthetic listing used when no listing file is configured.
//!
//! Posts are derived from their index alone, so the feed can be unbounded
//! without ever materialising more than the posts on screen.

use crate::model::{Comment, Post, VoteState};
use chrono::{DateTime, Duration, Utc};

const WORDS: &[&str] = &[
    "rust", "terminal", "pager", "cursor", "window", "scroll", "thread", "comment", "borrow",
    "lifetime", "iterator", "layout", "render", "viewport", "buffer", "signal", "kernel",
    "compiler", "release", "benchmark", "question", "answer", "weekly", "update", "guide",
    "async", "trait", "macro", "crate", "module",
];

const AUTHORS: &[&str] = &[
    "ferris", "mara", "quinn", "ola", "sven", "tomoko", "ravi", "lea", "noor", "ilse",
];

/// splitmix64 step; deterministic per (index, salt).
fn mix(index: usize, salt: u64) -> u64 {
    let mut z = (index as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(salt.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn pick<'a>(items: &[&'a str], seed: u64) -> &'a str {
    items[(seed % items.len() as u64) as usize]
}

fn sentence(index: usize, salt: u64, words: usize) -> String {
    (0..words)
        .map(|n| pick(WORDS, mix(index, salt + n as u64)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic generated feed, optionally capped at `limit` posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoFeed {
    limit: Option<usize>,
}

impl DemoFeed {
    /// Feed with no last post.
    pub fn unbounded() -> Self {
        Self { limit: None }
    }

    /// Feed with exactly `limit` posts.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Post cap, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Listing name.
    pub fn name(&self) -> &'static str {
        "demo"
    }

    /// Synthesize post `index`; ages count back from `epoch`.
    pub fn post(&self, index: usize, epoch: DateTime<Utc>) -> Option<Post> {
        if self.limit.is_some_and(|limit| index >= limit) {
            return None;
        }

        let seed = mix(index, 1);
        let title_words = 3 + (seed % 10) as usize;
        let mut title = sentence(index, 100, title_words);
        if let Some(first) = title.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        let body = if seed % 3 == 0 {
            sentence(index, 200, 12 + (seed % 40) as usize)
        } else {
            String::new()
        };
        let minutes = i64::try_from(index).unwrap_or(i64::MAX / 60).saturating_mul(17) + 3;

        Some(Post {
            title: format!("#{} {title}", index + 1),
            author: pick(AUTHORS, mix(index, 2)).to_string(),
            body,
            url: (seed % 2 == 0).then(|| format!("https://example.org/posts/{index}")),
            score: (mix(index, 3) % 900) as i64,
            created: epoch.checked_sub_signed(Duration::minutes(minutes)),
            likes: VoteState::None,
            comments: comments(index, 0, (mix(index, 4) % 5) as usize),
        })
    }
}

fn comments(index: usize, depth: u64, count: usize) -> Vec<Comment> {
    (0..count)
        .map(|n| {
            let salt = 1_000 + depth * 100 + n as u64;
            let seed = mix(index, salt);
            let replies = if depth < 3 { (seed % 3) as usize } else { 0 };
            Comment {
                author: pick(AUTHORS, seed).to_string(),
                body: sentence(index, salt * 7, 4 + (seed % 25) as usize),
                score: (seed % 120) as i64,
                created: None,
                likes: VoteState::None,
                replies: comments(index.wrapping_add(n + 1), depth + 1, replies),
            }
        })
        .collect()
}
