//! Turning entries into wrapped, role-tagged rows.

use super::wrap::wrap;
use super::{RowRole, TextRow};
use crate::model::{Entry, VoteState};
use chrono::{DateTime, Utc};

/// Compact age of `created` relative to `now` ("42s", "5m", "3h", "12d", "2y").
///
/// Returns `None` when the creation time is unknown. Future timestamps read "0s".
pub fn humanize_age(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    let seconds = (now - created?).num_seconds().max(0);
    let text = match seconds {
        s if s < 60 => format!("{s}s"),
        s if s < 3_600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3_600),
        s if s < 31_536_000 => format!("{}d", s / 86_400),
        s => format!("{}y", s / 31_536_000),
    };
    Some(text)
}

/// Arrow shown next to the score for the current vote.
pub fn vote_marker(likes: VoteState) -> &'static str {
    match likes {
        VoteState::None => "",
        VoteState::Up => " ▲",
        VoteState::Down => " ▼",
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Meta line for a post: score, vote, age, author, comment count.
pub fn post_meta(entry: &Entry, now: DateTime<Utc>) -> String {
    let mut parts = vec![format!("{} pts{}", entry.score, vote_marker(entry.likes))];
    parts.extend(humanize_age(entry.created, now));
    parts.push(entry.author.clone());
    parts.push(plural(entry.descendants, "comment", "comments"));
    parts.join(" · ")
}

/// Meta line for a comment: author, score, vote, age.
pub fn comment_meta(entry: &Entry, now: DateTime<Utc>) -> String {
    let mut meta = format!(
        "{} {} pts{}",
        entry.author,
        entry.score,
        vote_marker(entry.likes)
    );
    if let Some(age) = humanize_age(entry.created, now) {
        meta.push(' ');
        meta.push_str(&age);
    }
    meta
}

/// Rows for a post. With `full` the link and body follow the meta line.
pub fn post_rows(entry: &Entry, width: usize, now: DateTime<Utc>, full: bool) -> Vec<TextRow> {
    let mut rows: Vec<TextRow> = wrap(&entry.title, width)
        .into_iter()
        .map(|line| TextRow::new(RowRole::Title, line))
        .collect();

    if full {
        if let Some(url) = &entry.url {
            rows.push(TextRow::new(RowRole::Hint, url.clone()));
        }
    }

    rows.push(TextRow::new(RowRole::Meta, post_meta(entry, now)));

    if full && !entry.body.trim().is_empty() {
        rows.extend(
            wrap(&entry.body, width)
                .into_iter()
                .map(|line| TextRow::new(RowRole::Body, line)),
        );
    }
    rows
}

/// Rows for a visible comment: meta line, then the wrapped body.
pub fn comment_rows(entry: &Entry, width: usize, now: DateTime<Utc>) -> Vec<TextRow> {
    let mut rows = vec![TextRow::new(RowRole::Meta, comment_meta(entry, now))];
    rows.extend(
        wrap(&entry.body, width)
            .into_iter()
            .map(|line| TextRow::new(RowRole::Body, line)),
    );
    rows
}

/// Single row standing in for a collapsed comment.
pub fn collapsed_rows(entry: &Entry) -> Vec<TextRow> {
    vec![TextRow::new(
        RowRole::Hint,
        format!(
            "[+] {} ({} hidden)",
            entry.author,
            plural(entry.descendants, "reply", "replies")
        ),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn post(title: &str, body: &str) -> Entry {
        Entry {
            kind: EntryKind::Post,
            title: title.to_string(),
            author: "op".to_string(),
            body: body.to_string(),
            url: None,
            score: 12,
            likes: VoteState::Up,
            created: Some(now() - Duration::hours(3)),
            depth: 0,
            descendants: 1,
        }
    }

    #[test]
    fn ages_pick_the_largest_unit() {
        assert_eq!(humanize_age(Some(now() - Duration::seconds(42)), now()), Some("42s".into()));
        assert_eq!(humanize_age(Some(now() - Duration::minutes(5)), now()), Some("5m".into()));
        assert_eq!(humanize_age(Some(now() - Duration::days(12)), now()), Some("12d".into()));
        assert_eq!(humanize_age(Some(now() + Duration::minutes(5)), now()), Some("0s".into()));
        assert_eq!(humanize_age(None, now()), None);
    }

    #[test]
    fn post_meta_lists_score_age_author_and_comments() {
        assert_eq!(post_meta(&post("t", ""), now()), "12 pts ▲ · 3h · op · 1 comment");
    }

    #[test]
    fn listing_rows_are_title_then_meta() {
        let rows = post_rows(&post("alpha beta gamma", "ignored body"), 10, now(), false);
        let roles: Vec<RowRole> = rows.iter().map(|r| r.role).collect();
        assert_eq!(roles, vec![RowRole::Title, RowRole::Title, RowRole::Meta]);
    }

    #[test]
    fn full_post_rows_include_body() {
        let rows = post_rows(&post("title", "some body"), 40, now(), true);
        assert_eq!(rows.last().map(|r| r.text.as_str()), Some("some body"));
    }

    #[test]
    fn collapsed_row_counts_hidden_replies() {
        let mut entry = post("", "");
        entry.author = "ann".to_string();
        entry.descendants = 3;
        assert_eq!(collapsed_rows(&entry)[0].text, "[+] ann (3 replies hidden)");
        entry.descendants = 1;
        assert_eq!(collapsed_rows(&entry)[0].text, "[+] ann (1 reply hidden)");
    }
}
