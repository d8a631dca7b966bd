//! # Feed assembly
//!
//! Turns a feed document into validated `Post`s.

use std::collections::HashSet;

use chrono::FixedOffset;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::models::{Post, PostRecord};

/// Parses a JSON array of post records.
///
/// An unreadable document is an error. A single post with a bad
/// `publishedAt` is dropped with a warning and the rest of the feed survives.
pub fn parse_feed(json: &str, offset: FixedOffset) -> Result<Vec<Post>> {
    let records: Vec<PostRecord> =
        serde_json::from_str(json).map_err(|e| AppError::Feed(e.to_string()))?;

    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let mut posts = Vec::with_capacity(total);

    for record in records {
        let id = record.id;
        if !seen.insert(id) {
            // Uniqueness is the feed author's job; keep both and say so.
            warn!(post_id = id, "duplicate post id in feed");
        }
        match Post::from_record(record, offset) {
            Ok(post) => posts.push(post),
            Err(e) => warn!(post_id = id, error = %e, "skipping post"),
        }
    }

    info!(loaded = posts.len(), total, "feed parsed");
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datefmt;

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    const AUTHOR: &str = r#"{ "name": "Mayk Brito", "role": "Educator", "avatarUrl": "https://github.com/maykbrito.png" }"#;

    #[test]
    fn bad_instant_drops_only_that_post() {
        let json = format!(
            r#"[
                {{ "id": 1, "author": {AUTHOR}, "content": [], "publishedAt": "2023-06-16 09:00:00" }},
                {{ "id": 2, "author": {AUTHOR}, "content": [], "publishedAt": "not a date" }},
                {{ "id": 3, "author": {AUTHOR}, "content": [], "publishedAt": "2023-06-15T08:00:00-03:00" }}
            ]"#
        );
        let posts = parse_feed(&json, brt()).unwrap();
        let ids: Vec<u64> = posts.iter().map(Post::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = parse_feed("{ not json", brt()).unwrap_err();
        assert!(matches!(err, AppError::Feed(_)));
    }

    #[test]
    fn duplicate_ids_are_kept() {
        let json = format!(
            r#"[
                {{ "id": 1, "author": {AUTHOR}, "publishedAt": "2023-06-16 09:00:00" }},
                {{ "id": 1, "author": {AUTHOR}, "publishedAt": "2023-06-16 10:00:00" }}
            ]"#
        );
        assert_eq!(parse_feed(&json, brt()).unwrap().len(), 2);
    }

    #[test]
    fn same_moment_gets_same_label_however_written() {
        let json = format!(
            r#"[
                {{ "id": 1, "author": {AUTHOR}, "publishedAt": "2023-06-16 09:00:00" }},
                {{ "id": 2, "author": {AUTHOR}, "publishedAt": "2023-06-16T12:00:00Z" }}
            ]"#
        );
        let posts = parse_feed(&json, brt()).unwrap();

        assert_eq!(posts[0].published_at(), posts[1].published_at());
        for post in &posts {
            assert_eq!(datefmt::format(post.published_at()), "16 de junho às 09:00h");
        }
    }
}
