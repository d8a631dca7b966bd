//! # Domain Models
//!
//! These structs represent the read-only input of one post unit.
//! A `Post` is built once by the feed-assembly layer and never mutated.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// The person who published a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    /// Handed untouched to the avatar collaborator
    pub avatar_url: String,
}

/// One line of a post body. Sequence order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { content: String },
    /// Carries display text only, there is no destination URL.
    Link { content: String },
    /// Any `type` this build does not know. Renders as nothing.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { content: text.into() }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::Link { content: text.into() }
    }

    /// The wire tag, used for fragment keys.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Link { .. } => "link",
            Self::Unknown => "unknown",
        }
    }
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    id: u64,
    author: Author,
    content: Vec<ContentBlock>,
    published_at: DateTime<FixedOffset>,
}

impl Post {
    pub fn new(
        id: u64,
        author: Author,
        content: Vec<ContentBlock>,
        published_at: DateTime<FixedOffset>,
    ) -> Self {
        Self { id, author, content, published_at }
    }

    /// Builds a post from its raw feed shape, reading naive timestamps in `offset`.
    ///
    /// A malformed `publishedAt` is rejected here so nothing downstream ever
    /// has to format an invalid instant.
    pub fn from_record(record: PostRecord, offset: FixedOffset) -> Result<Self> {
        let published_at = parse_instant(&record.published_at, offset)?;
        Ok(Self::new(record.id, record.author, record.content, published_at))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    pub fn published_at(&self) -> DateTime<FixedOffset> {
        self.published_at
    }
}

/// A post as it appears in a feed document, before instant validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u64,
    pub author: Author,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub published_at: String,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reads an RFC 3339 instant, or a naive `YYYY-MM-DD HH:MM:SS` one
/// interpreted as wall time in `offset`. The result is always expressed in
/// `offset`, so one moment gets one label however the feed wrote it.
pub fn parse_instant(raw: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&offset));
    }

    let mut last_err = None;
    for fmt in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, fmt) {
            Ok(naive) => {
                return naive.and_local_timezone(offset).single().ok_or_else(|| {
                    AppError::InvalidInstant {
                        raw: raw.to_string(),
                        reason: "ambiguous local time".to_string(),
                    }
                });
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(AppError::InvalidInstant {
        raw: raw.to_string(),
        reason: last_err.map(|e| e.to_string()).unwrap_or_default(),
    })
}
