//! Core data model shared across the pipeline.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// A shortened URL occurring inline in a record's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRef {
    /// The t.co token as it appears in the text.
    pub short: String,
    /// Human-readable label for the link.
    pub display: String,
    /// Fully expanded target.
    pub expanded: String,
}

/// Attachment kinds the export can carry. Anything else is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
    AnimatedGif,
}

impl MediaKind {
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video | MediaKind::AnimatedGif)
    }
}

/// One attachment reference. Several refs may share a `source_url` when an
/// attachment comes in multiple size variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    /// The t.co placeholder occurring inline in the text.
    pub source_url: String,
    /// Direct URL of the chosen file (for video/gif, one bitrate variant).
    pub media_url: String,
    pub kind: MediaKind,
    /// Id of the record the attachment belongs to; prefixes the on-disk filename.
    pub owner_id: u64,
}

impl MediaRef {
    /// Filename the archive stores this attachment under:
    /// `<owner_id>-<basename of media_url>`.
    pub fn archive_filename(&self) -> String {
        let path = self.media_url.split(['?', '#']).next().unwrap_or("");
        let base = path.rsplit('/').next().unwrap_or(path);
        format!("{}-{}", self.owner_id, base)
    }
}

/// A normalized post record. `replies` is populated only on thread roots
/// after assembly, and holds a flattened linear chain rather than a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub text: String,
    pub created: DateTime<FixedOffset>,
    /// Id of the record this one replies to, if any.
    pub reply_to: Option<u64>,
    pub is_retweet: bool,
    pub is_mention: bool,
    pub urls: Vec<UrlRef>,
    pub media: Vec<MediaRef>,
    pub replies: Vec<Record>,
}

impl Record {
    /// Total attachment count across the root and its chain.
    pub fn media_count(&self) -> usize {
        self.media.len() + self.replies.iter().map(|r| r.media.len()).sum::<usize>()
    }
}

/// Failures while normalizing a raw export entry. All of these abort the
/// run; a batch conversion is meant to be re-run after a fix, not to make
/// partial progress.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported media type '{kind}' on record {record_id}")]
    UnsupportedMedia { kind: String, record_id: String },

    #[error("record {record_id} has malformed timestamp '{value}'")]
    BadTimestamp { record_id: String, value: String },

    #[error("malformed record id '{value}'")]
    BadId { value: String },

    #[error("video entry on record {record_id} has no bitrate-labeled variant")]
    NoVariant { record_id: String },
}
