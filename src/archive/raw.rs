//! Serde mapping of the raw export payload.
//!
//! The export wraps each post in an object with a single `tweet` key; only
//! the fields the pipeline consumes are modeled here, everything else in the
//! payload is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub tweet: RawTweet,
}

#[derive(Debug, Deserialize)]
pub struct RawTweet {
    pub id: String,
    pub full_text: String,
    pub created_at: String,
    #[serde(default)]
    pub in_reply_to_status_id_str: Option<String>,
    pub entities: RawEntities,
    #[serde(default)]
    pub extended_entities: Option<RawExtendedEntities>,
}

#[derive(Debug, Deserialize)]
pub struct RawEntities {
    #[serde(default)]
    pub urls: Vec<RawUrl>,
}

#[derive(Debug, Deserialize)]
pub struct RawUrl {
    pub url: String,
    pub display_url: String,
    pub expanded_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawExtendedEntities {
    #[serde(default)]
    pub media: Vec<RawMedia>,
}

#[derive(Debug, Deserialize)]
pub struct RawMedia {
    /// Inline t.co placeholder.
    pub url: String,
    pub media_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub video_info: Option<RawVideoInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RawVideoInfo {
    #[serde(default)]
    pub variants: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
pub struct RawVariant {
    /// Absent on the m3u8 playlist variant. Archive exports quote the value,
    /// API captures don't; accept both.
    #[serde(default)]
    pub bitrate: Option<RawBitrate>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawBitrate {
    Num(u64),
    Text(String),
}

impl RawBitrate {
    pub fn value(&self) -> Option<u64> {
        match self {
            RawBitrate::Num(n) => Some(*n),
            RawBitrate::Text(s) => s.parse().ok(),
        }
    }
}
