//! Record Parser: one raw export entry → one normalized `Record`.

use crate::archive::raw::{RawEntry, RawMedia};
use crate::domain::{MediaKind, MediaRef, ParseError, Record, UrlRef};
use chrono::DateTime;

/// Timestamp format used by `created_at`, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

pub fn parse_record(entry: &RawEntry) -> Result<Record, ParseError> {
    let t = &entry.tweet;

    let id: u64 = t.id.parse().map_err(|_| ParseError::BadId { value: t.id.clone() })?;

    let created = DateTime::parse_from_str(&t.created_at, CREATED_AT_FORMAT).map_err(|_| {
        ParseError::BadTimestamp { record_id: t.id.clone(), value: t.created_at.clone() }
    })?;

    // An absent or zero reply target means the record starts a thread.
    let reply_to = match t.in_reply_to_status_id_str.as_deref() {
        None => None,
        Some(raw) => {
            let parsed: u64 =
                raw.parse().map_err(|_| ParseError::BadId { value: raw.to_string() })?;
            (parsed != 0).then_some(parsed)
        }
    };

    let urls = t
        .entities
        .urls
        .iter()
        .map(|u| UrlRef {
            short: u.url.clone(),
            display: u.display_url.clone(),
            expanded: u.expanded_url.clone(),
        })
        .collect();

    let mut media = Vec::new();
    if let Some(ext) = &t.extended_entities {
        for m in &ext.media {
            media.push(parse_media(m, id, &t.id)?);
        }
    }

    Ok(Record {
        id,
        text: t.full_text.clone(),
        created,
        reply_to,
        is_retweet: t.full_text.starts_with("RT @"),
        is_mention: t.full_text.starts_with('@'),
        urls,
        media,
        replies: Vec::new(),
    })
}

fn parse_media(m: &RawMedia, owner_id: u64, record_id: &str) -> Result<MediaRef, ParseError> {
    let (kind, media_url) = match m.kind.as_str() {
        "photo" => (MediaKind::Photo, m.media_url.clone()),
        "video" | "animated_gif" => {
            let kind =
                if m.kind == "video" { MediaKind::Video } else { MediaKind::AnimatedGif };
            (kind, select_variant(m, record_id)?)
        }
        other => {
            return Err(ParseError::UnsupportedMedia {
                kind: other.to_string(),
                record_id: record_id.to_string(),
            })
        }
    };
    Ok(MediaRef { source_url: m.url.clone(), media_url, kind, owner_id })
}

/// Picks one URL among the bitrate-labeled variants. The selection is the
/// lowest available bitrate; playlist variants without a bitrate are
/// ignored. A video entry with no usable variant is fatal.
fn select_variant(m: &RawMedia, record_id: &str) -> Result<String, ParseError> {
    m.video_info
        .as_ref()
        .map(|info| info.variants.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|v| v.bitrate.as_ref().and_then(|b| b.value()).map(|b| (b, &v.url)))
        .min_by_key(|(bitrate, _)| *bitrate)
        .map(|(_, url)| url.clone())
        .ok_or_else(|| ParseError::NoVariant { record_id: record_id.to_string() })
}
