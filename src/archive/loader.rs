//! Export container loading.

use crate::archive::raw::RawEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Variable assignment prefixing the JSON array in `data/tweets.js`.
const JS_PREFIX: &str = "window.YTD.tweets.part0 = ";

/// Reads the post payload from an archive directory. The container is a
/// JavaScript file holding one variable assignment followed by a JSON array
/// of wrapper objects.
pub fn load_entries(archive_root: &Path) -> Result<Vec<RawEntry>> {
    let tweets_js = archive_root.join("data").join("tweets.js");
    let content = fs::read_to_string(&tweets_js)
        .with_context(|| format!("Failed reading archive file: {}", tweets_js.display()))?;

    let json = content.strip_prefix(JS_PREFIX).unwrap_or(&content);
    let entries: Vec<RawEntry> = serde_json::from_str(json)
        .with_context(|| format!("Failed parsing archive file: {}", tweets_js.display()))?;

    tracing::debug!("loaded {} entries from {}", entries.len(), tweets_js.display());
    Ok(entries)
}
