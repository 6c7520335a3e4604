//! Tabular thread export.
//!
//! One row per thread, descending id order, with the plain (unrewritten)
//! thread text in the last column.

use crate::domain::Record;
use crate::render::post::thread_text;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

pub fn write_table<W: Write>(
    out: W,
    threads: &BTreeMap<u64, Record>,
    username: &str,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["id", "date", "time", "replies", "media", "link", "body"])?;
    for (id, t) in threads.iter().rev() {
        writer.write_record([
            id.to_string(),
            t.created.format("%Y-%b-%d").to_string(),
            t.created.format("%H:%M").to_string(),
            t.replies.len().to_string(),
            t.media_count().to_string(),
            format!("https://x.com/{username}/status/{id}"),
            thread_text(t),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
