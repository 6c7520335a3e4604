//! Shared CLI utilities.

use crate::assemble::AssembleOptions;
use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Parses a filter bound. Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare
/// `YYYY-MM-DD` (midnight). Naive forms are anchored to UTC.
pub fn parse_filter_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    bail!("Invalid date '{value}' (expected RFC 3339, 'YYYY-MM-DD HH:MM:SS', or 'YYYY-MM-DD')")
}

/// Resolves `--after`/`--before`/`--timezone` strings into assembler
/// options. Malformed values are fatal here, before any archive is read.
pub fn assemble_options(
    after: Option<&str>,
    before: Option<&str>,
    timezone: Option<&str>,
) -> Result<AssembleOptions> {
    let timezone = timezone
        .map(|name| name.parse::<Tz>().map_err(|_| anyhow!("Unknown timezone '{name}'")))
        .transpose()?;
    Ok(AssembleOptions {
        after: after.map(parse_filter_date).transpose()?,
        before: before.map(parse_filter_date).transpose()?,
        timezone,
    })
}
