//! Document Renderer: one thread → markdown body + media rename catalog.
//!
//! Rendering is value-returning: the input thread is never mutated, so
//! threads can be rendered in parallel.

use crate::domain::{MediaRef, Record, UrlRef};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// `@handle` as it appears in post text: 1-15 word characters.
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]{1,15})").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct PostOptions<'a> {
    pub author: Option<&'a str>,
    pub tag: Option<&'a str>,
    /// Emit an HTML `<video>` tag instead of a plain link. Requires `unsafe`
    /// rendering enabled in the Hugo markup configuration.
    pub unsafe_video: bool,
}

/// Renders one thread into a Hugo document. Returns the document text and
/// the `{original filename: renamed filename}` catalog for the media copy
/// step.
pub fn render_post(thread: &Record, opts: &PostOptions) -> (String, BTreeMap<String, String>) {
    let mut lines = vec!["---".to_string()];
    lines.push(format!("title: {}", thread.id));
    lines.push(format!("date: {}", thread.created.to_rfc3339()));
    if let Some(author) = opts.author {
        lines.push(format!("author: {author}"));
    }
    if let Some(tag) = opts.tag {
        lines.push(format!("tags: [\"{tag}\"]"));
    }
    lines.push("---".to_string());

    let (mut text, urls, media) = merge_thread(thread);
    text = rewrite_urls(text, &urls);
    text = MENTION.replace_all(&text, "[@$1](http://x.com/$1)").into_owned();
    let catalog = rewrite_media(&mut text, &media, opts.unsafe_video);

    lines.push(text);
    (lines.join("\n"), catalog)
}

/// Plain concatenation of a thread's text, with no rewriting. Used by the
/// tabular export.
pub fn thread_text(thread: &Record) -> String {
    let mut text = format!("{}\n", thread.text);
    for r in &thread.replies {
        text.push('\n');
        text.push_str(&r.text);
        text.push('\n');
    }
    text
}

/// Merges the chain into one running text and collects URLs and media in
/// encounter order.
fn merge_thread(thread: &Record) -> (String, Vec<&UrlRef>, Vec<&MediaRef>) {
    let mut text = format!("{}\n", thread.text);
    let mut urls: Vec<&UrlRef> = thread.urls.iter().collect();
    let mut media: Vec<&MediaRef> = thread.media.iter().collect();

    for r in &thread.replies {
        let reply_text = if r.text.starts_with('@') {
            strip_leading_mentions(&r.text)
        } else {
            r.text.clone()
        };

        // An author splitting one sentence across posts marks the seam with
        // an ellipsis on both sides; splice those into a single paragraph,
        // keeping one ellipsis.
        if text.ends_with("...\n") && reply_text.starts_with("...") {
            text.truncate(text.len() - "...\n".len());
            text.push_str(&reply_text);
            text.push('\n');
        } else {
            text.push('\n');
            text.push_str(&reply_text);
            text.push('\n');
        }
        urls.extend(r.urls.iter());
        media.extend(r.media.iter());
    }

    (text, urls, media)
}

/// Drops every leading whitespace-delimited `@`-token. A reply consisting
/// only of mentions becomes empty.
fn strip_leading_mentions(text: &str) -> String {
    text.split_whitespace()
        .skip_while(|w| w.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces each short URL with a markdown link, in accumulation order.
/// Substitution is literal, so an already-written replacement cannot be
/// corrupted by a later one.
fn rewrite_urls(mut text: String, urls: &[&UrlRef]) -> String {
    for u in urls {
        text = text.replace(&u.short, &format!("[{}]({})", u.display, u.expanded));
    }
    text
}

/// Groups media by source URL in first-seen order, assigns one sequential
/// index per group, and replaces each inline placeholder with the group's
/// display tags. Every variant in a group shares the index and keeps its own
/// original extension.
fn rewrite_media(
    text: &mut String,
    media: &[&MediaRef],
    unsafe_video: bool,
) -> BTreeMap<String, String> {
    let mut groups: Vec<(&str, Vec<&MediaRef>)> = Vec::new();
    let mut group_of: HashMap<&str, usize> = HashMap::new();
    for m in media {
        match group_of.get(m.source_url.as_str()) {
            Some(&i) => groups[i].1.push(*m),
            None => {
                group_of.insert(m.source_url.as_str(), groups.len());
                groups.push((m.source_url.as_str(), vec![*m]));
            }
        }
    }

    let mut catalog = BTreeMap::new();
    for (i, (source_url, variants)) in groups.iter().enumerate() {
        let index = i + 1;
        let mut tags = Vec::new();
        for m in variants {
            let original = m.archive_filename();
            let ext = original.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
            let renamed = format!("{index}.{ext}");
            if m.kind.is_video() {
                if unsafe_video {
                    tags.push(format!("<video src='{renamed}' controls></video>"));
                } else {
                    tags.push(format!("[Video]({renamed})"));
                }
            } else {
                tags.push(format!("[![]({renamed})]({renamed})"));
            }
            catalog.insert(original, renamed);
        }
        *text = text.replace(source_url, &format!("\n\n{}", tags.join("\n")));
    }
    catalog
}
