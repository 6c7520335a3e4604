//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::utils::assemble_options;
use crate::archive::{load_entries, parse_record};
use crate::assemble::assemble;
use crate::config::load_config;
use crate::domain::Record;
use crate::render::{render_post, write_table, PostOptions};

#[derive(Args)]
pub struct ExportArgs {
    /// Twitter/X archive directory
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory for generated posts
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Include only records created strictly after this date
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Include only records created strictly before this date
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// IANA timezone for record timestamps (e.g. 'Europe/Madrid')
    #[arg(long, value_name = "ZONE")]
    pub timezone: Option<String>,

    /// Author metadata for the generated front matter
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Tag metadata for the generated front matter
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Use an HTML video tag for embeds; requires enabling `unsafe` in the
    /// Hugo markup configuration
    #[arg(long = "unsafe")]
    pub unsafe_video: bool,

    /// Write a CSV summary of the exported threads to this file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Username for CSV status links
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Path to config file (thread-press.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    // CLI flags win over config file values.
    let author = args.author.or(config.author);
    let tag = args.tag.or(config.tag);
    let timezone = args.timezone.or(config.timezone);
    let username = args.username.or(config.username);
    let unsafe_video = args.unsafe_video || config.unsafe_video;

    let opts = assemble_options(args.after.as_deref(), args.before.as_deref(), timezone.as_deref())?;

    let entries = load_entries(&args.archive)?;
    println!("{} tweets loaded", entries.len());

    let records =
        entries.iter().map(parse_record).collect::<Result<Vec<Record>, _>>()?;
    let (threads, reply_count) = assemble(records, &opts);
    println!("{} threads found", threads.len());
    println!("{} replies found", reply_count);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed creating output directory: {}", args.output.display()))?;

    let post_opts =
        PostOptions { author: author.as_deref(), tag: tag.as_deref(), unsafe_video };

    // Threads are independent and rendering is read-only, so render in
    // parallel; writes below follow descending id order deterministically.
    let ordered: Vec<(u64, &Record)> = threads.iter().rev().map(|(id, t)| (*id, t)).collect();
    let rendered: Vec<(String, BTreeMap<String, String>)> =
        ordered.par_iter().map(|(_, t)| render_post(t, &post_opts)).collect();

    let media_dir = args.archive.join("data").join("tweets_media");
    for ((id, t), (body, catalog)) in ordered.iter().zip(rendered) {
        let stem = format!("{}-{}", t.created.format("%Y%m%d"), id);
        let post_path = if catalog.is_empty() {
            args.output.join(format!("{stem}.md"))
        } else {
            // Posts with attachments become a page bundle: a directory with
            // the renamed media next to index.md.
            let bundle = args.output.join(&stem);
            fs::create_dir_all(&bundle).with_context(|| {
                format!("Failed creating post directory: {}", bundle.display())
            })?;
            for (original, renamed) in &catalog {
                let src = media_dir.join(original);
                fs::copy(&src, bundle.join(renamed))
                    .with_context(|| format!("Failed copying media file: {}", src.display()))?;
            }
            bundle.join("index.md")
        };
        fs::write(&post_path, body)
            .with_context(|| format!("Failed writing post: {}", post_path.display()))?;
        tracing::debug!("wrote {}", post_path.display());
    }

    if let Some(csv_path) = &args.csv {
        let username = username
            .context("--csv requires --username (or `username` in thread-press.toml)")?;
        let file = fs::File::create(csv_path)
            .with_context(|| format!("Failed creating CSV file: {}", csv_path.display()))?;
        write_table(file, &threads, &username)?;
        println!("CSV written to {}", csv_path.display());
    }

    Ok(())
}
