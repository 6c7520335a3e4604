//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::assemble_options;
use crate::archive::{load_entries, parse_record};
use crate::assemble::assemble;
use crate::domain::Record;

#[derive(Args)]
pub struct InfoArgs {
    /// Twitter/X archive directory
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Include only records created strictly after this date
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Include only records created strictly before this date
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// IANA timezone for record timestamps (e.g. 'Europe/Madrid')
    #[arg(long, value_name = "ZONE")]
    pub timezone: Option<String>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let opts = assemble_options(args.after.as_deref(), args.before.as_deref(), args.timezone.as_deref())?;

    let entries = load_entries(&args.archive)?;
    println!("{} tweets loaded", entries.len());

    let records =
        entries.iter().map(parse_record).collect::<Result<Vec<Record>, _>>()?;
    let (threads, reply_count) = assemble(records, &opts);
    println!("{} threads found", threads.len());
    println!("{} replies found", reply_count);

    let with_media = threads.values().filter(|t| t.media_count() > 0).count();
    println!("{with_media} threads carry media");

    Ok(())
}
