//! thread-press: Convert a Twitter/X archive export into threaded Hugo posts
//!
//! This tool reads the flat post export inside an archive directory,
//! reconstructs reply threads, and renders each thread as a Hugo document
//! with its attachments renamed alongside it.

use anyhow::Result;

mod archive;
mod assemble;
mod cli;
mod config;
mod domain;
mod render;

fn main() -> Result<()> {
    cli::run()
}
