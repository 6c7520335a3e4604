//! Archive input: loading the export container and normalizing entries.

pub mod loader;
pub mod parse;
pub mod raw;

pub use loader::load_entries;
pub use parse::parse_record;
