//! Output rendering (Hugo documents, tabular export)

pub mod post;
pub mod table;

pub use post::{render_post, thread_text, PostOptions};
pub use table::write_table;
