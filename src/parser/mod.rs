//! Markdown parsing module.

mod markdown;
mod options;

pub use markdown::{split_table_row, MarkdownParser};
pub use options::{ParseOptions, DEFAULT_SUBTITLE, DEFAULT_TITLE};
