//! Document model types for report content representation.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and DOCX rendering: an ordered sequence of blocks
//! plus a little metadata.

mod block;
mod document;
mod table;

pub use block::Block;
pub use document::{Document, Metadata};
pub use table::Table;
