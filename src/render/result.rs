//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including the package and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered DOCX package
    pub content: Vec<u8>,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Block statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: Vec<u8>, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering Markdown blocks.
///
/// The title and subtitle preamble is not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table body rows across all tables
    pub table_row_count: u32,

    /// Number of spacer paragraphs (horizontal rules)
    pub spacer_count: u32,

    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Increment code block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment table count and add its body rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment spacer count.
    pub fn add_spacer(&mut self) {
        self.spacer_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of Markdown blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.bullet_count
            + self.code_block_count
            + self.table_count
            + self.spacer_count
            + self.paragraph_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_stats_count_text() {
        let mut stats = ConversionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_block_count() {
        let mut stats = ConversionStats::new();
        stats.add_heading();
        stats.add_table(3);
        stats.add_spacer();

        assert_eq!(stats.block_count(), 3);
        assert_eq!(stats.table_row_count, 3);
    }
}
