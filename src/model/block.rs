//! Block-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Centered document title
    Title {
        /// Title text
        text: String,
    },

    /// Centered, italic line under the title
    Subtitle {
        /// Subtitle text
        text: String,
    },

    /// A section heading
    Heading {
        /// Heading text
        text: String,
        /// Heading level (1-4)
        level: u8,
    },

    /// A bulleted list item
    BulletItem {
        /// Item text
        text: String,
    },

    /// A fenced code block, lines joined with `\n`
    CodeBlock {
        /// Verbatim code
        text: String,
    },

    /// A table
    Table(Table),

    /// An empty paragraph produced by a horizontal rule
    Spacer,

    /// A plain paragraph
    Paragraph {
        /// Raw line text
        text: String,
    },
}

impl Block {
    /// Highest supported heading level.
    pub const MAX_HEADING_LEVEL: u8 = 4;

    /// Create a title block.
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title { text: text.into() }
    }

    /// Create a subtitle block.
    pub fn subtitle(text: impl Into<String>) -> Self {
        Block::Subtitle { text: text.into() }
    }

    /// Create a heading block. The level is clamped to 1-4.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level: level.clamp(1, Self::MAX_HEADING_LEVEL),
        }
    }

    /// Create a bullet item block.
    pub fn bullet(text: impl Into<String>) -> Self {
        Block::BulletItem { text: text.into() }
    }

    /// Create a code block.
    pub fn code(text: impl Into<String>) -> Self {
        Block::CodeBlock { text: text.into() }
    }

    /// Create a plain paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Short name of the block kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Title { .. } => "title",
            Block::Subtitle { .. } => "subtitle",
            Block::Heading { .. } => "heading",
            Block::BulletItem { .. } => "bullet_item",
            Block::CodeBlock { .. } => "code_block",
            Block::Table(_) => "table",
            Block::Spacer => "spacer",
            Block::Paragraph { .. } => "paragraph",
        }
    }

    /// Text carried by the block, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Title { text }
            | Block::Subtitle { text }
            | Block::Heading { text, .. }
            | Block::BulletItem { text }
            | Block::CodeBlock { text }
            | Block::Paragraph { text } => Some(text),
            Block::Table(_) | Block::Spacer => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Table(t) => t.plain_text(),
            _ => self.text().unwrap_or_default().to_string(),
        }
    }

    /// Get the heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}
