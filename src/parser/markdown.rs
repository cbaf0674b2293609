//! Line-oriented Markdown translator.
//!
//! The parser walks the source with an explicit line cursor. Each line is
//! classified in a fixed order (first match wins); code fences and pipe
//! tables consume several lines at once and move the cursor themselves.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Metadata, Table};

use super::options::ParseOptions;

const FENCE: &str = "```";

/// Heading prefixes, longest first so `#### ` is never read as level 1.
const HEADING_PREFIXES: [(&str, u8); 4] = [("#### ", 4), ("### ", 3), ("## ", 2), ("# ", 1)];

const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

const RULES: [&str; 3] = ["---", "***", "___"];

/// Markdown report parser.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Read and parse a Markdown file.
    ///
    /// Fails with [`Error::InputNotFound`] when `path` does not exist.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut doc = self.parse_str(&content);
        doc.metadata.source = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Parse Markdown text into a document.
    pub fn parse_str(&self, content: &str) -> Document {
        let mut doc = Document::new();
        doc.metadata = Metadata::now();

        if self.options.preamble {
            doc.metadata.title = Some(self.options.title.clone());
            doc.metadata.subtitle = Some(self.options.subtitle.clone());
            doc.push(Block::title(self.options.title.as_str()));
            doc.push(Block::subtitle(self.options.subtitle.as_str()));
        }

        let lines: Vec<&str> = content.split('\n').collect();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if line.trim().is_empty() {
                i += 1;
                continue;
            }

            if let Some((text, level)) = heading(line) {
                doc.push(Block::heading(text, level));
            } else if let Some(text) = bullet(line) {
                doc.push(Block::bullet(text));
            } else if line.starts_with(FENCE) {
                let (block, next) = read_code_block(&lines, i);
                doc.push(block);
                i = next;
                continue;
            } else if starts_table(&lines, i) {
                let (table, next) = read_table(&lines, i);
                if table.is_empty() {
                    log::debug!("Dropping table with empty header at line {}", i + 1);
                } else {
                    doc.push(Block::Table(table));
                }
                i = next;
                continue;
            } else if RULES.contains(&line.trim()) {
                doc.push(Block::Spacer);
            } else {
                doc.push(Block::paragraph(line));
            }

            i += 1;
        }

        log::debug!(
            "Parsed {} blocks from {} lines",
            doc.block_count(),
            lines.len()
        );
        doc
    }
}

fn heading(line: &str) -> Option<(&str, u8)> {
    HEADING_PREFIXES
        .iter()
        .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|text| (text, *level)))
}

fn bullet(line: &str) -> Option<&str> {
    BULLET_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
}

fn starts_table(lines: &[&str], i: usize) -> bool {
    lines[i].contains('|') && lines.get(i + 1).is_some_and(|next| next.contains('|'))
}

/// Collect a fenced block starting at `start` (the opening fence).
///
/// Returns the block and the index after the closing fence. An
/// unterminated fence swallows the rest of the input.
fn read_code_block(lines: &[&str], start: usize) -> (Block, usize) {
    let body_start = start + 1;
    let mut i = body_start;
    while i < lines.len() && !lines[i].starts_with(FENCE) {
        i += 1;
    }

    let text = lines[body_start.min(i)..i].join("\n");
    if i >= lines.len() {
        log::debug!("Code fence opened at line {} is never closed", start + 1);
        return (Block::code(text), lines.len());
    }

    (Block::code(text), i + 1)
}

/// Collect a pipe table whose header is at `start`.
///
/// The line after the header is skipped without checking that it is a
/// separator. Rows continue while lines contain `|`.
fn read_table(lines: &[&str], start: usize) -> (Table, usize) {
    let mut table = Table::new(split_table_row(lines[start]));

    let mut i = start + 2;
    while i < lines.len() && lines[i].contains('|') {
        table.add_row(split_table_row(lines[i]));
        i += 1;
    }

    (table, i.min(lines.len()))
}

/// Split a pipe-table line into trimmed cells.
///
/// The first and last segments (outside the edge pipes) are dropped, so
/// `| A | B |` yields `["A", "B"]` and `A | B` yields nothing.
pub fn split_table_row(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < 2 {
        return Vec::new();
    }

    segments[1..segments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
