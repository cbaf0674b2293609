//! # mdreport
//!
//! Markdown report to Word (DOCX) conversion.
//!
//! Markdown is read line by line and translated into a small document
//! model (title, subtitle, headings, bullets, code blocks, tables, spacers,
//! paragraphs), which is then written as an Office Open XML package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdreport::{parse_file, render};
//!
//! fn main() -> mdreport::Result<()> {
//!     let doc = parse_file("report/report.md")?;
//!
//!     let options = render::RenderOptions::default();
//!     let bytes = render::to_docx(&doc, &options)?;
//!     std::fs::write("report/report.docx", bytes)?;
//!
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, Converter};
pub use error::{Error, Result};
pub use model::{Block, Document, Metadata, Table};
pub use parser::{MarkdownParser, ParseOptions};
pub use render::{ConversionStats, DocxRenderer, JsonFormat, RenderOptions};

use std::path::Path;

/// Default Markdown input, relative to the project root.
pub const DEFAULT_INPUT: &str = "report/report.md";

/// Default DOCX output, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "report/AI_Finance_Project_Report.docx";

/// Parse a Markdown file with default options.
///
/// # Example
///
/// ```no_run
/// let doc = mdreport::parse_file("report/report.md").unwrap();
/// println!("Blocks: {}", doc.block_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    MarkdownParser::new().parse_file(path)
}

/// Parse Markdown text with default options.
pub fn parse_str(content: &str) -> Document {
    MarkdownParser::new().parse_str(content)
}

/// Convert Markdown text to DOCX bytes with default options.
pub fn to_docx_bytes(content: &str) -> Result<Vec<u8>> {
    Converter::default().convert_str(content)
}

/// Convert a Markdown file to a DOCX file with default options.
///
/// # Example
///
/// ```no_run
/// use mdreport::{convert_file, DEFAULT_INPUT, DEFAULT_OUTPUT};
///
/// convert_file(DEFAULT_INPUT, DEFAULT_OUTPUT)?;
/// # Ok::<(), mdreport::Error>(())
/// ```
pub fn convert_file<P, Q>(input: P, output: Q) -> Result<ConvertResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Converter::default().convert_file(input, output)
}

/// Convert a Markdown file to JSON describing the document model.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_has_preamble() {
        let doc = parse_str("");
        assert_eq!(doc.block_count(), 2);
        assert!(matches!(doc.blocks[0], Block::Title { .. }));
        assert!(matches!(doc.blocks[1], Block::Subtitle { .. }));
    }

    #[test]
    fn test_to_docx_bytes() {
        let bytes = to_docx_bytes("# Title\n\n- a\n- b").unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("no/such/report.md").unwrap_err();
        assert!(err.is_input_not_found());
    }

    #[test]
    fn test_to_json_missing() {
        let result = to_json("no/such/report.md", JsonFormat::Compact);
        assert!(matches!(result, Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_default_paths() {
        assert!(DEFAULT_INPUT.ends_with("report.md"));
        assert!(DEFAULT_OUTPUT.ends_with(".docx"));
    }
}
