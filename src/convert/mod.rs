//! End-to-end conversion: read Markdown, build the model, write DOCX.
//!
//! # Example
//!
//! ```no_run
//! use mdreport::convert::{ConvertOptions, Converter};
//!
//! fn main() -> mdreport::Result<()> {
//!     let converter = Converter::new(ConvertOptions::default());
//!     let result = converter.convert_file("report/report.md", "report/report.docx")?;
//!     println!("{} blocks", result.document.block_count());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Document;
use crate::parser::{MarkdownParser, ParseOptions};
use crate::render::{ConversionStats, DocxRenderer, RenderOptions};

/// Options for report conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a file conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The document model that was written
    pub document: Document,

    /// Block statistics
    pub stats: ConversionStats,

    /// Output path
    pub output: PathBuf,

    /// Size of the written package in bytes
    pub bytes_written: usize,
}

/// Markdown-to-DOCX converter.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the converter options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Parse a Markdown file into the document model.
    pub fn parse_file<P: AsRef<Path>>(&self, input: P) -> Result<Document> {
        MarkdownParser::with_options(self.options.parse.clone()).parse_file(input)
    }

    /// Convert `input` to a DOCX file at `output`, replacing any existing file.
    ///
    /// A missing input fails with [`crate::Error::InputNotFound`] before
    /// anything is written.
    pub fn convert_file<P, Q>(&self, input: P, output: Q) -> Result<ConvertResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let document = self.parse_file(input)?;
        log::info!(
            "Parsed {} into {} blocks",
            input.display(),
            document.block_count()
        );
        self.write_document(document, output)
    }

    /// Render an already parsed document to a DOCX file at `output`.
    ///
    /// Missing parent directories are created.
    pub fn write_document<Q: AsRef<Path>>(
        &self,
        document: Document,
        output: Q,
    ) -> Result<ConvertResult> {
        let output = output.as_ref();
        let rendered =
            DocxRenderer::new(self.options.render.clone()).render_with_stats(&document)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output, &rendered.content)?;
        log::info!(
            "Wrote {} ({} bytes)",
            output.display(),
            rendered.content_len()
        );

        Ok(ConvertResult {
            document,
            stats: rendered.stats,
            output: output.to_path_buf(),
            bytes_written: rendered.content.len(),
        })
    }

    /// Convert Markdown text to DOCX bytes.
    pub fn convert_str(&self, markdown: &str) -> Result<Vec<u8>> {
        let document =
            MarkdownParser::with_options(self.options.parse.clone()).parse_str(markdown);
        DocxRenderer::new(self.options.render.clone()).render(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().with_title("T"))
            .with_render_options(RenderOptions::new().with_code_font("Consolas"));

        assert_eq!(options.parse.title, "T");
        assert_eq!(options.render.code_font, "Consolas");
    }

    #[test]
    fn test_convert_str_produces_zip() {
        let bytes = Converter::default().convert_str("# Hello").unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let result = Converter::default().convert_file(dir.path().join("missing.md"), &output);

        assert!(matches!(result, Err(Error::InputNotFound(_))));
        assert!(!output.exists());
    }
}
