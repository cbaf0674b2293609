//! DOCX rendering for report documents.
//!
//! Builds a minimal WordprocessingML package: `document.xml` generated from
//! the block sequence plus the fixed parts in [`super::parts`].

use std::io::{Cursor, Seek, Write};

use chrono::Utc;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::model::{Block, Document, Table};

use super::parts;
use super::{ConversionStats, RenderOptions, RenderResult};

/// Style id of the bordered, header-shaded table style.
pub const TABLE_STYLE: &str = "LightGridAccent1";

/// Usable text width of a Letter page with 1" margins, in twips.
const TEXT_WIDTH: u32 = 9360;

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    DocxRenderer::new(options.clone()).render(doc)
}

/// Render a document to DOCX bytes with block statistics.
pub fn to_docx_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    DocxRenderer::new(options.clone()).render_with_stats(doc)
}

/// DOCX renderer.
pub struct DocxRenderer {
    options: RenderOptions,
    stats: ConversionStats,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Render a document into an in-memory package.
    pub fn render(mut self, doc: &Document) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.write_package(doc, &mut buf)?;
        Ok(buf.into_inner())
    }

    /// Render a document and return the package with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        let mut buf = Cursor::new(Vec::new());
        self.write_package(doc, &mut buf)?;
        self.stats.count_text(&doc.plain_text());
        Ok(RenderResult::new(
            buf.into_inner(),
            doc.metadata.clone(),
            self.stats,
        ))
    }

    /// Write the package to any seekable sink.
    pub fn write_to<W: Write + Seek>(mut self, doc: &Document, writer: W) -> Result<()> {
        self.write_package(doc, writer)
    }

    fn write_package<W: Write + Seek>(&mut self, doc: &Document, writer: W) -> Result<()> {
        let document_xml = self.document_xml(doc);
        let created = doc.metadata.created.unwrap_or_else(Utc::now);

        let mut zip = ZipWriter::new(writer);
        let opt = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let entries = [
            (parts::CONTENT_TYPES, parts::content_types_xml()),
            (parts::ROOT_RELS, parts::root_rels_xml()),
            (
                parts::CORE_PROPS,
                parts::core_props_xml(
                    doc.metadata.title.as_deref(),
                    doc.metadata.subtitle.as_deref(),
                    &self.options.creator,
                    created,
                ),
            ),
            (parts::APP_PROPS, parts::app_props_xml(&self.options.creator)),
            (parts::DOCUMENT, document_xml),
            (parts::STYLES, parts::styles_xml(&self.options.table_style)),
            (parts::NUMBERING, parts::numbering_xml()),
            (parts::DOCUMENT_RELS, parts::document_rels_xml()),
        ];

        for (name, content) in entries {
            zip.start_file(name, opt)?;
            zip.write_all(content.as_bytes())?;
        }

        zip.finish()?;
        log::debug!("Wrote DOCX package with {} blocks", doc.block_count());
        Ok(())
    }

    /// Build `word/document.xml` for the document.
    pub fn document_xml(&mut self, doc: &Document) -> String {
        let mut body = String::new();
        for block in &doc.blocks {
            self.render_block(&mut body, block);
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}" xmlns:r="{}">
  <w:body>
{body}    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>
      <w:cols w:space="720"/>
    </w:sectPr>
  </w:body>
</w:document>"#,
            parts::NS_W,
            parts::NS_R,
        )
    }

    fn render_block(&mut self, out: &mut String, block: &Block) {
        match block {
            Block::Title { text } => {
                out.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr>"#);
                push_run(out, text, "");
                out.push_str("</w:p>\n");
            }
            Block::Subtitle { text } => {
                out.push_str(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr>"#);
                push_run(out, text, "<w:i/><w:iCs/>");
                out.push_str("</w:p>\n");
            }
            Block::Heading { text, level } => {
                self.stats.add_heading();
                out.push_str(&format!(
                    r#"<w:p><w:pPr><w:pStyle w:val="Heading{}"/></w:pPr>"#,
                    (*level).clamp(1, Block::MAX_HEADING_LEVEL)
                ));
                push_run(out, text, "");
                out.push_str("</w:p>\n");
            }
            Block::BulletItem { text } => {
                self.stats.add_bullet();
                out.push_str(r#"<w:p><w:pPr><w:pStyle w:val="ListBullet"/></w:pPr>"#);
                push_run(out, text, "");
                out.push_str("</w:p>\n");
            }
            Block::CodeBlock { text } => {
                self.stats.add_code_block();
                self.render_code_block(out, text);
            }
            Block::Table(table) => {
                self.stats.add_table(table.row_count());
                self.render_table(out, table);
            }
            Block::Spacer => {
                self.stats.add_spacer();
                out.push_str("<w:p/>\n");
            }
            Block::Paragraph { text } => {
                self.stats.add_paragraph();
                out.push_str("<w:p>");
                push_run(out, text, "");
                out.push_str("</w:p>\n");
            }
        }
    }

    fn render_code_block(&self, out: &mut String, text: &str) {
        let font = escape_text(&self.options.code_font);
        let size = self.options.code_font_half_points();
        let run_props = format!(
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#
        );

        out.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:rPr>"#);
        out.push_str(&run_props);
        out.push_str("</w:rPr>");
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                out.push_str("<w:br/>");
            }
            if !line.is_empty() {
                push_text(out, line);
            }
        }
        out.push_str("</w:r></w:p>\n");
    }

    fn render_table(&self, out: &mut String, table: &Table) {
        let columns = table.column_count().max(1) as u32;
        let width = TEXT_WIDTH / columns;

        for (idx, row) in table.rows.iter().enumerate() {
            if row.len() > table.column_count() {
                log::warn!(
                    "Table row {} has {} cells, header has {}; extra cells dropped",
                    idx + 1,
                    row.len(),
                    table.column_count()
                );
            }
        }

        out.push_str("<w:tbl><w:tblPr>");
        out.push_str(&format!(
            r#"<w:tblStyle w:val="{}"/>"#,
            escape_text(&self.options.table_style)
        ));
        out.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        out.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
        out.push_str("</w:tblPr><w:tblGrid>");
        for _ in 0..columns {
            out.push_str(&format!(r#"<w:gridCol w:w="{width}"/>"#));
        }
        out.push_str("</w:tblGrid>\n");

        for (idx, cells) in table.grid().iter().enumerate() {
            out.push_str("<w:tr>");
            if idx == 0 {
                out.push_str("<w:trPr><w:tblHeader/></w:trPr>");
            }
            for cell in cells {
                out.push_str(&format!(
                    r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/></w:tcPr>"#
                ));
                if cell.is_empty() {
                    out.push_str("<w:p/>");
                } else {
                    out.push_str("<w:p>");
                    push_run(out, cell, "");
                    out.push_str("</w:p>");
                }
                out.push_str("</w:tc>");
            }
            out.push_str("</w:tr>\n");
        }
        out.push_str("</w:tbl>\n");
    }
}

/// Append a single run, with optional run properties.
fn push_run(out: &mut String, text: &str, run_props: &str) {
    out.push_str("<w:r>");
    if !run_props.is_empty() {
        out.push_str("<w:rPr>");
        out.push_str(run_props);
        out.push_str("</w:rPr>");
    }
    push_text(out, text);
    out.push_str("</w:r>");
}

fn push_text(out: &mut String, text: &str) {
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&escape_text(text));
    out.push_str("</w:t>");
}

/// Escape text for XML content and attribute values.
///
/// Characters that XML 1.0 cannot carry (most C0 controls, and `\r`)
/// are dropped.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            _ => out.push(ch),
        }
    }
    out
}
