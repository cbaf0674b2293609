//! Fixed parts of the DOCX package.
//!
//! Everything here is independent of the report content except the core
//! properties, which carry title, subject, creator and timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

use super::docx::escape_text;

pub(crate) const NS_CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
pub(crate) const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
pub(crate) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Part names, in the order they are written to the archive.
pub const CONTENT_TYPES: &str = "[Content_Types].xml";
pub const ROOT_RELS: &str = "_rels/.rels";
pub const CORE_PROPS: &str = "docProps/core.xml";
pub const APP_PROPS: &str = "docProps/app.xml";
pub const DOCUMENT: &str = "word/document.xml";
pub const STYLES: &str = "word/styles.xml";
pub const NUMBERING: &str = "word/numbering.xml";
pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";

/// Numbering instance used by the `ListBullet` style.
pub(crate) const BULLET_NUM_ID: u32 = 1;

pub(crate) fn content_types_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="{NS_CT}">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
    )
}

pub(crate) fn root_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_RELS}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

pub(crate) fn document_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_RELS}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#
    )
}

pub(crate) fn core_props_xml(
    title: Option<&str>,
    subject: Option<&str>,
    creator: &str,
    created: DateTime<Utc>,
) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    );
    if let Some(title) = title {
        out.push_str(&format!("\n  <dc:title>{}</dc:title>", escape_text(title)));
    }
    if let Some(subject) = subject {
        out.push_str(&format!(
            "\n  <dc:subject>{}</dc:subject>",
            escape_text(subject)
        ));
    }
    let creator = escape_text(creator);
    out.push_str(&format!(
        r#"
  <dc:creator>{creator}</dc:creator>
  <cp:lastModifiedBy>{creator}</cp:lastModifiedBy>
  <dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>
</cp:coreProperties>"#
    ));
    out
}

pub(crate) fn app_props_xml(application: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>{}</Application>
</Properties>"#,
        escape_text(application)
    )
}

pub(crate) fn numbering_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="{NS_W}">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="&#8226;"/>
      <w:lvlJc w:val="left"/>
      <w:pPr>
        <w:ind w:left="720" w:hanging="360"/>
      </w:pPr>
      <w:rPr>
        <w:rFonts w:ascii="Symbol" w:hAnsi="Symbol" w:hint="default"/>
      </w:rPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="{BULLET_NUM_ID}">
    <w:abstractNumId w:val="0"/>
  </w:num>
</w:numbering>"#
    )
}

/// Style sheet with the paragraph and table styles the writer references.
pub(crate) fn styles_xml(table_style: &str) -> String {
    let mut headings = String::new();
    // (level, size in half-points, space before in twips)
    for (level, size, before) in [(1, 32, 480), (2, 26, 200), (3, 24, 200), (4, 22, 200)] {
        headings.push_str(&format!(
            r#"
  <w:style w:type="paragraph" w:styleId="Heading{level}">
    <w:name w:val="heading {level}"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="9"/>
    <w:qFormat/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:spacing w:before="{before}" w:after="0"/>
      <w:outlineLvl w:val="{outline}"/>
    </w:pPr>
    <w:rPr>
      <w:b/>
      <w:color w:val="2E74B5"/>
      <w:sz w:val="{size}"/>
      <w:szCs w:val="{size}"/>
    </w:rPr>
  </w:style>"#,
            outline = level - 1,
        ));
    }

    let table_style = escape_text(table_style);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{NS_W}">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>
        <w:sz w:val="22"/>
        <w:szCs w:val="22"/>
        <w:lang w:val="en-US"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:after="200" w:line="276" w:lineRule="auto"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="10"/>
    <w:qFormat/>
    <w:pPr>
      <w:pBdr>
        <w:bottom w:val="single" w:sz="8" w:space="4" w:color="4F81BD"/>
      </w:pBdr>
      <w:spacing w:after="300" w:line="240" w:lineRule="auto"/>
      <w:contextualSpacing/>
    </w:pPr>
    <w:rPr>
      <w:color w:val="17365D"/>
      <w:spacing w:val="5"/>
      <w:kern w:val="28"/>
      <w:sz w:val="52"/>
      <w:szCs w:val="52"/>
    </w:rPr>
  </w:style>{headings}
  <w:style w:type="paragraph" w:styleId="ListBullet">
    <w:name w:val="List Bullet"/>
    <w:basedOn w:val="Normal"/>
    <w:uiPriority w:val="99"/>
    <w:unhideWhenUsed/>
    <w:qFormat/>
    <w:pPr>
      <w:numPr>
        <w:numId w:val="{BULLET_NUM_ID}"/>
      </w:numPr>
      <w:contextualSpacing/>
    </w:pPr>
  </w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:uiPriority w:val="99"/>
    <w:semiHidden/>
    <w:unhideWhenUsed/>
    <w:tblPr>
      <w:tblInd w:w="0" w:type="dxa"/>
      <w:tblCellMar>
        <w:top w:w="0" w:type="dxa"/>
        <w:left w:w="108" w:type="dxa"/>
        <w:bottom w:w="0" w:type="dxa"/>
        <w:right w:w="108" w:type="dxa"/>
      </w:tblCellMar>
    </w:tblPr>
  </w:style>
  <w:style w:type="table" w:styleId="{table_style}">
    <w:name w:val="Light Grid Accent 1"/>
    <w:basedOn w:val="TableNormal"/>
    <w:uiPriority w:val="62"/>
    <w:pPr>
      <w:spacing w:after="0" w:line="240" w:lineRule="auto"/>
    </w:pPr>
    <w:tblPr>
      <w:tblStyleRowBandSize w:val="1"/>
      <w:tblStyleColBandSize w:val="1"/>
      <w:tblBorders>
        <w:top w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:left w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:bottom w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:right w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:insideH w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:insideV w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
      </w:tblBorders>
    </w:tblPr>
    <w:tblStylePr w:type="firstRow">
      <w:rPr>
        <w:b/>
      </w:rPr>
      <w:tblPr/>
      <w:tcPr>
        <w:tcBorders>
          <w:bottom w:val="single" w:sz="18" w:space="0" w:color="4F81BD"/>
        </w:tcBorders>
        <w:shd w:val="clear" w:color="auto" w:fill="D3DFEE"/>
      </w:tcPr>
    </w:tblStylePr>
    <w:tblStylePr w:type="band1Horz">
      <w:tblPr/>
      <w:tcPr>
        <w:shd w:val="clear" w:color="auto" w:fill="D3DFEE"/>
      </w:tcPr>
    </w:tblStylePr>
  </w:style>
</w:styles>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_styles_define_referenced_ids() {
        let styles = styles_xml("LightGridAccent1");
        for id in [
            "Normal",
            "Title",
            "Heading1",
            "Heading2",
            "Heading3",
            "Heading4",
            "ListBullet",
            "LightGridAccent1",
        ] {
            assert!(
                styles.contains(&format!("w:styleId=\"{id}\"")),
                "missing style {id}"
            );
        }
    }

    #[test]
    fn test_core_props_escaped() {
        let created = Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap();
        let xml = core_props_xml(Some("R&D <Report>"), None, "mdreport", created);
        assert!(xml.contains("<dc:title>R&amp;D &lt;Report&gt;</dc:title>"));
        assert!(!xml.contains("<dc:subject>"));
        assert!(xml.contains("2025-12-01T09:30:00Z"));
    }

    #[test]
    fn test_content_types_cover_parts() {
        let xml = content_types_xml();
        for part in [DOCUMENT, STYLES, NUMBERING, CORE_PROPS, APP_PROPS] {
            assert!(xml.contains(&format!("PartName=\"/{part}\"")), "{part}");
        }
    }
}
