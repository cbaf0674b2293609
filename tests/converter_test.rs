//! Integration tests for file conversion.

use std::fs;

use mdreport::convert::{ConvertOptions, Converter};
use mdreport::model::Block;
use mdreport::parser::ParseOptions;
use mdreport::Error;

const REPORT: &str = "# Summary\n\n- item one\n* item two\n\n```\ncode line 1\ncode line 2\n```\n";

#[test]
fn test_convert_file_writes_docx() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    let output = dir.path().join("report.docx");
    fs::write(&input, REPORT).unwrap();

    let result = mdreport::convert_file(&input, &output).unwrap();

    assert!(output.exists());
    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), result.bytes_written);
    assert_eq!(&bytes[..4], b"PK\x03\x04");

    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.bullet_count, 2);
    assert_eq!(result.stats.code_block_count, 1);
    assert_eq!(
        result.document.metadata.source.as_deref(),
        Some(input.as_path())
    );
}

#[test]
fn test_missing_input_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    let output = dir.path().join("report.docx");

    let err = mdreport::convert_file(&input, &output).unwrap_err();

    assert!(matches!(err, Error::InputNotFound(ref p) if p == &input));
    assert!(!output.exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    let output = dir.path().join("report.docx");
    fs::write(&input, REPORT).unwrap();
    fs::write(&output, b"stale").unwrap();

    mdreport::convert_file(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_ne!(bytes, b"stale");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_output_parent_created() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    let output = dir.path().join("out").join("deep").join("report.docx");
    fs::write(&input, REPORT).unwrap();

    mdreport::convert_file(&input, &output).unwrap();
    assert!(output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, REPORT).unwrap();

    // The output path is an existing directory.
    let err = mdreport::convert_file(&input, dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_invalid_utf8_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, [0xFF, 0xFE, 0x00, 0x41]).unwrap();

    let err = mdreport::convert_file(&input, dir.path().join("out.docx")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_two_runs_same_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, REPORT).unwrap();

    let first = mdreport::convert_file(&input, dir.path().join("a.docx")).unwrap();
    let second = mdreport::convert_file(&input, dir.path().join("b.docx")).unwrap();

    assert!(first.document.same_blocks(&second.document));
}

#[test]
fn test_converter_without_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.md");
    fs::write(&input, "- only").unwrap();

    let converter = Converter::new(
        ConvertOptions::new().with_parse_options(ParseOptions::new().without_preamble()),
    );
    let result = converter
        .convert_file(&input, dir.path().join("out.docx"))
        .unwrap();

    assert_eq!(result.document.blocks, vec![Block::bullet("only")]);
}
