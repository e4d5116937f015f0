//! End-to-end export tests: payload JSON in, .docx package out.

use docx_export::{pipeline, ExportConfig, ExportError, ExportPayload};
use std::io::{Cursor, Read};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn sample_payload() -> ExportPayload {
    let bytes = std::fs::read(fixture("sample_document.json")).unwrap();
    ExportPayload::from_json_slice(&bytes).unwrap()
}

/// Read one part of a .docx package as text
fn read_part(docx: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("package should contain {}", name));
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_sample_document_exports() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    assert_eq!(&docx[..2], b"PK", "output should be a zip package");

    let document = read_part(&docx, "word/document.xml");
    assert!(document.contains("Quarterly Report"));
    assert!(document.contains("sharply"));
    assert!(document.contains("Region"));
    assert!(document.contains("EMEA"));
}

#[test]
fn test_content_free_section_adds_no_page_break() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");

    // Three sections, the middle one only whitespace: one break between the others
    assert_eq!(document.matches(r#"w:type="page""#).count(), 1);
}

#[test]
fn test_paragraph_and_run_formatting_reach_the_package() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");

    assert!(document.contains(r#"w:pStyle w:val="Heading1""#));
    assert!(document.contains(r#"w:jc w:val="center""#));
    assert!(document.contains(r#"w:line="360""#));
    assert!(document.contains(r#"w:firstLine="360""#));
    assert!(document.contains(r#"w:highlight w:val="yellow""#));
    assert!(document.contains(r#"w:color w:val="336699""#));
    assert!(document.contains(r#"w:sz w:val="22""#));
    assert!(document.contains(r#"w:vertAlign w:val="subscript""#));
}

#[test]
fn test_list_paragraphs_use_fixed_schemes() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");
    let numbering = read_part(&docx, "word/numbering.xml");

    assert!(document.contains(r#"w:numId w:val="2""#));
    assert!(document.contains(r#"w:numId w:val="3""#));
    assert!(numbering.contains(r#"w:numFmt w:val="bullet""#));
    assert!(numbering.contains(r#"w:numFmt w:val="decimal""#));
    assert!(numbering.contains(r#"w:lvlText w:val="%2.""#));
    assert!(numbering.contains('\u{2022}'));
    assert!(numbering.contains('\u{25AA}'));
}

#[test]
fn test_valid_footnotes_are_attached() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");
    let footnotes = read_part(&docx, "word/footnotes.xml");

    assert!(document.contains("footnoteReference"));
    assert!(footnotes.contains("Unaudited figures."));
    assert!(footnotes.contains("Subject to revision."));
    assert!(!footnotes.contains("dropped"));
}

#[test]
fn test_table_cells_split_width_evenly() {
    let docx = pipeline::export(&sample_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");

    assert!(document.contains("w:tbl"));
    assert!(document.contains(r#"w:w="2500""#));
}

#[test]
fn test_table_only_section_is_kept() {
    let payload = ExportPayload::from_json_str(
        r#"{"sections": [{"blocks": [{"type": "table", "rows": [{"cells": [{}]}]}]}]}"#,
    )
    .unwrap();

    let doc = pipeline::transform(&payload).unwrap();
    assert_eq!(doc.table_count(), 1);
    assert!(pipeline::export(&payload).is_ok());
}

#[test]
fn test_payload_without_content_fails() {
    let payload = ExportPayload::from_json_str(
        r#"{"sections": [{"blocks": [{"type": "paragraph", "runs": [{"text": " ​ "}]}]}, null]}"#,
    )
    .unwrap();

    let err = pipeline::export(&payload).unwrap_err();
    assert!(matches!(err, ExportError::NoExportableContent));
}

#[test]
fn test_malformed_fields_degrade_gracefully() {
    let payload = ExportPayload::from_json_str(
        r#"{
            "sections": [{"blocks": [
                {"type": "paragraph", "heading": 3, "alignment": "sideways",
                 "lineSpacing": "double", "list": {"type": "roman", "level": 2},
                 "runs": [{"text": "still here", "color": "purple", "highlight": 12,
                           "sizePt": "big", "font": "", "footnoteRef": "x"},
                          {"text": "visible", "breaks": "two"}]},
                {"type": "image"},
                null
            ]}],
            "footnotes": "none"
        }"#,
    )
    .unwrap();

    let doc = pipeline::transform(&payload).unwrap();
    assert_eq!(doc.footnotes, None);
    assert_eq!(doc.body.len(), 1);

    let docx = pipeline::export(&payload).unwrap();
    let document = read_part(&docx, "word/document.xml");
    assert!(document.contains("visible"));
    assert!(!document.contains("still here"));
}

#[test]
fn test_export_to_path_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nested/out/report.docx");

    pipeline::export_to_path(&sample_payload(), &output, &ExportConfig::default()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    assert!(read_part(&bytes, "word/styles.xml").contains("Heading4"));
}

#[test]
fn test_repeated_exports_are_independent() {
    let payload = sample_payload();
    let first = pipeline::transform(&payload).unwrap();
    let second = pipeline::transform(&payload).unwrap();
    assert_eq!(first, second);
}

fn repeated_reference_payload() -> ExportPayload {
    ExportPayload::from_json_str(
        r#"{
            "sections": [{"blocks": [{"type": "paragraph", "runs": [
                {"text": "a"}, {"footnoteRef": 5}, {"text": "b"}, {"footnoteRef": 5}
            ]}]}],
            "footnotes": [{"id": 5, "text": "Five"}]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_footnote_referenced_twice_is_written_once() {
    let docx = pipeline::export(&repeated_reference_payload()).unwrap();
    let document = read_part(&docx, "word/document.xml");
    let footnotes = read_part(&docx, "word/footnotes.xml");

    assert_eq!(document.matches(r#"<w:footnoteReference w:id="5" />"#).count(), 2);
    assert_eq!(footnotes.matches(r#"<w:footnote w:id="5">"#).count(), 1);
    assert_eq!(footnotes.matches("Five").count(), 1);
}

#[test]
fn test_footnote_ids_come_from_the_model() {
    let payload = ExportPayload::from_json_str(
        r#"{
            "sections": [{"blocks": [{"type": "paragraph", "runs": [
                {"text": "x"}, {"footnoteRef": 12}, {"footnoteRef": 4}
            ]}]}],
            "footnotes": [{"id": 4, "text": "Four"}, {"id": 12, "text": "Twelve"}]
        }"#,
    )
    .unwrap();

    let docx = pipeline::export(&payload).unwrap();
    let document = read_part(&docx, "word/document.xml");
    let footnotes = read_part(&docx, "word/footnotes.xml");

    assert!(document.contains(r#"<w:footnoteReference w:id="12" />"#));
    assert!(document.contains(r#"<w:footnoteReference w:id="4" />"#));
    assert!(footnotes.contains(r#"<w:footnote w:id="4">"#));
    assert!(footnotes.contains(r#"<w:footnote w:id="12">"#));
}

#[test]
fn test_repeated_exports_produce_identical_parts() {
    let payload = repeated_reference_payload();
    let first = pipeline::export(&payload).unwrap();
    let second = pipeline::export(&payload).unwrap();

    for part in ["word/document.xml", "word/footnotes.xml", "word/numbering.xml"] {
        assert_eq!(read_part(&first, part), read_part(&second, part), "{} differs", part);
    }
    assert!(read_part(&first, "word/footnotes.xml").contains(r#"w:id="5""#));

    let sample_first = pipeline::export(&sample_payload()).unwrap();
    let sample_second = pipeline::export(&sample_payload()).unwrap();
    assert_eq!(
        read_part(&sample_first, "word/document.xml"),
        read_part(&sample_second, "word/document.xml")
    );
}

#[test]
fn test_text_on_footnote_marker_keeps_section() {
    let payload = ExportPayload::from_json_str(
        r#"{
            "sections": [{"blocks": [{"type": "paragraph", "runs": [
                {"footnoteRef": 1, "text": "see"}
            ]}]}],
            "footnotes": [{"id": 1, "text": "Note"}]
        }"#,
    )
    .unwrap();

    let doc = pipeline::transform(&payload).unwrap();
    assert_eq!(doc.paragraph_count(), 1);

    let docx = pipeline::export(&payload).unwrap();
    assert!(read_part(&docx, "word/footnotes.xml").contains("Note"));
}
