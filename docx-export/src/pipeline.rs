//! Two-stage export pipeline
//!
//! This module orchestrates the export of one payload:
//! 1. **Transformation**: Filter sections and build the unified document
//!    (body, numbering schemes, footnotes) as plain data
//! 2. **Packaging**: Hand the unified document to a [`Packager`] that
//!    serializes it into the bytes of a `.docx` file
//!
//! Each call builds its own object graph; nothing is shared between calls.

mod footnotes;
mod numbering;
mod paragraph;
mod runs;
mod sections;
mod table;

pub use footnotes::{build_footnote_map, footnote_paragraphs};
pub use numbering::build_numbering_schemes;
pub use paragraph::build_paragraph;
pub use runs::{build_runs, build_style};
pub use sections::{build_body, normalize_sections, section_has_content};
pub use table::build_table;

use crate::docx_rs_exporter::DocxRsPackager;
use crate::error::ExportError;
use crate::export_config::ExportConfig;
use crate::source_model::ExportPayload;
use crate::unified_document::UnifiedDocument;
use std::path::Path;

/// Serializes a unified document into output file bytes
pub trait Packager {
    /// Pack the document; errors are returned to the caller unchanged
    fn pack(&self, doc: &UnifiedDocument) -> Result<Vec<u8>, ExportError>;
}

/// Stage 1: Transform a payload into the unified document
///
/// # Parameters
/// * `payload` - The document model supplied by the editor
///
/// # Returns
/// * `Ok(UnifiedDocument)` - The document ready for packaging
/// * `Err(ExportError::NoExportableContent)` - Every section was content-free
pub fn transform(payload: &ExportPayload) -> Result<UnifiedDocument, ExportError> {
    let sections = normalize_sections(&payload.sections);
    log::info!(
        "Exporting {} of {} sections",
        sections.len(),
        payload.sections.len()
    );
    if sections.is_empty() {
        return Err(ExportError::NoExportableContent);
    }

    let footnotes = build_footnote_map(&payload.footnotes);
    let numbering = build_numbering_schemes();
    let body = build_body(&sections);

    Ok(UnifiedDocument {
        numbering,
        footnotes: (!footnotes.is_empty()).then_some(footnotes),
        body,
    })
}

/// Export a payload to `.docx` bytes with the default packager
pub fn export(payload: &ExportPayload) -> Result<Vec<u8>, ExportError> {
    export_with(payload, &DocxRsPackager::default())
}

/// Stage 2: Export a payload through the given packager
///
/// # Parameters
/// * `payload` - The document model supplied by the editor
/// * `packager` - Backend that serializes the unified document
///
/// # Returns
/// * `Ok(Vec<u8>)` - The complete output file
/// * `Err(ExportError)` - No exportable content, or the packager failed
pub fn export_with(
    payload: &ExportPayload,
    packager: &dyn Packager,
) -> Result<Vec<u8>, ExportError> {
    let doc = transform(payload)?;
    log::info!(
        "Transformed document: {} paragraphs, {} tables, {} page breaks, {} footnotes",
        doc.paragraph_count(),
        doc.table_count(),
        doc.page_break_count(),
        doc.footnote_count()
    );
    packager.pack(&doc)
}

/// Export a payload and write the `.docx` file
///
/// # Parameters
/// * `payload` - The document model supplied by the editor
/// * `output_path` - Path where the .docx file will be written
/// * `config` - Presentation settings for the packager
///
/// # Returns
/// * `Ok(())` - Successfully exported and written
/// * `Err(ExportError)` - Error during export or while writing the file
pub fn export_to_path(
    payload: &ExportPayload,
    output_path: &Path,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let bytes = export_with(payload, &DocxRsPackager::new(config.clone()))?;

    // Create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    log::info!("Writing DOCX to: {}", output_path.display());
    std::fs::write(output_path, bytes)?;

    Ok(())
}
