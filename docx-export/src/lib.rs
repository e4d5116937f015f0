//! docx-export - rich document model to Word (.docx) export
//!
//! Converts the JSON document model produced by the editor (sections of
//! paragraphs, styled runs, lists, tables, and footnotes) into a `.docx`
//! file. Input irregularities degrade gracefully; the only fatal input case
//! is a payload with no exportable section.
//!
//! ```rust,no_run
//! use docx_export::{pipeline, ExportPayload};
//!
//! let payload = ExportPayload::from_json_str(r#"{"sections": []}"#)?;
//! let bytes = pipeline::export(&payload)?;
//! # Ok::<(), docx_export::ExportError>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod docx_rs_exporter;
pub mod error;
pub mod export_config;
pub mod highlight;
pub mod normalize;
pub mod pipeline;
pub mod source_model;
pub mod unified_document;

pub use docx_rs_exporter::DocxRsPackager;
pub use error::ExportError;
pub use export_config::ExportConfig;
pub use pipeline::{export, export_to_path, export_with, transform, Packager};
pub use source_model::ExportPayload;
pub use unified_document::UnifiedDocument;
