//! Source model for the export payload
//!
//! This module defines the document model handed over by the editor: sections
//! of paragraph and table blocks plus a flat list of footnotes. Decoding is
//! total: any syntactically valid JSON becomes a payload, with fields of the
//! wrong shape read as absent.

use crate::error::ExportError;
use serde::Deserialize;
use serde_json::Value;

// Submodules
mod blocks;
mod footnote;
mod lenient;
mod text_run;

// Re-export public types
pub use blocks::{Block, Cell, ListDescriptor, ParagraphBlock, Row, TableBlock};
pub use footnote::FootnoteRecord;
pub use text_run::{Run, TextRun};

/// The complete document model for one export call
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ExportPayload {
    /// Sections in document order
    pub sections: Vec<Section>,

    /// Footnote bodies referenced from runs
    pub footnotes: Vec<FootnoteRecord>,
}

impl ExportPayload {
    /// Create a payload from sections with no footnotes
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            footnotes: Vec::new(),
        }
    }

    /// Decode a payload from JSON bytes
    ///
    /// # Returns
    /// * `Ok(ExportPayload)` - The decoded payload (never fails on shape)
    /// * `Err(ExportError::Payload)` - The bytes are not valid JSON
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ExportError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a payload from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Value> for ExportPayload {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for ExportPayload {
    fn from(value: &Value) -> Self {
        Self {
            sections: lenient::array(&value["sections"])
                .iter()
                .map(Section::from)
                .collect(),
            footnotes: lenient::array(&value["footnotes"])
                .iter()
                .map(FootnoteRecord::from)
                .collect(),
        }
    }
}

/// A section of the document
///
/// `blocks` is `None` when the section was missing or had no block list;
/// such sections are never exported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Blocks in document order
    pub blocks: Option<Vec<Block>>,
}

impl Section {
    /// Create a section from blocks
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks: Some(blocks),
        }
    }
}

impl From<&Value> for Section {
    fn from(value: &Value) -> Self {
        Self {
            blocks: value["blocks"]
                .as_array()
                .map(|blocks| blocks.iter().map(Block::from).collect()),
        }
    }
}
