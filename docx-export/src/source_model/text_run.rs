//! Run representation in the source model
//!
//! A run is the smallest unit of a paragraph: either a span of styled text
//! or an inline footnote-reference marker.

use super::lenient;
use serde_json::Value;

/// An inline element of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    /// A span of text with consistent formatting
    Text(TextRun),

    /// A reference to a footnote
    ///
    /// `id` is numerically coerced as supplied (NaN when it had no numeric
    /// reading); validation happens when the run is built. Any `text` on the
    /// marker is never rendered but still counts when deciding whether a
    /// section has content.
    FootnoteRef { id: f64, text: Option<String> },
}

impl Run {
    /// A footnote reference with no text
    pub fn footnote_ref(id: f64) -> Self {
        Run::FootnoteRef { id, text: None }
    }

    /// The raw text carried by the run, whatever its kind
    pub fn text(&self) -> Option<&str> {
        match self {
            Run::Text(text_run) => text_run.text.as_deref(),
            Run::FootnoteRef { text, .. } => text.as_deref(),
        }
    }
}

/// A span of text with consistent formatting
///
/// Style values are kept as supplied; normalization happens at build time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    /// Raw text, possibly containing newlines and zero-width spaces
    pub text: Option<String>,

    /// Bold formatting
    pub bold: bool,

    /// Italic formatting
    pub italic: bool,

    /// Single underline
    pub underline: bool,

    /// Strikethrough formatting
    pub strike: bool,

    /// Subscript formatting
    pub subscript: bool,

    /// Superscript formatting
    pub superscript: bool,

    /// Text color as a hex string
    pub color: Option<String>,

    /// Highlight color as a hex string
    pub highlight: Option<String>,

    /// Font family name
    pub font: Option<String>,

    /// Font size in points
    pub size_pt: Option<f64>,

    /// Number of explicit line breaks emitted before the text
    pub breaks: Option<f64>,
}

impl TextRun {
    /// Create a new plain text run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl From<&Value> for Run {
    fn from(value: &Value) -> Self {
        let footnote_ref = &value["footnoteRef"];
        if lenient::truthy(footnote_ref) {
            return Run::FootnoteRef {
                id: lenient::coerce_number(footnote_ref),
                text: lenient::string(&value["text"]),
            };
        }

        Run::Text(TextRun {
            text: lenient::string(&value["text"]),
            bold: lenient::truthy(&value["bold"]),
            italic: lenient::truthy(&value["italic"]),
            underline: lenient::truthy(&value["underline"]),
            strike: lenient::truthy(&value["strike"]),
            subscript: lenient::truthy(&value["subscript"]),
            superscript: lenient::truthy(&value["superscript"]),
            color: lenient::string(&value["color"]),
            highlight: lenient::string(&value["highlight"]),
            font: lenient::string(&value["font"]),
            size_pt: lenient::number(&value["sizePt"]),
            breaks: lenient::number(&value["breaks"]),
        })
    }
}
