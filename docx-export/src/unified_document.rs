//! Unified document model handed to the packager
//!
//! This module defines the output side of the transformation: plain data
//! with every value already in the target format's units (half-points,
//! twips, palette names). Nothing here depends on the packaging library, so
//! the same structure can be fed to a fake packager in tests.

use crate::highlight::HighlightColor;
use std::collections::BTreeMap;

/// Footnote bodies keyed by decimal footnote id
pub type FootnoteMap = BTreeMap<String, Vec<OutParagraph>>;

/// The unified document model ready for packaging
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedDocument {
    /// List numbering schemes (always the bullet and decimal schemes)
    pub numbering: Vec<NumberingScheme>,
    /// Footnote bodies; `None` when the payload had no valid footnote
    pub footnotes: Option<FootnoteMap>,
    /// Body content of the single output section, never empty
    pub body: Vec<BodyElement>,
}

impl UnifiedDocument {
    /// Number of top-level paragraphs, page-break markers included
    pub fn paragraph_count(&self) -> usize {
        self.body
            .iter()
            .filter(|element| matches!(element, BodyElement::Paragraph(_)))
            .count()
    }

    /// Number of top-level tables
    pub fn table_count(&self) -> usize {
        self.body
            .iter()
            .filter(|element| matches!(element, BodyElement::Table(_)))
            .count()
    }

    /// Number of page-break markers between sections
    pub fn page_break_count(&self) -> usize {
        self.body
            .iter()
            .filter(|element| {
                matches!(element, BodyElement::Paragraph(paragraph) if paragraph.is_page_break())
            })
            .count()
    }

    /// Number of footnote bodies
    pub fn footnote_count(&self) -> usize {
        self.footnotes.as_ref().map_or(0, BTreeMap::len)
    }
}

/// A top-level element of the document body
#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    Paragraph(OutParagraph),
    Table(OutTable),
}

/// Heading level of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
}

impl HeadingLevel {
    /// Paragraph style id used for this heading
    pub fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::Heading1 => "Heading1",
            HeadingLevel::Heading2 => "Heading2",
            HeadingLevel::Heading3 => "Heading3",
            HeadingLevel::Heading4 => "Heading4",
        }
    }
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

/// Line spacing in 240ths of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub line: u32,
}

/// Paragraph indentation in twips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    /// Left indent, never negative
    pub left: Option<i32>,
    /// First-line indent; negative values hang
    pub first_line: Option<i32>,
}

/// Which of the two fixed numbering schemes a list paragraph uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingReference {
    Bullet,
    Number,
}

impl NumberingReference {
    /// Stable scheme identifier
    pub fn as_str(self) -> &'static str {
        match self {
            NumberingReference::Bullet => "parallel-bullet",
            NumberingReference::Number => "parallel-number",
        }
    }
}

/// List membership of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    pub reference: NumberingReference,
    /// Nesting level, 0..=8
    pub level: u8,
}

/// A paragraph of the output document
#[derive(Debug, Clone, PartialEq)]
pub struct OutParagraph {
    /// Inline content, never empty
    pub runs: Vec<OutRun>,
    pub heading: Option<HeadingLevel>,
    pub alignment: Option<Alignment>,
    pub spacing: Option<Spacing>,
    pub indent: Option<Indent>,
    pub numbering: Option<NumberingRef>,
}

impl OutParagraph {
    /// A paragraph with the given runs and no paragraph formatting
    pub fn new(runs: Vec<OutRun>) -> Self {
        Self {
            runs,
            heading: None,
            alignment: None,
            spacing: None,
            indent: None,
            numbering: None,
        }
    }

    /// A paragraph holding a single empty text run
    pub fn empty() -> Self {
        Self::new(vec![OutRun::text("")])
    }

    /// A paragraph holding a single unstyled text run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![OutRun::text(text)])
    }

    /// The marker paragraph placed between sections
    pub fn page_break() -> Self {
        Self::new(vec![OutRun::PageBreak])
    }

    /// Whether this is a section page-break marker
    pub fn is_page_break(&self) -> bool {
        self.runs == [OutRun::PageBreak]
    }
}

/// Character formatting of a text run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub italics: bool,
    /// Single underline
    pub underline: bool,
    pub strike: bool,
    pub subscript: bool,
    pub superscript: bool,
    /// Six uppercase hex digits
    pub color: Option<String>,
    pub highlight: Option<HighlightColor>,
    pub font: Option<String>,
    /// Font size in half-points
    pub size: Option<u32>,
}

/// An inline element of an output paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum OutRun {
    /// Styled text without newlines
    Text { text: String, style: RunStyle },
    /// Explicit line break
    Break,
    /// Page break (only in section marker paragraphs)
    PageBreak,
    /// Reference mark for the footnote with this id
    FootnoteReference(u32),
}

impl OutRun {
    /// An unstyled text run
    pub fn text(text: impl Into<String>) -> Self {
        OutRun::Text {
            text: text.into(),
            style: RunStyle::default(),
        }
    }
}

/// A table of the output document
#[derive(Debug, Clone, PartialEq)]
pub struct OutTable {
    /// Rows, never empty
    pub rows: Vec<OutRow>,
    /// Table width as a percentage of the text area
    pub width_pct: f64,
}

/// A table row, never empty
#[derive(Debug, Clone, PartialEq)]
pub struct OutRow {
    pub cells: Vec<OutCell>,
}

/// A table cell
#[derive(Debug, Clone, PartialEq)]
pub struct OutCell {
    /// Paragraphs, never empty
    pub paragraphs: Vec<OutParagraph>,
    /// Cell width as a percentage; `None` for placeholder cells
    pub width_pct: Option<f64>,
}

/// Number format of a list level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    Bullet,
    Decimal,
}

impl LevelFormat {
    /// The `w:numFmt` value for this format
    pub fn as_str(self) -> &'static str {
        match self {
            LevelFormat::Bullet => "bullet",
            LevelFormat::Decimal => "decimal",
        }
    }
}

/// One level of a numbering scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingLevel {
    pub level: u8,
    pub format: LevelFormat,
    /// Bullet glyph or number template such as `%1.`
    pub text: String,
    pub alignment: Alignment,
    /// Paragraph left indent in twips
    pub indent_left: i32,
    /// Hanging indent in twips
    pub hanging: i32,
}

/// A list numbering scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingScheme {
    pub reference: NumberingReference,
    pub levels: Vec<NumberingLevel>,
}
