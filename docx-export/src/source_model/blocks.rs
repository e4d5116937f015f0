//! Block-level elements of the source model
//!
//! A section is an ordered list of blocks; a block is either a paragraph or a
//! table whose cells hold further paragraph blocks.

use super::lenient;
use super::text_run::Run;
use serde_json::Value;

/// Block-level element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph of runs
    Paragraph(ParagraphBlock),

    /// A grid of rows and cells
    Table(TableBlock),

    /// A missing block or one with an unrecognized `type`
    Unknown,
}

impl Block {
    /// The paragraph inside this block, if it is one
    pub fn as_paragraph(&self) -> Option<&ParagraphBlock> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

/// A paragraph block with optional paragraph-level formatting
///
/// Formatting values are kept as supplied; unrecognized keywords and
/// out-of-range numbers are resolved when the paragraph is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphBlock {
    /// Inline content
    pub runs: Vec<Run>,

    /// Heading keyword (`heading1`..`heading4`)
    pub heading: Option<String>,

    /// Alignment keyword (`left`, `center`, `right`, `justify`)
    pub alignment: Option<String>,

    /// Line spacing as a multiple of single spacing
    pub line_spacing: Option<f64>,

    /// Left indent in points
    pub indent_left_pt: Option<f64>,

    /// First-line indent in points
    pub indent_first_pt: Option<f64>,

    /// List membership
    pub list: Option<ListDescriptor>,
}

impl ParagraphBlock {
    /// Create a paragraph block from runs with no extra formatting
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }
}

/// List membership of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct ListDescriptor {
    /// List kind as supplied (`bullet` or `number`)
    pub kind: String,

    /// Nesting level as supplied; NaN when it had no numeric reading
    pub level: f64,
}

/// A table block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBlock {
    /// Rows in document order
    pub rows: Vec<Row>,
}

/// A table row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Cells in document order
    pub cells: Vec<Cell>,
}

/// A table cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Nested blocks; only paragraphs are exported
    pub blocks: Vec<Block>,
}

impl From<&Value> for Block {
    fn from(value: &Value) -> Self {
        match value["type"].as_str() {
            Some("paragraph") => Block::Paragraph(ParagraphBlock::from(value)),
            Some("table") => Block::Table(TableBlock::from(value)),
            _ => Block::Unknown,
        }
    }
}

impl From<&Value> for ParagraphBlock {
    fn from(value: &Value) -> Self {
        let list = &value["list"];
        Self {
            runs: lenient::array(&value["runs"]).iter().map(Run::from).collect(),
            heading: lenient::string(&value["heading"]),
            alignment: lenient::string(&value["alignment"]),
            line_spacing: lenient::number(&value["lineSpacing"]),
            indent_left_pt: lenient::number(&value["indentLeftPt"]),
            indent_first_pt: lenient::number(&value["indentFirstPt"]),
            list: list.is_object().then(|| ListDescriptor::from(list)),
        }
    }
}

impl From<&Value> for ListDescriptor {
    fn from(value: &Value) -> Self {
        let level = &value["level"];
        Self {
            kind: lenient::coerce_string(&value["type"]),
            level: if lenient::truthy(level) {
                lenient::coerce_number(level)
            } else {
                0.0
            },
        }
    }
}

impl From<&Value> for TableBlock {
    fn from(value: &Value) -> Self {
        Self {
            rows: lenient::array(&value["rows"]).iter().map(Row::from).collect(),
        }
    }
}

impl From<&Value> for Row {
    fn from(value: &Value) -> Self {
        Self {
            cells: lenient::array(&value["cells"]).iter().map(Cell::from).collect(),
        }
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        Self {
            blocks: lenient::array(&value["blocks"]).iter().map(Block::from).collect(),
        }
    }
}
