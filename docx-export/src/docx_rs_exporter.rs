//! DOCX packaging using the docx-rs library
//!
//! This module maps a [`UnifiedDocument`] onto docx-rs builders and packs the
//! result into the bytes of a `.docx` file. It is the only module that knows
//! about docx-rs; everything upstream is plain data.

use crate::error::ExportError;
use crate::export_config::{ExportConfig, HeadingSizes};
use crate::normalize::round_half_up;
use crate::pipeline::Packager;
use crate::unified_document::{
    Alignment, BodyElement, HeadingLevel, NumberingLevel, NumberingReference, NumberingScheme,
    OutCell, OutParagraph, OutRun, OutTable, RunStyle, UnifiedDocument,
};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, Footnote, IndentLevel, Level, LevelJc,
    LevelText, LineSpacing, NumberFormat, Numbering, NumberingId, Paragraph, Run, RunFonts,
    SpecialIndentType, Start, Style, StyleType, Table, TableCell, TableRow, VertAlignType,
    WidthType,
};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

/// Heading levels that get a paragraph style
const HEADING_LEVELS: [HeadingLevel; 4] = [
    HeadingLevel::Heading1,
    HeadingLevel::Heading2,
    HeadingLevel::Heading3,
    HeadingLevel::Heading4,
];

/// Percentage widths are written in fiftieths of a percent
const PCT_UNITS_PER_PERCENT: f64 = 50.0;

/// Footnote bodies keyed by footnote id, one per referenced id
type FootnoteBodies = BTreeMap<u32, Footnote>;

/// Sequential `w14:paraId` values, restarted for every package
///
/// docx-rs otherwise draws paragraph ids from a per-thread counter that
/// keeps running across documents.
#[derive(Debug, Default)]
struct ParagraphIds {
    last: u32,
}

impl ParagraphIds {
    /// A new paragraph carrying the next id
    fn paragraph(&mut self) -> Paragraph {
        self.last += 1;
        Paragraph::new().id(format!("{:08X}", self.last))
    }
}

/// Packager backed by docx-rs
#[derive(Debug, Clone, Default)]
pub struct DocxRsPackager {
    config: ExportConfig,
}

impl DocxRsPackager {
    /// Create a packager with the given configuration
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }
}

impl Packager for DocxRsPackager {
    fn pack(&self, doc: &UnifiedDocument) -> Result<Vec<u8>, ExportError> {
        log::info!(
            "Creating DOCX with docx-rs: {} body elements, {} footnotes",
            doc.body.len(),
            doc.footnote_count()
        );

        let mut ids = ParagraphIds::default();
        let footnotes = create_footnotes(doc, &mut ids);
        let docx = to_docx(doc, &self.config, &footnotes, &mut ids);

        let mut xml = docx.build();
        if !footnotes.is_empty() {
            xml.footnotes = footnotes_part(&footnotes, &mut ids);
        }

        let mut buffer = Cursor::new(Vec::new());
        xml.pack(&mut buffer)
            .map_err(|e| ExportError::Packaging(format!("Failed to write DOCX: {}", e)))?;

        let bytes = buffer.into_inner();
        log::info!("Packed DOCX: {} bytes", bytes.len());
        Ok(bytes)
    }
}

/// Build the docx-rs document for a unified document
fn to_docx(
    doc: &UnifiedDocument,
    config: &ExportConfig,
    footnotes: &FootnoteBodies,
    ids: &mut ParagraphIds,
) -> Docx {
    let mut docx = Docx::new();

    docx = add_heading_styles(docx, &config.headings);
    docx = add_numbering(docx, &doc.numbering);

    for element in &doc.body {
        docx = match element {
            BodyElement::Paragraph(paragraph) => {
                docx.add_paragraph(create_paragraph(paragraph, footnotes, ids))
            }
            BodyElement::Table(table) => docx.add_table(create_table(table, footnotes, ids)),
        };
    }

    docx
}

/// Add heading styles to the document
fn add_heading_styles(mut docx: Docx, sizes: &HeadingSizes) -> Docx {
    for level in HEADING_LEVELS {
        let style_id = level.style_id();
        let style = Style::new(style_id, StyleType::Paragraph)
            .name(style_id)
            .bold()
            .size(sizes.size_pt(level) as usize * 2); // docx-rs uses half-points
        docx = docx.add_style(style);
    }

    docx
}

/// numId / abstractNumId for a scheme; id 1 is taken by the docx-rs default
fn numbering_id(reference: NumberingReference) -> usize {
    match reference {
        NumberingReference::Bullet => 2,
        NumberingReference::Number => 3,
    }
}

/// Register each numbering scheme as an abstract numbering plus its instance
fn add_numbering(mut docx: Docx, schemes: &[NumberingScheme]) -> Docx {
    for scheme in schemes {
        let id = numbering_id(scheme.reference);
        let abstract_numbering = scheme
            .levels
            .iter()
            .fold(AbstractNumbering::new(id), |numbering, level| {
                numbering.add_level(create_level(level))
            });
        docx = docx
            .add_abstract_numbering(abstract_numbering)
            .add_numbering(Numbering::new(id, id));
    }

    docx
}

fn create_level(level: &NumberingLevel) -> Level {
    Level::new(
        usize::from(level.level),
        Start::new(1),
        NumberFormat::new(level.format.as_str()),
        LevelText::new(&level.text),
        LevelJc::new(jc_value(level.alignment)),
    )
    .indent(
        Some(level.indent_left),
        Some(SpecialIndentType::Hanging(level.hanging)),
        None,
        None,
    )
}

/// Footnote ids referenced anywhere in the body
fn referenced_footnotes(doc: &UnifiedDocument) -> BTreeSet<u32> {
    let mut ids = BTreeSet::new();
    let mut visit = |paragraph: &OutParagraph| {
        ids.extend(paragraph.runs.iter().filter_map(|run| match run {
            OutRun::FootnoteReference(id) => Some(*id),
            _ => None,
        }));
    };

    for element in &doc.body {
        match element {
            BodyElement::Paragraph(paragraph) => visit(paragraph),
            BodyElement::Table(table) => table
                .rows
                .iter()
                .flat_map(|row| &row.cells)
                .flat_map(|cell| &cell.paragraphs)
                .for_each(&mut visit),
        }
    }
    ids
}

/// Build one footnote per referenced id, numbered with that id
///
/// A referenced id missing from the footnote map gets an empty body. Map
/// entries that are never referenced are left out.
fn create_footnotes(doc: &UnifiedDocument, ids: &mut ParagraphIds) -> FootnoteBodies {
    let referenced = referenced_footnotes(doc);
    let map = doc.footnotes.as_ref();

    for key in map.into_iter().flat_map(|map| map.keys()) {
        if !key.parse::<u32>().is_ok_and(|id| referenced.contains(&id)) {
            log::debug!("Footnote {} is never referenced", key);
        }
    }

    let no_footnotes = FootnoteBodies::new();
    let mut bodies = FootnoteBodies::new();
    for id in referenced {
        let content = match map.and_then(|map| map.get(&id.to_string())) {
            Some(paragraphs) => paragraphs
                .iter()
                .map(|paragraph| create_paragraph(paragraph, &no_footnotes, ids))
                .collect(),
            None => {
                log::debug!("Footnote {} has no body; emitting an empty one", id);
                vec![ids.paragraph().add_run(Run::new().add_text(""))]
            }
        };
        bodies.insert(
            id,
            Footnote {
                id: id as usize,
                content,
            },
        );
    }

    bodies
}

/// Render `word/footnotes.xml` with exactly one entry per footnote
///
/// docx-rs writes a footnote for every reference run it collects, so the
/// part is rendered from a document that references each footnote once.
fn footnotes_part(footnotes: &FootnoteBodies, ids: &mut ParagraphIds) -> Vec<u8> {
    let mut holder = Docx::new();
    for footnote in footnotes.values() {
        let reference = Run::new().add_footnote_reference(footnote.clone());
        holder = holder.add_paragraph(ids.paragraph().add_run(reference));
    }
    holder.build().footnotes
}

/// Create a docx Paragraph from an output paragraph
fn create_paragraph(
    paragraph: &OutParagraph,
    footnotes: &FootnoteBodies,
    ids: &mut ParagraphIds,
) -> Paragraph {
    let mut para = ids.paragraph();
    for run in &paragraph.runs {
        para = para.add_run(create_run(run, footnotes));
    }

    if let Some(heading) = paragraph.heading {
        para = para.style(heading.style_id());
    }
    if let Some(alignment) = paragraph.alignment {
        para = para.align(alignment_type(alignment));
    }
    if let Some(spacing) = paragraph.spacing {
        para = para.line_spacing(LineSpacing::new().line(spacing.line as _));
    }
    if let Some(indent) = paragraph.indent {
        let special = indent.first_line.map(|first_line| {
            if first_line < 0 {
                SpecialIndentType::Hanging(-first_line)
            } else {
                SpecialIndentType::FirstLine(first_line)
            }
        });
        para = para.indent(indent.left, special, None, None);
    }
    if let Some(numbering) = paragraph.numbering {
        para = para.numbering(
            NumberingId::new(numbering_id(numbering.reference)),
            IndentLevel::new(usize::from(numbering.level)),
        );
    }

    para
}

/// Create a docx Run from an output run
fn create_run(run: &OutRun, footnotes: &FootnoteBodies) -> Run {
    match run {
        OutRun::Text { text, style } => create_text_run(text, style),
        OutRun::Break => Run::new().add_break(BreakType::TextWrapping),
        OutRun::PageBreak => Run::new().add_break(BreakType::Page),
        OutRun::FootnoteReference(id) => {
            let footnote = footnotes.get(id).cloned().unwrap_or_else(|| Footnote {
                id: *id as usize,
                content: vec![Paragraph::new()],
            });
            Run::new().add_footnote_reference(footnote)
        }
    }
}

/// Create a docx Run for styled text
fn create_text_run(text: &str, style: &RunStyle) -> Run {
    let mut run = Run::new().add_text(text);

    if style.bold {
        run = run.bold();
    }
    if style.italics {
        run = run.italic();
    }
    if style.underline {
        run = run.underline("single");
    }
    if style.strike {
        run = run.strike();
    }
    if style.subscript {
        run.run_property = run.run_property.vert_align(VertAlignType::SubScript);
    }
    if style.superscript {
        run.run_property = run.run_property.vert_align(VertAlignType::SuperScript);
    }
    if let Some(color) = &style.color {
        run = run.color(color);
    }
    if let Some(highlight) = style.highlight {
        run = run.highlight(highlight.as_str());
    }
    if let Some(font) = &style.font {
        run = run.fonts(
            RunFonts::new()
                .ascii(font)
                .hi_ansi(font)
                .east_asia(font)
                .cs(font),
        );
    }
    if let Some(size) = style.size {
        run = run.size(size as usize);
    }

    run
}

/// Create a docx Table with percentage widths
fn create_table(table: &OutTable, footnotes: &FootnoteBodies, ids: &mut ParagraphIds) -> Table {
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            cells.push(create_table_cell(cell, footnotes, ids));
        }
        rows.push(TableRow::new(cells));
    }

    Table::new(rows).width(pct_width(table.width_pct), WidthType::Pct)
}

/// Create a table cell holding its paragraphs
fn create_table_cell(
    cell: &OutCell,
    footnotes: &FootnoteBodies,
    ids: &mut ParagraphIds,
) -> TableCell {
    let mut table_cell = TableCell::new();
    for paragraph in &cell.paragraphs {
        table_cell = table_cell.add_paragraph(create_paragraph(paragraph, footnotes, ids));
    }

    match cell.width_pct {
        Some(width_pct) => table_cell.width(pct_width(width_pct), WidthType::Pct),
        None => table_cell,
    }
}

fn pct_width(percent: f64) -> usize {
    round_half_up(percent * PCT_UNITS_PER_PERCENT) as usize
}

/// Convert Alignment to AlignmentType for paragraph formatting
fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justified => AlignmentType::Both,
    }
}

/// `w:lvlJc` value for a numbering level
fn jc_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justified => "both",
    }
}
