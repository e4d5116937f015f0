//! Table building

use super::paragraph::build_paragraph;
use crate::source_model::{Block, Cell, Row, TableBlock};
use crate::unified_document::{OutCell, OutParagraph, OutRow, OutTable};

/// Full text-area width
const FULL_WIDTH_PCT: f64 = 100.0;

/// Build an output table from a table block
///
/// Cells keep only their paragraph blocks; nested tables are dropped.
/// Each row splits the full width evenly between its own cells, rows with
/// no cells are dropped, and a table left with no rows gets one placeholder
/// cell so it is never degenerate.
pub fn build_table(block: &TableBlock) -> OutTable {
    let mut rows: Vec<OutRow> = block.rows.iter().filter_map(build_row).collect();

    if rows.is_empty() {
        rows.push(OutRow {
            cells: vec![OutCell {
                paragraphs: vec![OutParagraph::empty()],
                width_pct: None,
            }],
        });
    }

    OutTable {
        rows,
        width_pct: FULL_WIDTH_PCT,
    }
}

fn build_row(row: &Row) -> Option<OutRow> {
    if row.cells.is_empty() {
        return None;
    }

    let width_pct = FULL_WIDTH_PCT / row.cells.len().max(1) as f64;
    let cells = row
        .cells
        .iter()
        .map(|cell| OutCell {
            paragraphs: build_cell_paragraphs(cell),
            width_pct: Some(width_pct),
        })
        .collect();

    Some(OutRow { cells })
}

fn build_cell_paragraphs(cell: &Cell) -> Vec<OutParagraph> {
    let mut paragraphs: Vec<OutParagraph> = cell
        .blocks
        .iter()
        .filter_map(Block::as_paragraph)
        .map(build_paragraph)
        .collect();

    if paragraphs.is_empty() {
        paragraphs.push(OutParagraph::empty());
    }
    paragraphs
}
