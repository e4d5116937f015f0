//! Section filtering and body assembly

use super::paragraph::build_paragraph;
use super::table::build_table;
use crate::normalize::has_visible_text;
use crate::source_model::{Block, Section};
use crate::unified_document::{BodyElement, OutParagraph};
use itertools::Itertools;

/// Keep the sections that have something to export, in order
///
/// A section survives if it has a block list containing a table or a
/// paragraph with visible text in some run.
pub fn normalize_sections(sections: &[Section]) -> Vec<&[Block]> {
    sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let blocks = section.blocks.as_deref()?;
            if section_has_content(blocks) {
                Some(blocks)
            } else {
                log::debug!("Dropping content-free section {}", index);
                None
            }
        })
        .collect()
}

/// Whether a section's blocks hold a table or any visible text
pub fn section_has_content(blocks: &[Block]) -> bool {
    blocks.iter().any(|block| match block {
        Block::Paragraph(paragraph) => paragraph
            .runs
            .iter()
            .any(|run| run.text().is_some_and(has_visible_text)),
        Block::Table(_) => true,
        Block::Unknown => false,
    })
}

/// Flatten the surviving sections into one body
///
/// A page-break paragraph separates consecutive sections. The body is never
/// empty: if nothing was emitted, it holds one empty paragraph.
pub fn build_body(sections: &[&[Block]]) -> Vec<BodyElement> {
    let per_section = sections.iter().map(|blocks| build_section_body(blocks));
    let mut body: Vec<BodyElement> = Itertools::intersperse_with(per_section, || {
        vec![BodyElement::Paragraph(OutParagraph::page_break())]
    })
    .flatten()
    .collect();

    if body.is_empty() {
        body.push(BodyElement::Paragraph(OutParagraph::empty()));
    }
    body
}

fn build_section_body(blocks: &[Block]) -> Vec<BodyElement> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(BodyElement::Paragraph(build_paragraph(paragraph))),
            Block::Table(table) => Some(BodyElement::Table(build_table(table))),
            Block::Unknown => None,
        })
        .collect()
}
