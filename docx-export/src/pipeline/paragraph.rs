//! Paragraph building

use super::runs::build_runs;
use crate::normalize::{clamp_number, round_half_up, to_twips};
use crate::source_model::{ListDescriptor, ParagraphBlock};
use crate::unified_document::{
    Alignment, HeadingLevel, Indent, NumberingRef, NumberingReference, OutParagraph, OutRun,
    Spacing,
};

/// Heading keywords, matched case-insensitively
const HEADING_MAP: [(&str, HeadingLevel); 4] = [
    ("heading1", HeadingLevel::Heading1),
    ("heading2", HeadingLevel::Heading2),
    ("heading3", HeadingLevel::Heading3),
    ("heading4", HeadingLevel::Heading4),
];

/// Alignment keywords, matched case-insensitively
const ALIGNMENT_MAP: [(&str, Alignment); 4] = [
    ("left", Alignment::Left),
    ("center", Alignment::Center),
    ("right", Alignment::Right),
    ("justify", Alignment::Justified),
];

/// List kinds, matched case-insensitively
const LIST_MAP: [(&str, NumberingReference); 2] = [
    ("bullet", NumberingReference::Bullet),
    ("number", NumberingReference::Number),
];

/// Allowed line-spacing multiples
const MIN_LINE_SPACING: f64 = 0.5;
const MAX_LINE_SPACING: f64 = 4.0;

/// Line-spacing units per single line
const LINE_UNITS: f64 = 240.0;

/// Deepest list level
const MAX_LIST_LEVEL: f64 = 8.0;

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

/// Build one output paragraph from a paragraph block
pub fn build_paragraph(block: &ParagraphBlock) -> OutParagraph {
    let mut runs = build_runs(&block.runs);
    if runs.is_empty() {
        runs.push(OutRun::text(""));
    }

    OutParagraph {
        runs,
        heading: block
            .heading
            .as_deref()
            .and_then(|key| lookup(&HEADING_MAP, key)),
        alignment: block
            .alignment
            .as_deref()
            .and_then(|key| lookup(&ALIGNMENT_MAP, key)),
        spacing: block.line_spacing.and_then(build_spacing),
        indent: build_indent(block),
        numbering: block.list.as_ref().and_then(build_numbering),
    }
}

fn build_spacing(line_spacing: f64) -> Option<Spacing> {
    if !line_spacing.is_finite() {
        return None;
    }
    let multiple = clamp_number(line_spacing, MIN_LINE_SPACING, MAX_LINE_SPACING);
    Some(Spacing {
        line: round_half_up(multiple * LINE_UNITS) as u32,
    })
}

fn build_indent(block: &ParagraphBlock) -> Option<Indent> {
    let left = block
        .indent_left_pt
        .map(|pt| to_twips(pt).unwrap_or(0).max(0));
    let first_line = block.indent_first_pt.map(|pt| to_twips(pt).unwrap_or(0));

    if left.is_none() && first_line.is_none() {
        return None;
    }
    Some(Indent { left, first_line })
}

fn build_numbering(list: &ListDescriptor) -> Option<NumberingRef> {
    let reference = lookup(&LIST_MAP, &list.kind)?;
    let level = clamp_number(list.level, 0.0, MAX_LIST_LEVEL).floor() as u8;
    Some(NumberingRef { reference, level })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::{Run, TextRun};

    fn block() -> ParagraphBlock {
        ParagraphBlock::new(vec![Run::Text(TextRun::new("Body"))])
    }

    fn list(kind: &str, level: f64) -> Option<ListDescriptor> {
        Some(ListDescriptor {
            kind: kind.to_string(),
            level,
        })
    }

    #[test]
    fn test_empty_paragraph_gets_one_empty_run() {
        let paragraph = build_paragraph(&ParagraphBlock::default());
        assert_eq!(paragraph, OutParagraph::empty());
    }

    #[test]
    fn test_heading_lookup_is_case_insensitive() {
        let paragraph = build_paragraph(&ParagraphBlock {
            heading: Some("HEADING3".to_string()),
            ..block()
        });
        assert_eq!(paragraph.heading, Some(HeadingLevel::Heading3));

        let paragraph = build_paragraph(&ParagraphBlock {
            heading: Some("heading5".to_string()),
            ..block()
        });
        assert_eq!(paragraph.heading, None);
    }

    #[test]
    fn test_alignment_lookup() {
        let paragraph = build_paragraph(&ParagraphBlock {
            alignment: Some("Justify".to_string()),
            ..block()
        });
        assert_eq!(paragraph.alignment, Some(Alignment::Justified));

        let paragraph = build_paragraph(&ParagraphBlock {
            alignment: Some("middle".to_string()),
            ..block()
        });
        assert_eq!(paragraph.alignment, None);
    }

    #[test]
    fn test_line_spacing() {
        let spacing = |value| {
            build_paragraph(&ParagraphBlock {
                line_spacing: Some(value),
                ..block()
            })
            .spacing
        };
        assert_eq!(spacing(1.5), Some(Spacing { line: 360 }));
        assert_eq!(spacing(0.1), Some(Spacing { line: 120 }));
        assert_eq!(spacing(10.0), Some(Spacing { line: 960 }));
        assert_eq!(build_paragraph(&block()).spacing, None);
    }

    #[test]
    fn test_indent() {
        let paragraph = build_paragraph(&ParagraphBlock {
            indent_left_pt: Some(-10.0),
            indent_first_pt: Some(18.0),
            ..block()
        });
        assert_eq!(
            paragraph.indent,
            Some(Indent {
                left: Some(0),
                first_line: Some(360)
            })
        );

        let paragraph = build_paragraph(&ParagraphBlock {
            indent_left_pt: Some(36.0),
            ..block()
        });
        assert_eq!(
            paragraph.indent,
            Some(Indent {
                left: Some(720),
                first_line: None
            })
        );
        assert_eq!(build_paragraph(&block()).indent, None);
    }

    #[test]
    fn test_list_level_clamping() {
        let numbering = |kind: &str, level| {
            build_paragraph(&ParagraphBlock {
                list: list(kind, level),
                ..block()
            })
            .numbering
        };

        assert_eq!(
            numbering("bullet", 20.0),
            Some(NumberingRef {
                reference: NumberingReference::Bullet,
                level: 8
            })
        );
        assert_eq!(
            numbering("Number", -5.0),
            Some(NumberingRef {
                reference: NumberingReference::Number,
                level: 0
            })
        );
        assert_eq!(numbering("number", 2.9).map(|n| n.level), Some(2));
        assert_eq!(numbering("number", f64::NAN).map(|n| n.level), Some(0));
        assert_eq!(numbering("checklist", 1.0), None);
    }
}
