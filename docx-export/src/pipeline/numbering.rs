//! Fixed list numbering schemes

use crate::unified_document::{
    Alignment, LevelFormat, NumberingLevel, NumberingReference, NumberingScheme,
};

/// Bullet glyphs, cycled by level
const BULLET_SYMBOLS: [&str; 3] = ["\u{2022}", "o", "\u{25AA}"];

/// Number of list levels (0..=8)
const LEVEL_COUNT: u8 = 9;

/// Left indent of level 0, in twips
const BASE_INDENT: i32 = 720;

/// Additional left indent per level, in twips
const INDENT_STEP: i32 = 360;

/// Hanging indent of every level, in twips
const HANGING_INDENT: i32 = 260;

/// Build the bullet and decimal schemes shared by all list paragraphs
pub fn build_numbering_schemes() -> Vec<NumberingScheme> {
    vec![
        NumberingScheme {
            reference: NumberingReference::Bullet,
            levels: (0..LEVEL_COUNT)
                .map(|level| {
                    numbering_level(
                        level,
                        LevelFormat::Bullet,
                        BULLET_SYMBOLS[usize::from(level) % BULLET_SYMBOLS.len()],
                    )
                })
                .collect(),
        },
        NumberingScheme {
            reference: NumberingReference::Number,
            levels: (0..LEVEL_COUNT)
                .map(|level| {
                    numbering_level(level, LevelFormat::Decimal, format!("%{}.", level + 1))
                })
                .collect(),
        },
    ]
}

fn numbering_level(level: u8, format: LevelFormat, text: impl Into<String>) -> NumberingLevel {
    NumberingLevel {
        level,
        format,
        text: text.into(),
        alignment: Alignment::Left,
        indent_left: BASE_INDENT + i32::from(level) * INDENT_STEP,
        hanging: HANGING_INDENT,
    }
}
