//! Run building: source runs to output runs

use crate::highlight::map_highlight_color;
use crate::normalize::{
    footnote_id, normalize_hex_color, sanitize_text, split_text, to_half_points, TextPiece,
};
use crate::source_model::{Run, TextRun};
use crate::unified_document::{OutRun, RunStyle};

/// Upper bound on the explicit `breaks` count of a single run
pub const MAX_EXPLICIT_BREAKS: usize = 1000;

/// Build the output runs for a paragraph
///
/// Footnote references with invalid ids are dropped. Explicit `breaks` come
/// before the run's own text, and embedded newlines become line breaks.
/// The result may be empty.
pub fn build_runs(runs: &[Run]) -> Vec<OutRun> {
    let mut out = Vec::new();

    for run in runs {
        match run {
            Run::FootnoteRef { id: raw_id, .. } => match footnote_id(*raw_id) {
                Some(id) => out.push(OutRun::FootnoteReference(id)),
                None => log::debug!("Skipping footnote reference with invalid id {}", raw_id),
            },
            Run::Text(text_run) => push_text_run(&mut out, text_run),
        }
    }

    out
}

fn push_text_run(out: &mut Vec<OutRun>, text_run: &TextRun) {
    let style = build_style(text_run);

    if let Some(breaks) = text_run.breaks.filter(|b| *b > 0.0) {
        let count = breaks.floor().min(MAX_EXPLICIT_BREAKS as f64) as usize;
        if count == MAX_EXPLICIT_BREAKS {
            log::debug!("Capping explicit break count {} at {}", breaks, MAX_EXPLICIT_BREAKS);
        }
        out.extend(std::iter::repeat_n(OutRun::Break, count));
    }

    let text = sanitize_text(text_run.text.as_deref().unwrap_or_default());
    for piece in split_text(&text) {
        match piece {
            TextPiece::Break => out.push(OutRun::Break),
            TextPiece::Text(piece) => out.push(OutRun::Text {
                text: piece.to_string(),
                style: style.clone(),
            }),
        }
    }
}

/// Build character formatting from a source text run
pub fn build_style(text_run: &TextRun) -> RunStyle {
    RunStyle {
        bold: text_run.bold,
        italics: text_run.italic,
        underline: text_run.underline,
        strike: text_run.strike,
        subscript: text_run.subscript,
        superscript: text_run.superscript,
        color: text_run.color.as_deref().and_then(normalize_hex_color),
        highlight: text_run.highlight.as_deref().and_then(map_highlight_color),
        font: text_run
            .font
            .as_deref()
            .map(str::trim)
            .filter(|font| !font.is_empty())
            .map(str::to_string),
        size: text_run
            .size_pt
            .and_then(to_half_points)
            .filter(|size| *size > 0),
    }
}
