//! Unit and value normalizers
//!
//! Each function here is total: it either converts the value into the
//! output format's native unit or reports it as absent. Builders call them
//! attribute by attribute and simply omit absent properties.

use regex::Regex;
use std::sync::OnceLock;

/// Zero-width space, stripped from all run text
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Smallest and largest font size accepted, in points
const MIN_FONT_PT: f64 = 1.0;
const MAX_FONT_PT: f64 = 400.0;

/// Twips (twentieths of a point) per point
const TWIPS_PER_POINT: f64 = 20.0;

/// Normalize a hex color to six uppercase digits
///
/// Accepts 3 or 6 hex digits with an optional leading `#`, case-insensitive.
/// Three-digit colors are expanded by doubling each digit.
///
/// # Returns
/// * `Some(String)` - e.g. `"AABBCC"` for `"#abc"`
/// * `None` - The value is not a hex color
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let raw = value.trim();
    let raw = raw.strip_prefix('#').unwrap_or(raw);

    // Three or six hex digits
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    let hex_color = HEX_COLOR.get_or_init(|| {
        Regex::new(r"^(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern is valid")
    });
    if !hex_color.is_match(raw) {
        return None;
    }

    let expanded = if raw.len() == 3 {
        raw.chars().flat_map(|ch| [ch, ch]).collect::<String>()
    } else {
        raw.to_string()
    };
    Some(expanded.to_ascii_uppercase())
}

/// Round to the nearest integer, with halves rounding towards positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp a number into `[min, max]`; NaN becomes `min`
pub fn clamp_number(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Convert a font size in points to half-points, clamped to 1..=400 pt
pub fn to_half_points(size_pt: f64) -> Option<u32> {
    if size_pt.is_nan() {
        return None;
    }
    let clamped = clamp_number(size_pt, MIN_FONT_PT, MAX_FONT_PT);
    Some(round_half_up(clamped * 2.0) as u32)
}

/// Convert points to twips
pub fn to_twips(points: f64) -> Option<i32> {
    if !points.is_finite() {
        return None;
    }
    Some(round_half_up(points * TWIPS_PER_POINT) as i32)
}

/// Validate a footnote id: a finite, whole number greater than zero
pub fn footnote_id(raw: f64) -> Option<u32> {
    if raw.is_finite() && raw > 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
        Some(raw as u32)
    } else {
        None
    }
}

/// Strip zero-width spaces from run text
pub fn sanitize_text(raw: &str) -> String {
    raw.replace(ZERO_WIDTH_SPACE, "")
}

/// Whether run text has anything besides whitespace and zero-width spaces
pub fn has_visible_text(raw: &str) -> bool {
    !sanitize_text(raw).trim().is_empty()
}

/// A piece of run text after newline splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPiece<'a> {
    /// Non-empty text between newlines
    Text(&'a str),
    /// Line break standing in for a newline
    Break,
}

/// Split sanitized text on newlines
///
/// A break is placed between consecutive pieces (never before the first)
/// and empty pieces are dropped, so `"a\n\nb"` gives `a, break, break, b`.
pub fn split_text(text: &str) -> Vec<TextPiece<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    for (index, piece) in text.split('\n').enumerate() {
        if index > 0 {
            pieces.push(TextPiece::Break);
        }
        if !piece.is_empty() {
            pieces.push(TextPiece::Text(piece));
        }
    }
    pieces
}
