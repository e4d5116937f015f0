//! Nearest-match mapping from arbitrary colors to the highlight palette
//!
//! Word only accepts a closed set of named highlight colors, so any RGB value
//! is snapped to the palette entry with the smallest squared Euclidean
//! distance. Ties go to the entry declared first in [`PALETTE`]; reordering
//! the table changes output.

use crate::normalize::normalize_hex_color;

/// Named highlight colors understood by the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Yellow,
    Green,
    Cyan,
    Magenta,
    Blue,
    Red,
    DarkYellow,
    DarkGreen,
    DarkCyan,
    DarkMagenta,
    DarkBlue,
    DarkRed,
    DarkGray,
    LightGray,
    Black,
    White,
}

impl HighlightColor {
    /// The `w:highlight` value for this color
    pub fn as_str(self) -> &'static str {
        match self {
            HighlightColor::Yellow => "yellow",
            HighlightColor::Green => "green",
            HighlightColor::Cyan => "cyan",
            HighlightColor::Magenta => "magenta",
            HighlightColor::Blue => "blue",
            HighlightColor::Red => "red",
            HighlightColor::DarkYellow => "darkYellow",
            HighlightColor::DarkGreen => "darkGreen",
            HighlightColor::DarkCyan => "darkCyan",
            HighlightColor::DarkMagenta => "darkMagenta",
            HighlightColor::DarkBlue => "darkBlue",
            HighlightColor::DarkRed => "darkRed",
            HighlightColor::DarkGray => "darkGray",
            HighlightColor::LightGray => "lightGray",
            HighlightColor::Black => "black",
            HighlightColor::White => "white",
        }
    }
}

/// An RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a hex color accepted by [`normalize_hex_color`]
    pub fn parse(hex: &str) -> Option<Self> {
        let normalized = normalize_hex_color(hex)?;
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&normalized[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Highlight palette in tie-break order
pub const PALETTE: [(HighlightColor, Rgb); 16] = [
    (HighlightColor::Yellow, rgb(0xFF, 0xFF, 0x00)),
    (HighlightColor::Green, rgb(0x00, 0xFF, 0x00)),
    (HighlightColor::Cyan, rgb(0x00, 0xFF, 0xFF)),
    (HighlightColor::Magenta, rgb(0xFF, 0x00, 0xFF)),
    (HighlightColor::Blue, rgb(0x00, 0x00, 0xFF)),
    (HighlightColor::Red, rgb(0xFF, 0x00, 0x00)),
    (HighlightColor::DarkYellow, rgb(0x80, 0x80, 0x00)),
    (HighlightColor::DarkGreen, rgb(0x00, 0x80, 0x00)),
    (HighlightColor::DarkCyan, rgb(0x00, 0x80, 0x80)),
    (HighlightColor::DarkMagenta, rgb(0x80, 0x00, 0x80)),
    (HighlightColor::DarkBlue, rgb(0x00, 0x00, 0x80)),
    (HighlightColor::DarkRed, rgb(0x80, 0x00, 0x00)),
    (HighlightColor::DarkGray, rgb(0x40, 0x40, 0x40)),
    (HighlightColor::LightGray, rgb(0xC0, 0xC0, 0xC0)),
    (HighlightColor::Black, rgb(0x00, 0x00, 0x00)),
    (HighlightColor::White, rgb(0xFF, 0xFF, 0xFF)),
];

/// Map a hex color to the nearest palette entry
///
/// # Returns
/// * `Some(HighlightColor)` - The closest named color
/// * `None` - The value is not a hex color
pub fn map_highlight_color(hex: &str) -> Option<HighlightColor> {
    let target = Rgb::parse(hex)?;
    // min_by_key keeps the first of equal minima
    PALETTE
        .iter()
        .min_by_key(|(_, candidate)| target.distance_squared(*candidate))
        .map(|(name, _)| *name)
}
