//! Footnote records

use super::lenient;
use serde_json::Value;

/// A footnote body supplied alongside the sections
#[derive(Debug, Clone, PartialEq)]
pub struct FootnoteRecord {
    /// Numerically coerced id; NaN when it had no numeric reading
    pub id: f64,

    /// Raw multi-line text
    pub text: String,
}

impl FootnoteRecord {
    /// Create a footnote record
    pub fn new(id: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl From<&Value> for FootnoteRecord {
    fn from(value: &Value) -> Self {
        Self {
            id: lenient::coerce_number(&value["id"]),
            text: lenient::coerce_string(&value["text"]),
        }
    }
}
