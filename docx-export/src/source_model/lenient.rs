//! Loose accessors over JSON values
//!
//! The producing application is trusted as the source of truth, so fields of
//! the wrong shape are read as "absent" rather than rejected. These helpers
//! mirror the coercions the producer relies on.

use serde_json::Value;

/// Truthiness of a value (`false`, `0`, `""`, and `null` are falsy)
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A JSON number, or `None` for any other shape
pub(crate) fn number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Numeric coercion: numbers as-is, numeric strings parsed, booleans as 0/1
///
/// Returns NaN when the value has no numeric reading. Strings follow
/// JavaScript's `Number()`: `Infinity` is the only spelling of infinity,
/// and `0x`/`0o`/`0b` prefixes select a radix.
pub(crate) fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                parse_number(trimmed)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_number(s: &str) -> f64 {
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|prefix| s.strip_prefix(prefix)) {
            if digits.starts_with('+') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    // Rust also reads "inf", "infinity" and "nan" in any case
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// A JSON string, or `None` for any other shape
pub(crate) fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// String coercion for scalar values; `null`, `false` and containers become ""
pub(crate) fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Elements of a JSON array, or an empty slice for any other shape
pub(crate) fn array(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(3)));
        assert!(truthy(&json!("x")));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(4)), 4.0);
        assert_eq!(coerce_number(&json!(" 12 ")), 12.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&Value::Null), 0.0);
        assert!(coerce_number(&json!("abc")).is_nan());
        assert!(coerce_number(&json!({})).is_nan());
    }

    #[test]
    fn test_coerce_number_string_spellings() {
        assert_eq!(coerce_number(&json!("Infinity")), f64::INFINITY);
        assert_eq!(coerce_number(&json!("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(coerce_number(&json!("1e999")), f64::INFINITY);
        assert_eq!(coerce_number(&json!("0x1F")), 31.0);
        assert_eq!(coerce_number(&json!("0b101")), 5.0);
        assert_eq!(coerce_number(&json!("-2.5")), -2.5);
        assert!(coerce_number(&json!("inf")).is_nan());
        assert!(coerce_number(&json!("infinity")).is_nan());
        assert!(coerce_number(&json!("NaN")).is_nan());
        assert!(coerce_number(&json!("-0x10")).is_nan());
        assert!(coerce_number(&json!("0x")).is_nan());
    }

    #[test]
    fn test_array_of_non_array_is_empty() {
        assert!(array(&json!("nope")).is_empty());
        assert_eq!(array(&json!([1, 2])).len(), 2);
    }
}
