use std::borrow::Cow;

use crate::error::{PipelineError, Result};

/// Canonical text form of a join key.
///
/// Source tables mix `"1"`, `" 1"`, `"01"` and `1.0` for the same id. Integral
/// numbers collapse to their decimal form, anything else is only trimmed.
pub fn normalize_key(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if is_canonical_integer(trimmed) {
        return Cow::Borrowed(trimmed);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 => {
            Cow::Owned(format!("{}", v as i64))
        }
        _ => Cow::Borrowed(trimmed),
    }
}

/// Equality after normalization of both sides.
pub fn keys_match(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

/// Parse a numeric id field, reporting the table and column on failure.
pub(crate) fn parse_id(table: &'static str, field: &'static str, raw: &str) -> Result<u32> {
    normalize_key(raw)
        .parse::<u32>()
        .map_err(|_| PipelineError::invalid(table, field, raw))
}

/// Parse an integer measurement field (stats, heights, percentages).
pub(crate) fn parse_int(table: &'static str, field: &'static str, raw: &str) -> Result<i64> {
    normalize_key(raw)
        .parse::<i64>()
        .map_err(|_| PipelineError::invalid(table, field, raw))
}

fn is_canonical_integer(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
