//! Numeric normalization for census fields.
//!
//! Census sources carry thousands separators ("33,406,061") and sometimes
//! stray spacing; values are normalized here at extraction time rather
//! than at load.

use edustat_model::{QueryError, Result};

fn strip_separators(raw: &str) -> String {
    raw.trim()
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', "")
}

/// Strip thousands separators, then parse as a finite float.
pub fn normalize_numeric(raw: &str) -> Result<f64> {
    let cleaned = strip_separators(raw);
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QueryError::Format {
            value: raw.trim().to_string(),
        })
}

/// Strip thousands separators, then parse as an integer.
pub fn normalize_int(raw: &str) -> Result<i64> {
    let cleaned = strip_separators(raw);
    cleaned.parse::<i64>().map_err(|_| QueryError::Format {
        value: raw.trim().to_string(),
    })
}
