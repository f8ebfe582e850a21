//! Canonical numeric snapshot of one state in one census dataset.

use serde::Serialize;

use edustat_engine::exact_match;
use edustat_model::{Dataset, QueryError, Result, Row, census};

use crate::numeric::{normalize_int, normalize_numeric};

/// Normalized demographic fields for one state in one year range. Field
/// names serialize under the census column contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DevelopmentSnapshot {
    #[serde(rename = "Population")]
    pub population: i64,
    #[serde(rename = "Poverty Rate (%)")]
    pub poverty_rate: f64,
    #[serde(rename = "Literacy Rate (%)")]
    pub literacy_rate: f64,
    #[serde(rename = "Average Income (INR)")]
    pub average_income: i64,
}

/// Locate `state` in `dataset` (case-insensitive exact match, first
/// occurrence wins) and normalize its numeric fields.
pub fn extract(state: &str, dataset: &Dataset) -> Result<DevelopmentSnapshot> {
    let row = exact_match(dataset, census::STATE, state)
        .ok_or_else(|| QueryError::not_found("state", state))?;
    Ok(DevelopmentSnapshot {
        population: normalize_int(field(row, census::POPULATION))?,
        poverty_rate: normalize_numeric(field(row, census::POVERTY_RATE))?,
        literacy_rate: normalize_numeric(field(row, census::LITERACY_RATE))?,
        average_income: normalize_int(field(row, census::AVERAGE_INCOME))?,
    })
}

fn field<'a>(row: &'a Row, name: &str) -> &'a str {
    row.text(name).unwrap_or("")
}
