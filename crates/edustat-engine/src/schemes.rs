//! Government scheme eligibility filtering.

use std::collections::BTreeSet;

use tracing::debug;

use edustat_model::{Dataset, Row, Value, schemes};

/// Schemes a person qualifies for: `state` and `sector` match exactly
/// (case-sensitive) and `min_age <= age <= max_age`, both bounds
/// inclusive.
///
/// Results are projected to the descriptive fields and de-duplicated on
/// that projection, first occurrence preserved.
pub fn eligible_schemes(dataset: &Dataset, state: &str, sector: &str, age: i64) -> Vec<Row> {
    let mut seen = BTreeSet::new();
    let mut results = Vec::new();
    for row in dataset.rows() {
        if row.text(schemes::STATE) != Some(state) || row.text(schemes::SECTOR) != Some(sector) {
            continue;
        }
        let in_range = matches!(
            (
                row.get(schemes::MIN_AGE).and_then(Value::as_i64),
                row.get(schemes::MAX_AGE).and_then(Value::as_i64),
            ),
            (Some(min_age), Some(max_age)) if min_age <= age && age <= max_age
        );
        if !in_range {
            continue;
        }

        let projected = project(row);
        let mut composite = String::new();
        for (pos, field) in schemes::PROJECTION.iter().enumerate() {
            if pos > 0 {
                composite.push('|');
            }
            if let Some(value) = projected.get(field) {
                composite.push_str(&value.render());
            }
        }
        if seen.insert(composite) {
            results.push(projected);
        }
    }
    debug!(
        dataset = %dataset.name,
        matched = results.len(),
        "eligibility filter evaluated"
    );
    results
}

fn project(row: &Row) -> Row {
    schemes::PROJECTION
        .iter()
        .map(|field| {
            (
                (*field).to_string(),
                row.get(field).cloned().unwrap_or(Value::Missing),
            )
        })
        .collect()
}
