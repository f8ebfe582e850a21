//! CSV dataset loading and normalization.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use edustat_model::{ColumnKind, Dataset, Row, Schema, Value};

use crate::error::{LoadError, Result};

/// Trims surrounding whitespace and a BOM, collapsing inner runs of
/// whitespace to single spaces. Post-trim names form the field contract.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Load one CSV source into a typed dataset.
///
/// Schema-declared columns must all be present in the source; a missing one
/// is a [`LoadError::MissingColumn`]. Int/Float columns are coerced row by
/// row and any row with a non-coercible or absent value in a declared
/// column is dropped entirely, never defaulted. Columns not declared in the
/// schema pass through as text.
pub fn load_dataset(path: &Path, schema: &Schema) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    for spec in &schema.columns {
        if !headers.iter().any(|header| *header == spec.name) {
            return Err(LoadError::MissingColumn {
                column: spec.name.clone(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut dataset = Dataset::new(schema.dataset.clone(), headers.clone());
    let mut records = 0usize;
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records += 1;
        match build_row(&headers, &record, schema) {
            Some(row) => dataset.push_row(row),
            None => dropped += 1,
        }
    }

    if records == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    if dropped > 0 {
        debug!(
            dataset = %dataset.name,
            dropped,
            kept = dataset.len(),
            "dropped rows failing schema coercion"
        );
    }
    Ok(dataset)
}

/// Builds one row, or None when a schema-declared column fails coercion.
fn build_row(headers: &[String], record: &StringRecord, schema: &Schema) -> Option<Row> {
    let mut row = Row::new();
    for (idx, header) in headers.iter().enumerate() {
        let raw = normalize_cell(record.get(idx).unwrap_or(""));
        let value = match schema.column(header) {
            Some(spec) => coerce(raw, spec.kind)?,
            None if raw.is_empty() => Value::Missing,
            None => Value::Text(raw.to_string()),
        };
        row.insert(header.clone(), value);
    }
    Some(row)
}

fn coerce(raw: &str, kind: ColumnKind) -> Option<Value> {
    match kind {
        ColumnKind::Text => {
            if raw.is_empty() {
                None
            } else {
                Some(Value::Text(raw.to_string()))
            }
        }
        ColumnKind::Int => raw.parse::<i64>().ok().map(Value::Int),
        ColumnKind::Float => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Value::Float),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("  fees "), "fees");
        assert_eq!(normalize_header("\u{feff}name"), "name");
        assert_eq!(normalize_header("Poverty  Rate (%)"), "Poverty Rate (%)");
    }

    #[test]
    fn coercion_rules() {
        assert_eq!(coerce("42", ColumnKind::Int), Some(Value::Int(42)));
        assert_eq!(coerce("4.5", ColumnKind::Float), Some(Value::Float(4.5)));
        assert_eq!(coerce("n/a", ColumnKind::Float), None);
        assert_eq!(coerce("", ColumnKind::Int), None);
        assert_eq!(coerce("inf", ColumnKind::Float), None);
        assert_eq!(coerce("", ColumnKind::Text), None);
    }
}
