use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One record within a dataset: a mapping from field name to scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// The sentinel stand-in for a missing match. Preserves positional
    /// arity in fixed-slot results and serializes as `{}`.
    pub fn empty() -> Self {
        Self::new()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.cells.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.cells.get(field)
    }

    /// Text content of a field, if present and textual.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.cells.get(field).and_then(Value::as_str)
    }

    /// Numeric content of a field, if present and numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.cells.get(field).and_then(Value::as_f64)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        }
    }
}

/// An immutable named ordered sequence of rows sharing a schema.
///
/// Loaded once from a CSV source; never mutated afterwards. Query
/// operations borrow it and return new views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_is_the_sentinel() {
        let row = Row::empty();
        assert!(row.is_empty());
        assert_eq!(serde_json::to_string(&row).unwrap(), "{}");
    }

    #[test]
    fn row_typed_accessors() {
        let row: Row = [
            ("name", Value::from("IIT Delhi")),
            ("fees", Value::from(250000.0)),
            ("rank", Value::from(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(row.text("name"), Some("IIT Delhi"));
        assert_eq!(row.number("fees"), Some(250000.0));
        assert_eq!(row.number("rank"), Some(2.0));
        assert_eq!(row.text("fees"), None);
        assert!(row.get("missing").is_none());
    }
}
