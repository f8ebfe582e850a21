//! Exact-match row lookup.

use std::collections::HashSet;

use edustat_model::{Dataset, Row};

use crate::text::eq_fold;

/// Case-insensitive exact match on `key_field`. When multiple rows match,
/// the first occurrence in dataset order wins.
pub fn exact_match<'a>(dataset: &'a Dataset, key_field: &str, key: &str) -> Option<&'a Row> {
    dataset
        .rows()
        .find(|row| row.text(key_field).is_some_and(|value| eq_fold(value, key)))
}

/// Resolve two keys side by side.
///
/// The result is positionally aligned to (`key1`, `key2`); a slot with no
/// match holds the empty-row sentinel. Callers always receive exactly two
/// slots regardless of how many keys matched.
pub fn compare_two(dataset: &Dataset, key_field: &str, key1: &str, key2: &str) -> [Row; 2] {
    [
        exact_match(dataset, key_field, key1)
            .cloned()
            .unwrap_or_else(Row::empty),
        exact_match(dataset, key_field, key2)
            .cloned()
            .unwrap_or_else(Row::empty),
    ]
}

/// Distinct non-missing values of `field` in first-occurrence order.
pub fn unique_values(dataset: &Dataset, field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in dataset.rows() {
        let Some(value) = row.text(field) else {
            continue;
        };
        if seen.insert(value.to_string()) {
            values.push(value.to_string());
        }
    }
    values
}
