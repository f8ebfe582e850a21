//! Grouped aggregation.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use edustat_model::Dataset;

/// Arithmetic mean of one numeric field within one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: String,
    pub mean: f64,
}

/// Per-group arithmetic mean of `value_field`, keyed by `group_field`,
/// sorted descending by mean.
///
/// Only rows with a present group and a present, numeric value contribute.
/// A group with zero contributing rows is omitted from the output, never
/// reported as zero. Equal means tie-break by group name ascending.
pub fn mean_by_group(dataset: &Dataset, group_field: &str, value_field: &str) -> Vec<GroupMean> {
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for row in dataset.rows() {
        let Some(group) = row.text(group_field) else {
            continue;
        };
        let Some(value) = row.number(value_field) else {
            continue;
        };
        let entry = sums.entry(group.to_string()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut means: Vec<GroupMean> = sums
        .into_iter()
        .map(|(group, (sum, count))| GroupMean {
            group,
            mean: sum / count as f64,
        })
        .collect();
    means.sort_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| a.group.cmp(&b.group))
    });
    debug!(
        dataset = %dataset.name,
        groups = means.len(),
        group_field,
        value_field,
        "grouped mean computed"
    );
    means
}
