//! Cross-range development comparison.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use edustat_model::{QueryError, Result};

use crate::delta::{SnapshotChange, compute_change};
use crate::snapshot::{DevelopmentSnapshot, extract};
use crate::suggest::suggestions_for;
use crate::year_range::CensusSeries;

/// One state's movement between the two requested ranges.
#[derive(Debug, Clone, Serialize)]
pub struct StateComparison {
    pub from: DevelopmentSnapshot,
    pub to: DevelopmentSnapshot,
    pub change: SnapshotChange,
}

/// Result of comparing two states across two year ranges, keyed by state
/// name, with one combined suggestion string.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    #[serde(flatten)]
    pub states: BTreeMap<String, StateComparison>,
    pub suggestion: String,
}

/// Compare two states between the ranges backing `year_from` and
/// `year_to`.
///
/// All-or-nothing: equal years are a validation error, a year outside
/// every range fails naming both years, and a state missing from either
/// backing dataset aborts the whole call. No partial result is returned.
pub fn compare(
    series: &CensusSeries<'_>,
    state1: &str,
    state2: &str,
    year_from: i32,
    year_to: i32,
) -> Result<ComparisonResult> {
    if year_from == year_to {
        return Err(QueryError::SameYearRange);
    }
    let (dataset_from, dataset_to) = match (series.resolve(year_from), series.resolve(year_to)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Err(QueryError::YearsUnavailable { year_from, year_to });
        }
    };
    debug!(
        from = %dataset_from.name,
        to = %dataset_to.name,
        state1,
        state2,
        "comparing development snapshots"
    );

    let state1_from = extract(state1, dataset_from)?;
    let state1_to = extract(state1, dataset_to)?;
    let state2_from = extract(state2, dataset_from)?;
    let state2_to = extract(state2, dataset_to)?;

    let change1 = compute_change(&state1_to, &state1_from);
    let change2 = compute_change(&state2_to, &state2_from);

    let suggestion = format!(
        "{}{}",
        suggestions_for(state1, &change1),
        suggestions_for(state2, &change2)
    )
    .trim()
    .to_string();

    let mut states = BTreeMap::new();
    states.insert(
        state1.to_string(),
        StateComparison {
            from: state1_from,
            to: state1_to,
            change: change1,
        },
    );
    states.insert(
        state2.to_string(),
        StateComparison {
            from: state2_from,
            to: state2_to,
            change: change2,
        },
    );

    Ok(ComparisonResult { states, suggestion })
}
