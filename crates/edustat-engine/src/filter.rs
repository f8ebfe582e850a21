//! Institution catalog filtering.

use std::cmp::Ordering;

use tracing::debug;

use edustat_model::{Dataset, Row, catalog};

use crate::text::eq_fold;

/// Conjunction of optional predicates over the institution catalog.
/// An omitted criterion matches all rows; an omitted budget is unbounded.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Exact, case-insensitive match on `state`.
    pub region: Option<String>,
    /// Exact, case-insensitive match on `stream`.
    pub category: Option<String>,
    /// Inclusive upper bound on `fees`.
    pub max_budget: Option<f64>,
}

impl CatalogFilter {
    fn matches(&self, row: &Row) -> bool {
        if let Some(region) = &self.region
            && !row.text(catalog::STATE).is_some_and(|v| eq_fold(v, region))
        {
            return false;
        }
        if let Some(category) = &self.category
            && !row
                .text(catalog::STREAM)
                .is_some_and(|v| eq_fold(v, category))
        {
            return false;
        }
        if let Some(max_budget) = self.max_budget
            && !row.number(catalog::FEES).is_some_and(|fees| fees <= max_budget)
        {
            return false;
        }
        true
    }
}

/// Filter the catalog and return a view sorted descending by student
/// rating. The sort is stable: ties keep original dataset order. The
/// source dataset is never mutated.
pub fn find<'a>(dataset: &'a Dataset, filter: &CatalogFilter) -> Vec<&'a Row> {
    let mut matched: Vec<&Row> = dataset.rows().filter(|row| filter.matches(row)).collect();
    matched.sort_by(|a, b| {
        let left = a.number(catalog::STUDENT_RATING);
        let right = b.number(catalog::STUDENT_RATING);
        right.partial_cmp(&left).unwrap_or(Ordering::Equal)
    });
    debug!(
        dataset = %dataset.name,
        matched = matched.len(),
        "catalog filter evaluated"
    );
    matched
}
