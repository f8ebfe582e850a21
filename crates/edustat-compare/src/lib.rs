//! Cross-time-range development comparison.
//!
//! Three fixed census snapshots back three disjoint inclusive year ranges.
//! A comparison resolves two years to their backing datasets, extracts one
//! canonical numeric snapshot per state per range, computes signed
//! field-wise deltas, and annotates the result with heuristic suggestions
//! derived from delta sign patterns.

pub mod compare;
pub mod delta;
pub mod numeric;
pub mod snapshot;
pub mod suggest;
pub mod year_range;

pub use compare::{ComparisonResult, StateComparison, compare};
pub use delta::{Direction, FieldChange, SnapshotChange, compute_change};
pub use numeric::{normalize_int, normalize_numeric};
pub use snapshot::{DevelopmentSnapshot, extract};
pub use suggest::suggestions_for;
pub use year_range::{CensusSeries, YearRange};
