//! Query operations over immutable in-memory datasets.
//!
//! Every operation is a synchronous pure read: datasets are borrowed,
//! never mutated, and results are new views. Filtering and lookup are
//! linear scans; sorting is O(n log n); grouping is a single pass with a
//! hash-keyed accumulator.

pub mod aggregate;
pub mod filter;
pub mod lookup;
pub mod schemes;
pub mod text;

pub use aggregate::{GroupMean, mean_by_group};
pub use filter::{CatalogFilter, find};
pub use lookup::{compare_two, exact_match, unique_values};
pub use schemes::eligible_schemes;
pub use text::eq_fold;
