//! Data model for the EduStat query engine.
//!
//! Datasets are immutable in-memory tables loaded once at process start and
//! shared read-only across every query operation.

pub mod error;
pub mod schema;
pub mod table;
pub mod value;

pub use error::{QueryError, QueryErrorKind, Result};
pub use schema::{ColumnKind, ColumnSpec, Schema, catalog, census, cost_index, schemes};
pub use table::{Dataset, Row};
pub use value::Value;
