//! CSV ingestion for the EduStat engine.
//!
//! Every dataset is loaded exactly once at process start. Loading validates
//! the declared schema, trims headers, coerces designated numeric columns,
//! and drops rows that fail coercion; the resulting datasets are immutable
//! for the life of the process.

pub mod context;
pub mod error;
pub mod loader;

pub use context::DataContext;
pub use error::{LoadError, Result};
pub use loader::load_dataset;
