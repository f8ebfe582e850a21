//! Query error taxonomy.
//!
//! Every per-query failure is a typed, recoverable value returned to the
//! boundary layer; load-time failures live in the ingest crate and abort
//! startup instead.

use serde::Serialize;
use thiserror::Error;

/// Errors produced by query operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// No row matches the requested key.
    #[error("no data found for {field}: {key}")]
    NotFound { field: String, key: String },

    /// One of the requested years has no backing census dataset.
    #[error("data not available for selected years: {year_from}, {year_to}")]
    YearsUnavailable { year_from: i32, year_to: i32 },

    /// The requested year range spans no change.
    #[error("no change in year range: select different years")]
    SameYearRange,

    /// A numeric string failed normalization.
    #[error("invalid numeric value: {value}")]
    Format { value: String },
}

/// Coarse category used by the boundary layer to map errors onto status
/// semantics ("not found" vs "bad request").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryErrorKind {
    NotFound,
    Validation,
    Format,
}

impl QueryError {
    pub fn not_found(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            field: field.into(),
            key: key.into(),
        }
    }

    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::NotFound { .. } | QueryError::YearsUnavailable { .. } => {
                QueryErrorKind::NotFound
            }
            QueryError::SameYearRange => QueryErrorKind::Validation,
            QueryError::Format { .. } => QueryErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
