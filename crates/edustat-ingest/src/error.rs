//! Error types for dataset loading.
//!
//! Load errors are startup-fatal: a dataset that cannot be read or that is
//! structurally missing a required column aborts process start.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file not found or not readable.
    #[error("failed to read dataset {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A schema-required column is missing from the source entirely.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Source contains a header but no data rows.
    #[error("dataset is empty: {path}")]
    Empty { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_source() {
        let err = LoadError::MissingColumn {
            column: "fees".to_string(),
            path: PathBuf::from("data/catalog.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'fees' not found in data/catalog.csv"
        );
    }
}
