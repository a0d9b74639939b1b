//! Error types for master-data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input batch.
///
/// All of these abort the run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns are absent.
    #[error("missing required columns in {path}: {}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_missing_columns_display_lists_all() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("raw.csv"),
            columns: vec!["role".to_string(), "active".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns in raw.csv: role, active"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
