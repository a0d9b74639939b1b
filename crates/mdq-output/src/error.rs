//! Output error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing run outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    // === File system ===
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Formats ===
    #[error("failed to write CSV file {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("SQLite operation failed on {path}")]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
