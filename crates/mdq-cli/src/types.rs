use std::path::PathBuf;

use mdq_model::{DatabaseTarget, TableName};
use mdq_report::ErrorFrequency;

/// What one pipeline run produced.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Data rows read from the input.
    pub rows_read: usize,
    /// Records in the final valid set (after deduplication).
    pub valid_count: usize,
    pub invalid_count: usize,
    /// Valid records dropped as repeated identifiers.
    pub duplicates_dropped: usize,
    pub top_errors: Vec<ErrorFrequency>,
    pub database: DatabaseTarget,
    pub table: TableName,
    pub report_path: PathBuf,
    /// Rendered report document.
    pub report: String,
    /// True when no output was written.
    pub dry_run: bool,
}
