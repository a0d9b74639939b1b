//! Record loading with required-column checks.

use std::path::Path;

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use mdq_model::{Field, REQUIRED_FIELDS, RawRecord};

use crate::csv::{normalize_header, read_csv_frame, read_csv_headers};
use crate::error::{IngestError, Result};
use crate::values::any_to_raw;

/// Raw records read from one input, in file order.
#[derive(Debug, Clone, Default)]
pub struct LoadedBatch {
    pub records: Vec<RawRecord>,
    /// Normalized column names as they appear in the input.
    pub columns: Vec<String>,
}

impl LoadedBatch {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Input columns that are not required fields.
    pub fn ignored_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| Field::from_column_name(name).is_none())
            .collect()
    }
}

/// Required column names absent from `columns`, in canonical order.
pub fn missing_required_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_FIELDS
        .into_iter()
        .map(Field::column_name)
        .filter(|name| !columns.iter().any(|column| column == name))
        .map(str::to_string)
        .collect()
}

/// Fails with [`IngestError::MissingColumns`] when any required column is absent.
pub fn check_required_columns(columns: &[String], source: &Path) -> Result<()> {
    let missing = missing_required_columns(columns);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns {
            path: source.to_path_buf(),
            columns: missing,
        })
    }
}

/// Loads the input file into raw records.
///
/// The header is checked before any data row is read, so a schema mismatch
/// aborts without touching the rest of the file.
pub fn load_records(path: &Path) -> Result<LoadedBatch> {
    let headers = read_csv_headers(path)?;
    check_required_columns(&headers, path)?;
    let df = read_csv_frame(path)?;
    let batch = records_from_frame(&df, path)?;
    debug!(
        path = %path.display(),
        rows = batch.row_count(),
        columns = batch.column_count(),
        "read input file"
    );
    Ok(batch)
}

/// Extracts raw records from an already loaded DataFrame.
pub fn records_from_frame(df: &DataFrame, source: &Path) -> Result<LoadedBatch> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name.as_str()))
        .collect();
    check_required_columns(&columns, source)?;

    let mut field_columns: Vec<(Field, &Column)> = Vec::with_capacity(REQUIRED_FIELDS.len());
    for field in REQUIRED_FIELDS {
        let column = columns
            .iter()
            .position(|name| name == field.column_name())
            .and_then(|idx| df.get_columns().get(idx))
            .ok_or_else(|| IngestError::MissingColumns {
                path: source.to_path_buf(),
                columns: vec![field.column_name().to_string()],
            })?;
        field_columns.push((field, column));
    }

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut record = RawRecord::new(idx + 1);
        for (field, column) in &field_columns {
            record.set(*field, any_to_raw(column.get(idx)?));
        }
        records.push(record);
    }

    Ok(LoadedBatch { records, columns })
}
