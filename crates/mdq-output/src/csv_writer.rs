//! CSV writers for the valid and rejected record sets.
//!
//! Both files start with a header row even when no record is written. Null
//! fields are empty cells, `active` is written as `true`/`false` and
//! `start_date` as `YYYY-MM-DD`.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use serde::Serialize;
use tracing::info;

use mdq_model::{Field, InvalidRecord, REQUIRED_FIELDS, Record};

use crate::error::{OutputError, Result};
use crate::paths::ensure_parent_dir;

/// Extra column in the rejects file holding the error descriptor.
pub const ERROR_COLUMN: &str = "error";

#[derive(Serialize)]
struct RecordRow<'a> {
    id: Option<&'a str>,
    name: Option<&'a str>,
    email: Option<&'a str>,
    role: Option<&'a str>,
    start_date: Option<String>,
    active: Option<bool>,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: record.id.as_deref(),
            name: record.name.as_deref(),
            email: record.email.as_deref(),
            role: record.role.as_deref(),
            start_date: record.start_date_text(),
            active: record.active,
        }
    }
}

#[derive(Serialize)]
struct RejectRow<'a> {
    id: Option<&'a str>,
    name: Option<&'a str>,
    email: Option<&'a str>,
    role: Option<&'a str>,
    start_date: Option<String>,
    active: Option<bool>,
    error: String,
}

impl<'a> From<&'a InvalidRecord> for RejectRow<'a> {
    fn from(invalid: &'a InvalidRecord) -> Self {
        let row = RecordRow::from(&invalid.record);
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            start_date: row.start_date,
            active: row.active,
            error: invalid.descriptor(),
        }
    }
}

/// Writes the valid set in canonical column order. Returns the row count.
pub fn write_valid_csv(path: &Path, records: &[Record]) -> Result<usize> {
    let mut writer = open_writer(path, &[])?;
    for record in records {
        writer
            .serialize(RecordRow::from(record))
            .map_err(|source| csv_error(path, source))?;
    }
    finish(writer, path)?;
    info!(path = %path.display(), rows = records.len(), "wrote valid records");
    Ok(records.len())
}

/// Writes the rejected set with an [`ERROR_COLUMN`] descriptor per row.
pub fn write_invalid_csv(path: &Path, invalid: &[InvalidRecord]) -> Result<usize> {
    let mut writer = open_writer(path, &[ERROR_COLUMN])?;
    for record in invalid {
        writer
            .serialize(RejectRow::from(record))
            .map_err(|source| csv_error(path, source))?;
    }
    finish(writer, path)?;
    info!(path = %path.display(), rows = invalid.len(), "wrote rejected records");
    Ok(invalid.len())
}

fn open_writer(path: &Path, extra_columns: &[&'static str]) -> Result<Writer<File>> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let header = REQUIRED_FIELDS
        .into_iter()
        .map(Field::column_name)
        .chain(extra_columns.iter().copied());
    writer
        .write_record(header)
        .map_err(|source| csv_error(path, source))?;
    Ok(writer)
}

fn finish(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|source| OutputError::Io {
        operation: "flush",
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> OutputError {
    OutputError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
