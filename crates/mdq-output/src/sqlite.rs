//! SQLite table writer.
//!
//! The target table is dropped and recreated on every run, then filled with
//! the valid set. All three steps run in one transaction, so a failed run
//! leaves the previous table in place.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, info};

use mdq_model::{DatabaseTarget, Record, TableName};

use crate::error::{OutputError, Result};
use crate::paths::ensure_parent_dir;

/// Column names and SQL types of the output table, in canonical order.
pub const TABLE_COLUMNS: [(&str, &str); 6] = [
    ("id", "TEXT"),
    ("name", "TEXT"),
    ("email", "TEXT"),
    ("role", "TEXT"),
    ("start_date", "TEXT"),
    ("active", "BOOLEAN"),
];

/// Replaces `table` in the database with `records`. Returns the row count.
pub fn write_table(target: &DatabaseTarget, table: &TableName, records: &[Record]) -> Result<usize> {
    let path = target.path();
    ensure_parent_dir(path)?;
    let mut conn = Connection::open(path).map_err(|source| sqlite_error(path, source))?;

    let tx = conn
        .transaction()
        .map_err(|source| sqlite_error(path, source))?;
    tx.execute_batch(&recreate_statements(table))
        .map_err(|source| sqlite_error(path, source))?;
    {
        let mut stmt = tx
            .prepare(&insert_statement(table))
            .map_err(|source| sqlite_error(path, source))?;
        for record in records {
            stmt.execute(params![
                record.id,
                record.name,
                record.email,
                record.role,
                record.start_date_text(),
                record.active,
            ])
            .map_err(|source| sqlite_error(path, source))?;
        }
    }
    tx.commit().map_err(|source| sqlite_error(path, source))?;

    info!(
        database = %path.display(),
        table = %table,
        rows = records.len(),
        "replaced table"
    );
    Ok(records.len())
}

fn recreate_statements(table: &TableName) -> String {
    let columns = TABLE_COLUMNS
        .iter()
        .map(|(name, sql_type)| format!("{name} {sql_type}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "DROP TABLE IF EXISTS \"{table}\";\nCREATE TABLE \"{table}\" ({columns});"
    );
    debug!(%sql, "recreating table");
    sql
}

fn insert_statement(table: &TableName) -> String {
    let names = TABLE_COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=TABLE_COLUMNS.len())
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO \"{table}\" ({names}) VALUES ({placeholders})")
}

fn sqlite_error(path: &Path, source: rusqlite::Error) -> OutputError {
    OutputError::Sqlite {
        path: path.to_path_buf(),
        source,
    }
}
