//! Run configuration for the cleaning pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_INPUT: &str = "data/sample_raw.csv";
pub const DEFAULT_DATABASE: &str = "sqlite:///stammdaten.db";
pub const DEFAULT_TABLE: &str = "stammdaten_clean";
pub const DEFAULT_VALID_CSV: &str = "data/clean.csv";
pub const DEFAULT_INVALID_CSV: &str = "data/rejects.csv";
pub const DEFAULT_REPORT_MD: &str = "docs/report.md";

const SQLITE_URL_PREFIX: &str = "sqlite:///";

/// Errors raised while building run options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("table name is empty")]
    EmptyTableName,

    #[error("invalid table name '{name}': use ASCII letters, digits and '_' (not starting with a digit)")]
    InvalidTableName { name: String },

    #[error("database location is empty")]
    EmptyDatabase,

    #[error("unsupported database URL '{url}': only sqlite:/// URLs or plain paths are accepted")]
    UnsupportedDatabaseUrl { url: String },
}

/// A validated SQL table identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn parse(value: &str) -> Result<Self, OptionsError> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(OptionsError::EmptyTableName);
        };
        let valid = (first.is_ascii_alphabetic() || first == '_')
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if !valid {
            return Err(OptionsError::InvalidTableName {
                name: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location of the SQLite database file.
///
/// Accepts `sqlite:///relative/or/absolute.db` URLs as well as bare paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseTarget {
    path: PathBuf,
}

impl DatabaseTarget {
    pub fn parse(value: &str) -> Result<Self, OptionsError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OptionsError::EmptyDatabase);
        }
        let path = match trimmed.strip_prefix(SQLITE_URL_PREFIX) {
            Some("") => return Err(OptionsError::EmptyDatabase),
            Some(rest) => rest,
            None if trimmed.contains("://") => {
                return Err(OptionsError::UnsupportedDatabaseUrl {
                    url: trimmed.to_string(),
                });
            }
            None => trimmed,
        };
        Ok(Self {
            path: PathBuf::from(path),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub database: DatabaseTarget,
    pub table: TableName,
    pub valid_csv: PathBuf,
    pub invalid_csv: PathBuf,
    pub report_md: PathBuf,
    /// Validate and summarize without writing any output.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            database: DatabaseTarget {
                path: PathBuf::from("stammdaten.db"),
            },
            table: TableName(DEFAULT_TABLE.to_string()),
            valid_csv: PathBuf::from(DEFAULT_VALID_CSV),
            invalid_csv: PathBuf::from(DEFAULT_INVALID_CSV),
            report_md: PathBuf::from(DEFAULT_REPORT_MD),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_accepts_identifiers() {
        assert_eq!(TableName::parse(" staff_2024 ").unwrap().as_str(), "staff_2024");
        assert_eq!(TableName::parse("_tmp").unwrap().as_str(), "_tmp");
    }

    #[test]
    fn table_name_rejects_sql() {
        assert_eq!(TableName::parse(""), Err(OptionsError::EmptyTableName));
        assert!(matches!(
            TableName::parse("x; DROP TABLE y"),
            Err(OptionsError::InvalidTableName { .. })
        ));
        assert!(TableName::parse("1abc").is_err());
        assert!(TableName::parse("a-b").is_err());
    }

    #[test]
    fn database_target_strips_sqlite_prefix() {
        let target = DatabaseTarget::parse("sqlite:///stammdaten.db").unwrap();
        assert_eq!(target.path(), Path::new("stammdaten.db"));
        let absolute = DatabaseTarget::parse("sqlite:////var/data/x.db").unwrap();
        assert_eq!(absolute.path(), Path::new("/var/data/x.db"));
        let bare = DatabaseTarget::parse("out/x.db").unwrap();
        assert_eq!(bare.path(), Path::new("out/x.db"));
    }

    #[test]
    fn database_target_rejects_other_schemes() {
        assert!(matches!(
            DatabaseTarget::parse("postgres://localhost/db"),
            Err(OptionsError::UnsupportedDatabaseUrl { .. })
        ));
        assert_eq!(DatabaseTarget::parse("sqlite:///"), Err(OptionsError::EmptyDatabase));
        assert_eq!(DatabaseTarget::parse("  "), Err(OptionsError::EmptyDatabase));
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = RunOptions::default();
        assert_eq!(options.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(options.database, DatabaseTarget::parse(DEFAULT_DATABASE).unwrap());
        assert_eq!(options.table.as_str(), DEFAULT_TABLE);
        assert!(!options.dry_run);
    }
}
