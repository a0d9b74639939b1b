//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mdq_model::{
    DEFAULT_DATABASE, DEFAULT_INPUT, DEFAULT_INVALID_CSV, DEFAULT_REPORT_MD, DEFAULT_TABLE,
    DEFAULT_VALID_CSV, DatabaseTarget, OptionsError, RunOptions, TableName,
};

#[derive(Parser)]
#[command(
    name = "mdq",
    version,
    about = "Clean, validate and deduplicate a master-data CSV export",
    long_about = "Clean, validate and deduplicate a master-data CSV export.\n\n\
                  Writes the valid records to CSV and a SQLite table, the rejected\n\
                  records with their error descriptors to CSV, and a Markdown report."
)]
pub struct Cli {
    /// Input CSV file with id, name, email, role, start_date and active columns.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Target database as a sqlite:/// URL or a plain file path.
    #[arg(long = "db", value_name = "URL|PATH", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Table replaced with the valid records.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Destination of the valid records.
    #[arg(long = "valid-csv", value_name = "PATH", default_value = DEFAULT_VALID_CSV)]
    pub valid_csv: PathBuf,

    /// Destination of the rejected records.
    #[arg(long = "invalid-csv", value_name = "PATH", default_value = DEFAULT_INVALID_CSV)]
    pub invalid_csv: PathBuf,

    /// Destination of the Markdown report.
    #[arg(long = "report-md", value_name = "PATH", default_value = DEFAULT_REPORT_MD)]
    pub report_md: PathBuf,

    /// Validate and report counts without writing any output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (names, e-mail addresses) in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// Validates the arguments into run options. Runs before any file is read.
    pub fn run_options(&self) -> Result<RunOptions, OptionsError> {
        Ok(RunOptions {
            input: self.input.clone(),
            database: DatabaseTarget::parse(&self.database)?,
            table: TableName::parse(&self.table)?,
            valid_csv: self.valid_csv.clone(),
            invalid_csv: self.invalid_csv.clone(),
            report_md: self.report_md.clone(),
            dry_run: self.dry_run,
        })
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_run_options_default() {
        let cli = Cli::parse_from(["mdq"]);
        assert_eq!(cli.run_options().unwrap(), RunOptions::default());
    }

    #[test]
    fn explicit_paths_and_bare_database_path() {
        let cli = Cli::parse_from([
            "mdq",
            "--input",
            "in.csv",
            "--db",
            "out/people.db",
            "--table",
            "people",
            "--dry-run",
        ]);
        let options = cli.run_options().unwrap();
        assert_eq!(options.input, PathBuf::from("in.csv"));
        assert_eq!(options.database.path(), PathBuf::from("out/people.db"));
        assert_eq!(options.table.as_str(), "people");
        assert!(options.dry_run);
    }

    #[test]
    fn bad_table_name_is_rejected() {
        let cli = Cli::parse_from(["mdq", "--table", "drop table;"]);
        assert!(matches!(
            cli.run_options(),
            Err(OptionsError::InvalidTableName { .. })
        ));
    }
}
