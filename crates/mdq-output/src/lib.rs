//! Persistence of a cleaned batch.
//!
//! - **csv_writer**: valid and rejected records as CSV
//! - **sqlite**: valid records into a freshly recreated table
//! - **report**: the rendered Markdown report
//!
//! Every writer creates missing parent directories of its destination.

mod csv_writer;
mod error;
mod paths;
mod report;
mod sqlite;

pub use csv_writer::{ERROR_COLUMN, write_invalid_csv, write_valid_csv};
pub use error::{OutputError, Result};
pub use report::write_report;
pub use sqlite::{TABLE_COLUMNS, write_table};
