//! Data model shared by the master-data quality pipeline.
//!
//! - **record**: raw cells as loaded from the input, and the normalized record
//! - **rule**: the fixed set of validation rules
//! - **outcome**: per-record validation outcomes and the valid/invalid partition
//! - **options**: run configuration (paths, database target, table name)

pub mod options;
pub mod outcome;
pub mod record;
pub mod rule;

pub use options::{
    DEFAULT_DATABASE, DEFAULT_INPUT, DEFAULT_INVALID_CSV, DEFAULT_REPORT_MD, DEFAULT_TABLE,
    DEFAULT_VALID_CSV, DatabaseTarget, OptionsError, RunOptions, TableName,
};
pub use outcome::{DESCRIPTOR_SEPARATOR, InvalidRecord, Partition, ValidationOutcome};
pub use record::{DATE_FORMAT, Field, REQUIRED_FIELDS, RawRecord, RawValue, Record};
pub use rule::Rule;
