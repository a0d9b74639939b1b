//! Validation of normalized master-data records.
//!
//! - **rules**: the six per-record checks
//! - **validator**: per-record outcomes and the valid/invalid partition
//! - **dedupe**: first-wins identifier deduplication of the valid set

pub mod dedupe;
pub mod rules;
pub mod validator;

pub use dedupe::{DedupOutcome, dedupe_by_id};
pub use rules::{is_valid_email, violates};
pub use validator::{partition_records, validate_record};
