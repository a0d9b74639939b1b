//! Master-data ingestion.
//!
//! Reads a CSV batch into raw records, checking that every required column
//! (`id`, `name`, `email`, `role`, `start_date`, `active`) is present before
//! any row is loaded. Cell content is not inspected here.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mdq_ingest::load_records;
//!
//! let batch = load_records(Path::new("data/sample_raw.csv"))?;
//! println!("{} rows, {} columns", batch.row_count(), batch.column_count());
//! ```

mod csv;
mod error;
mod loader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{normalize_header, read_csv_frame, read_csv_headers};

// === Record Loading ===
pub use loader::{
    LoadedBatch, check_required_columns, load_records, missing_required_columns,
    records_from_frame,
};
pub use values::any_to_raw;
