//! CSV reading utilities.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_csv_frame, read_csv_headers};
