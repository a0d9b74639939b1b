//! Run report generation.
//!
//! - **frequency**: ranks violated rules across the invalid set
//! - **markdown**: renders the run report document

mod frequency;
mod markdown;

pub use frequency::{ErrorFrequency, TOP_ERROR_LIMIT, top_error_frequencies};
pub use markdown::{NO_ERRORS_PLACEHOLDER, render_report};
