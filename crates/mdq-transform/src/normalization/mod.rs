//! Normalization functions for raw master-data cells.
//!
//! - **strings**: trimming, empty-to-null, whitespace collapsing
//! - **boolean**: tri-state coercion of yes/no style flags
//! - **datetime**: permissive day-first date parsing

pub mod boolean;
pub mod datetime;
pub mod strings;

// Re-export commonly used items
pub use boolean::{FALSE_TOKENS, TRUE_TOKENS, parse_bool};
pub use datetime::{expand_two_digit_year, format_date, normalize_date, parse_date};
pub use strings::{collapse_whitespace_runs, normalize_id, normalize_name, normalize_text};
