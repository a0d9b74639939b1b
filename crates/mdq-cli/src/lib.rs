//! CLI library components for the master-data cleaning pipeline.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
