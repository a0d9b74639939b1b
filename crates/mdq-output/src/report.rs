use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};
use crate::paths::ensure_parent_dir;

/// Writes the rendered report document, replacing any previous file.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|source| OutputError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
