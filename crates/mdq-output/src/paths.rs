use std::fs;
use std::path::Path;

use crate::error::{OutputError, Result};

/// Creates the parent directory of `path` when it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
