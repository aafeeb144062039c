//! Project directory validation
//!
//! A project directory must exist, be a directory and contain a go.mod.

use super::MANIFEST_FILENAME;
use crate::error::IoError;
use std::path::{Path, PathBuf};

/// Validate the target directory and return it
pub fn resolve_project_dir(path: &Path) -> Result<PathBuf, IoError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::directory_not_found(path)
        } else {
            IoError::generic(path, e)
        }
    })?;

    if !metadata.is_dir() {
        return Err(IoError::not_a_directory(path));
    }

    if !path.join(MANIFEST_FILENAME).is_file() {
        return Err(IoError::no_manifest(path));
    }

    Ok(path.to_path_buf())
}
