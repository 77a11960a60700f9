use std::path::Path;

use crate::{Error, Result};

/// Create `path` and any missing parents.
///
/// Succeeds without touching anything when the directory already exists.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}
