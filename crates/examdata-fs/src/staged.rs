use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// A file being written next to its final destination.
///
/// The staging file is hidden (`.<name>.XXXXXX.part`) and lives in the same
/// directory as the target so that [`StagedFile::commit`] is a single rename.
/// Dropping an uncommitted `StagedFile` deletes the staging file and leaves
/// the target untouched.
#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
    target: PathBuf,
    bytes_written: u64,
}

impl StagedFile {
    /// Open a staging file for `target`. The parent directory must exist.
    pub fn create(target: impl AsRef<Path>) -> Result<Self> {
        let target = target.as_ref().to_path_buf();
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "download".to_string());

        let file = tempfile::Builder::new()
            .prefix(&format!(".{name}."))
            .suffix(".part")
            .tempfile_in(parent)
            .map_err(|e| Error::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            file,
            target,
            bytes_written: 0,
        })
    }

    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.file.write_all(chunk).map_err(|e| Error::Write {
            path: self.file.path().to_path_buf(),
            source: e,
        })?;
        self.bytes_written += chunk.len() as u64;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 { self.bytes_written }

    pub fn staging_path(&self) -> &Path { self.file.path() }

    pub fn target(&self) -> &Path { &self.target }

    /// Flush to disk and rename onto the target, replacing any existing file.
    ///
    /// Returns the number of bytes in the committed file.
    pub fn commit(mut self) -> Result<u64> {
        let staging = self.file.path().to_path_buf();
        self.file
            .flush()
            .and_then(|()| self.file.as_file().sync_all())
            .map_err(|e| Error::Write {
                path: staging,
                source: e,
            })?;

        let bytes = self.bytes_written;
        self.file.persist(&self.target).map_err(|e| Error::Commit {
            path: self.target.clone(),
            source: e.error,
        })?;
        Ok(bytes)
    }
}
