use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} exists and is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move staged file into {path}")]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Error::CreateDir { path, .. }
            | Error::NotADirectory { path }
            | Error::Write { path, .. }
            | Error::Commit { path, .. } => path,
        }
    }
}
