//! Error types for examdata-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("response body interrupted: {0}")]
    Stream(String),

    #[error(transparent)]
    Fs(#[from] examdata_fs::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
