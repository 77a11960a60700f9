use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot prepare destination directory")]
    CreateDir(#[source] examdata_fs::Error),

    #[error("failed to write transcript")]
    Output(#[from] std::io::Error),
}
