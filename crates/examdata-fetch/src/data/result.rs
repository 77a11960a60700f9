use crate::error::FetchError;

/// Outcome of a single download attempt.
#[derive(Debug)]
pub enum DownloadResult {
    /// The body was written to the destination.
    Success { bytes: u64 },

    /// The file was not written. Missing files and transient failures both
    /// land here.
    Skipped(FetchError),
}

impl DownloadResult {
    pub fn is_success(&self) -> bool { matches!(self, DownloadResult::Success { .. }) }

    pub fn is_skipped(&self) -> bool { !self.is_success() }
}

impl From<crate::error::Result<u64>> for DownloadResult {
    fn from(result: crate::error::Result<u64>) -> Self {
        match result {
            Ok(bytes) => DownloadResult::Success { bytes },
            Err(e) => DownloadResult::Skipped(e),
        }
    }
}
