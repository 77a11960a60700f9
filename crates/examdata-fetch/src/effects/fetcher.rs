use std::path::{Path, PathBuf};

use examdata_fs::StagedFile;
use futures_util::StreamExt;

use crate::data::{DownloadResult, FileName};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Downloads dataset files from a base URL into a destination directory.
pub struct Fetcher<C: HttpClient> {
    client: C,
    base_url: String,
    dest_dir: PathBuf,
}

impl<C: HttpClient> Fetcher<C> {
    /// `base_url` is joined to file names by plain concatenation, so it
    /// should end with `/`.
    pub fn new(client: C, base_url: impl Into<String>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            dest_dir: dest_dir.into(),
        }
    }

    pub fn client(&self) -> &C { &self.client }

    pub fn dest_dir(&self) -> &Path { &self.dest_dir }

    pub fn url_for(&self, name: &FileName) -> String { format!("{}{}", self.base_url, name) }

    pub fn destination_for(&self, name: &FileName) -> PathBuf { self.dest_dir.join(name.to_string()) }

    /// Download one dataset file, overwriting any previous copy.
    ///
    /// Failures are returned as [`DownloadResult::Skipped`]. A failed
    /// attempt never creates or modifies the destination file.
    pub async fn fetch_one(&self, name: &FileName) -> DownloadResult {
        let url = self.url_for(name);
        let destination = self.destination_for(name);

        let result = self.fetch(&url, &destination).await;
        match &result {
            Ok(bytes) => tracing::debug!(%name, bytes, "downloaded"),
            Err(e) => tracing::warn!(%name, %url, error = %e, "skipping"),
        }
        result.into()
    }

    /// Stream `url` into `destination`. Returns the number of bytes written.
    ///
    /// The body goes to a staging file beside `destination` and is renamed
    /// into place only once the stream has ended cleanly.
    pub async fn fetch(&self, url: &str, destination: &Path) -> Result<u64> {
        tracing::debug!(url, destination = %destination.display(), "requesting");

        let mut stream = self
            .client
            .stream(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let mut staged = StagedFile::create(destination)?;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Stream(e.to_string()))?;
            staged.write_chunk(&chunk)?;
        }

        Ok(staged.commit()?)
    }
}
