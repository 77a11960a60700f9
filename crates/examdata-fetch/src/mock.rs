//! In-memory [`HttpClient`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::effects::{BoxStream, HttpClient};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

#[derive(Debug, Clone)]
enum MockResponse {
    Body(Vec<Bytes>),
    Status(u16),
    Interrupted(Vec<Bytes>),
    Unreachable,
}

/// Serves canned responses keyed by URL. Unknown URLs answer 404.
///
/// Every requested URL is recorded and available through
/// [`MockClient::requests`].
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self { Self::default() }

    /// Respond to `url` with `body` in a single chunk.
    pub fn body(self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.chunks(url, vec![body.into()])
    }

    /// Respond to `url` with a body delivered in several chunks.
    pub fn chunks(mut self, url: impl Into<String>, chunks: Vec<Bytes>) -> Self {
        self.responses.insert(url.into(), MockResponse::Body(chunks));
        self
    }

    pub fn status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), MockResponse::Status(status));
        self
    }

    /// Send `chunks`, then fail the body stream.
    pub fn interrupted(mut self, url: impl Into<String>, chunks: Vec<Bytes>) -> Self {
        self.responses.insert(url.into(), MockResponse::Interrupted(chunks));
        self
    }

    /// Fail the request as if the host could not be reached.
    pub fn unreachable(mut self, url: impl Into<String>) -> Self {
        self.responses.insert(url.into(), MockResponse::Unreachable);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl HttpClient for MockClient {
    type Error = MockError;

    async fn stream(
        &self,
        url: &str,
    ) -> std::result::Result<BoxStream<'static, std::result::Result<Bytes, Self::Error>>, Self::Error>
    {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url).cloned() {
            Some(MockResponse::Body(chunks)) => {
                Ok(Box::pin(futures_util::stream::iter(
                    chunks.into_iter().map(Ok::<Bytes, MockError>),
                )))
            }
            Some(MockResponse::Interrupted(chunks)) => {
                let items = chunks
                    .into_iter()
                    .map(Ok::<Bytes, MockError>)
                    .chain(std::iter::once(Err(MockError("connection reset".to_string()))));
                Ok(Box::pin(futures_util::stream::iter(items)))
            }
            Some(MockResponse::Status(status)) => {
                Err(MockError(format!("HTTP status {status} for url ({url})")))
            }
            Some(MockResponse::Unreachable) => {
                Err(MockError(format!("error sending request for url ({url})")))
            }
            None => Err(MockError(format!("HTTP status 404 Not Found for url ({url})"))),
        }
    }
}
