//! I/O for dataset fetching: the HTTP seam and the fetcher that writes to
//! disk.

mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
