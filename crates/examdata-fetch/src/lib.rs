//! Exam dataset naming and single-shot HTTP download.
//!
//! # Architecture
//!
//! - [`data`] - The file naming model and per-file outcomes
//! - [`effects`] - HTTP access behind [`HttpClient`] and the [`Fetcher`]
//!
//! A fetch is attempted exactly once. Every failure is folded into
//! [`DownloadResult::Skipped`] so callers never handle errors per file.

pub mod data;
pub mod effects;
mod error;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use data::{Catalog, DownloadResult, FileName, Variant};
pub use effects::{BoxStream, Fetcher, HttpClient};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
