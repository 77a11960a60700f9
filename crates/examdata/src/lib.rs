//! Exam dataset downloader.
//!
//! [`run`] walks the [`Catalog`](examdata_fetch::Catalog) in a [`Config`],
//! downloads each file in turn and writes a human-readable transcript.

mod config;
mod error;
mod run;

pub use config::{BASE_URL, Config, DEST_DIR};
pub use error::RunError;
pub use run::{RunReport, run};
