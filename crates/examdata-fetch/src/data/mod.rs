//! Data types for dataset fetching.
//!
//! Everything here is pure: building names and describing outcomes
//! performs no I/O.

pub mod name;
pub mod result;

pub use name::{Catalog, FileName, Variant};
pub use result::DownloadResult;
