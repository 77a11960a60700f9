//! Filesystem primitives for dataset downloads.
//!
//! - [`ensure_dir`] prepares the destination directory.
//! - [`StagedFile`] receives a body in chunks and moves it onto its target
//!   in one rename, so a destination is either the previous file or the
//!   complete new one.

mod dir;
mod error;
mod staged;

pub use dir::ensure_dir;
pub use error::{Error, Result};
pub use staged::StagedFile;
