use std::path::{Path, PathBuf};

use examdata_fetch::Catalog;

pub const BASE_URL: &str = "https://raw.githubusercontent.com/YoungjinBD/data/main/exam/";
pub const DEST_DIR: &str = "./public/datasets";

/// Where datasets come from, where they go, and which sessions to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    dest_dir: PathBuf,
    catalog: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            dest_dir: PathBuf::from(DEST_DIR),
            catalog: Catalog::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn dest_dir(mut self, dest_dir: impl Into<PathBuf>) -> Self {
        self.dest_dir = dest_dir.into();
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn get_base_url(&self) -> &str { &self.base_url }

    pub fn get_dest_dir(&self) -> &Path { &self.dest_dir }

    pub fn get_catalog(&self) -> &Catalog { &self.catalog }
}
