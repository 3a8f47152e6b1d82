use super::{parse_catalog, CatalogSource};
use crate::error::Result;
use crate::model::Catalog;
use std::fs;
use std::path::PathBuf;

/// A catalog read from a JSON file.
///
/// The file is read on every [`load`](CatalogSource::load); callers load once per
/// session.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!(path = %self.path.display(), "reading catalog file");
        let content = fs::read_to_string(&self.path)?;
        parse_catalog(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
