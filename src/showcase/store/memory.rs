use super::{into_catalog, CatalogSource};
use crate::error::Result;
use crate::model::{Catalog, Project};

/// In-memory catalog, for tests and for embedding the engine in other programs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    projects: Vec<Project>,
}

impl MemorySource {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

impl CatalogSource for MemorySource {
    fn load(&self) -> Result<Catalog> {
        Ok(into_catalog(self.projects.clone()))
    }

    fn describe(&self) -> String {
        format!("in-memory ({} projects)", self.projects.len())
    }
}
