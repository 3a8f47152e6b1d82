//! # Catalog Sources
//!
//! The catalog is fixed for a session, but where it comes from is not. The
//! [`CatalogSource`] trait lets the application load it from different places
//! without the filter engine knowing.
//!
//! ## Implementations
//!
//! - [`fixture::FixtureSource`]: The built-in catalog, compiled into the binary
//! - [`fs::FileSource`]: A JSON file on disk (`showcase --catalog projects.json`)
//! - [`memory::MemorySource`]: An in-memory list for tests and embedding
//!
//! ## Catalog Format
//!
//! A JSON array of projects:
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "name": "Miden Name Service",
//!     "description": "Human-readable names for Miden accounts",
//!     "link": "https://…",
//!     "image": "mns.png",
//!     "tags": ["Naming", "Utility"]
//!   }
//! ]
//! ```
//!
//! No schema validation happens beyond JSON shape. Missing `image`, `link`,
//! `description` or `tags` fall back to empty values, and duplicate ids are logged
//! rather than rejected.

use crate::error::Result;
use crate::model::{Catalog, Project};

pub mod fixture;
pub mod fs;
pub mod memory;

/// Anything that can produce the session's catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;

    /// Human-readable origin, used in logs and `config` output.
    fn describe(&self) -> String;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self) -> Result<Catalog> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parses catalog JSON and reports anomalies that are tolerated.
pub(crate) fn parse_catalog(text: &str) -> Result<Catalog> {
    let projects: Vec<Project> = serde_json::from_str(text)?;
    Ok(into_catalog(projects))
}

pub(crate) fn into_catalog(projects: Vec<Project>) -> Catalog {
    let catalog = Catalog::new(projects);
    for id in catalog.duplicate_ids() {
        tracing::warn!(id, "duplicate project id in catalog");
    }
    tracing::debug!(
        projects = catalog.len(),
        tags = catalog.vocabulary().len(),
        "catalog loaded"
    );
    catalog
}
