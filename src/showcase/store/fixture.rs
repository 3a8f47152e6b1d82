use super::{parse_catalog, CatalogSource};
use crate::error::Result;
use crate::model::Catalog;

const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

/// The catalog shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl CatalogSource for FixtureSource {
    fn load(&self) -> Result<Catalog> {
        parse_catalog(BUILTIN_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = FixtureSource.load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn builtin_catalog_has_name_service() {
        let catalog = FixtureSource.load().unwrap();
        let mns = catalog
            .projects()
            .iter()
            .find(|p| p.name == "Miden Name Service")
            .unwrap();
        assert!(mns.tags.iter().any(|t| t == "Naming"));
    }

    #[test]
    fn builtin_tags_are_unique_per_project() {
        let catalog = FixtureSource.load().unwrap();
        for project in catalog.projects() {
            let unique: HashSet<_> = project.tags.iter().collect();
            assert_eq!(unique.len(), project.tags.len(), "{}", project.name);
        }
    }
}
