use crate::tags::extract_vocabulary;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry of the directory.
///
/// Only `id` and `name` are required when deserializing; a missing image, link or
/// tag list is tolerated and left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            link: String::new(),
            image: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The ordered, read-only list of projects for a session.
///
/// The tag vocabulary is derived lazily on first access and cached; the project
/// list cannot change afterwards, so the cache never goes stale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    vocabulary: OnceCell<Vec<String>>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            vocabulary: OnceCell::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First project carrying `id`, in catalog order.
    pub fn get(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Sorted, duplicate-free union of every project's tags.
    pub fn vocabulary(&self) -> &[String] {
        self.vocabulary
            .get_or_init(|| extract_vocabulary(&self.projects))
    }

    /// Ids that appear more than once, in order of their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .filter(|p| !seen.insert(p.id))
            .map(|p| p.id)
            .collect()
    }
}

impl From<Vec<Project>> for Catalog {
    fn from(projects: Vec<Project>) -> Self {
        Self::new(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"id": 7, "name": "Bare"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project, Project::new(7, "Bare"));
        assert!(project.image.is_empty());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![Project::new(1, "A"), Project::new(2, "B")]);
        assert_eq!(catalog.get(2).map(|p| p.name.as_str()), Some("B"));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn vocabulary_is_computed_once() {
        let catalog = Catalog::new(vec![Project::new(1, "A").with_tags(["Wallet", "DeFi"])]);
        let first = catalog.vocabulary().as_ptr();
        let second = catalog.vocabulary().as_ptr();
        assert_eq!(first, second);
        assert_eq!(catalog.vocabulary(), ["DeFi", "Wallet"]);
    }

    #[test]
    fn reports_duplicate_ids() {
        let catalog = Catalog::new(vec![
            Project::new(1, "A"),
            Project::new(2, "B"),
            Project::new(1, "C"),
        ]);
        assert_eq!(catalog.duplicate_ids(), vec![1]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.vocabulary().is_empty());
    }
}
