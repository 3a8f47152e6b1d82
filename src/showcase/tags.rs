//! Tag vocabulary and chips.
//!
//! The vocabulary is the set of distinct tag strings across a catalog, sorted by
//! ordinal string comparison. Deduplication is exact: `Naming` and `naming` are two
//! entries. Matching against the vocabulary happens in [`crate::filter`] and ignores
//! case, so either spelling selects the same projects.
//!
//! A [`TagChip`] is what a client renders for one vocabulary entry: the tag, whether
//! it is currently selected, and how many projects carry it.

use crate::filter::has_tag;
use crate::model::Project;
use serde::Serialize;
use std::collections::BTreeSet;

/// Returns the sorted, duplicate-free union of every project's tags.
pub fn extract_vocabulary(projects: &[Project]) -> Vec<String> {
    let unique: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();
    unique.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub name: String,
    pub selected: bool,
    /// Projects that satisfy this tag alone.
    pub count: usize,
}

/// Builds one chip per vocabulary entry.
///
/// `selected` reflects exact membership in the selection, the same test a toggle
/// uses. `count` follows the case-insensitive tag predicate.
pub fn chips(
    vocabulary: &[String],
    projects: &[Project],
    selected: &BTreeSet<String>,
) -> Vec<TagChip> {
    vocabulary
        .iter()
        .map(|tag| TagChip {
            name: tag.clone(),
            selected: selected.contains(tag),
            count: projects.iter().filter(|p| has_tag(p, tag)).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, tags: &[&str]) -> Project {
        Project::new(id, format!("P{}", id)).with_tags(tags.iter().copied())
    }

    #[test]
    fn empty_catalog_yields_empty_vocabulary() {
        assert!(extract_vocabulary(&[]).is_empty());
    }

    #[test]
    fn vocabulary_is_sorted_and_unique() {
        let projects = vec![
            project(1, &["Utility", "Naming"]),
            project(2, &["Naming", "Infrastructure"]),
            project(3, &[]),
        ];
        assert_eq!(
            extract_vocabulary(&projects),
            vec!["Infrastructure", "Naming", "Utility"]
        );
    }

    #[test]
    fn vocabulary_dedup_is_case_sensitive() {
        let projects = vec![project(1, &["naming"]), project(2, &["Naming"])];
        // Ordinal order puts upper-case first.
        assert_eq!(extract_vocabulary(&projects), vec!["Naming", "naming"]);
    }

    #[test]
    fn chips_carry_selection_and_counts() {
        let projects = vec![project(1, &["A", "B"]), project(2, &["a"]), project(3, &["B"])];
        let vocabulary = extract_vocabulary(&projects);
        let selected: BTreeSet<String> = ["B".to_string()].into_iter().collect();

        let chips = chips(&vocabulary, &projects, &selected);
        assert_eq!(
            chips,
            vec![
                TagChip { name: "A".into(), selected: false, count: 2 },
                TagChip { name: "B".into(), selected: true, count: 2 },
                TagChip { name: "a".into(), selected: false, count: 2 },
            ]
        );
    }
}
