//! Search and tag predicates, and the visible-set derivation.
//!
//! Both predicates are vacuously true when their criterion is empty: an empty search
//! term and an empty tag selection each mean "everything". Keep it that way; an empty
//! selection is not "no tags allowed".

use crate::model::Project;
use crate::session::FilterState;
use std::collections::BTreeSet;

/// Case-insensitive substring search over name, description and tags.
///
/// The term is used verbatim: surrounding whitespace is part of what must match.
pub fn matches_search(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term_lower = term.to_lowercase();
    project.name.to_lowercase().contains(&term_lower)
        || project.description.to_lowercase().contains(&term_lower)
        || project
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&term_lower))
}

/// Whether one of the project's tags equals `tag`, ignoring case.
pub fn has_tag(project: &Project, tag: &str) -> bool {
    let tag_lower = tag.to_lowercase();
    project.tags.iter().any(|t| t.to_lowercase() == tag_lower)
}

/// Conjunctive tag filter: the project must carry ALL selected tags.
pub fn matches_tags(project: &Project, selected: &BTreeSet<String>) -> bool {
    selected.iter().all(|tag| has_tag(project, tag))
}

/// Projects passing both predicates, in their original order.
pub fn visible<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_search(p, state.search_term()))
        .filter(|p| matches_tags(p, state.selected_tags()))
        .collect()
}
