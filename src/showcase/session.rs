//! # Filter Session
//!
//! A session pairs a read-only [`Catalog`] with the mutable [`FilterState`] a visitor
//! drives. The state machine is small:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `SearchChanged(text)` | search term replaced verbatim |
//! | `TagClicked(tag)` | tag removed if selected, added otherwise |
//! | `ClearTags` | selection emptied, search term kept |
//! | `ClearAll` | selection emptied and search term reset, together |
//!
//! There is no terminal state. The visible set is never stored: [`Session::visible`]
//! recomputes it from the current state on every call.

use crate::filter;
use crate::model::{Catalog, Project};
use crate::tags::{chips, TagChip};
use serde::Serialize;
use std::collections::BTreeSet;

/// The visitor's current search term and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    search_term: String,
    selected_tags: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// True when nothing narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.selected_tags.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Flips membership of `tag`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    pub fn clear_all(&mut self) {
        self.search_term.clear();
        self.selected_tags.clear();
    }

    pub fn apply(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::SearchChanged(term) => self.set_search_term(term),
            FilterEvent::TagClicked(tag) => {
                self.toggle(&tag);
            }
            FilterEvent::ClearTags => self.clear_tags(),
            FilterEvent::ClearAll => self.clear_all(),
        }
    }
}

/// Inbound interactions from a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SearchChanged(String),
    TagClicked(String),
    ClearTags,
    ClearAll,
}

/// A catalog plus the filter state applied to it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    state: FilterState,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn chips(&self) -> Vec<TagChip> {
        chips(
            self.catalog.vocabulary(),
            self.catalog.projects(),
            self.state.selected_tags(),
        )
    }

    pub fn visible(&self) -> Vec<&Project> {
        filter::visible(self.catalog.projects(), &self.state)
    }

    pub fn apply(&mut self, event: FilterEvent) {
        tracing::debug!(?event, "applying filter event");
        self.state.apply(event);
        tracing::debug!(
            term = %self.state.search_term(),
            tags = ?self.state.selected_tags(),
            "filter state updated"
        );
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.apply(FilterEvent::SearchChanged(term.into()));
    }

    pub fn toggle(&mut self, tag: &str) {
        self.apply(FilterEvent::TagClicked(tag.to_string()));
    }

    pub fn clear_tags(&mut self) {
        self.apply(FilterEvent::ClearTags);
    }

    pub fn clear_all(&mut self) {
        self.apply(FilterEvent::ClearAll);
    }
}
