//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for showcase operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the catalog once from its [`CatalogSource`]
//! - **Owns** the interactive [`Session`] and forwards filter events to it
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Two Ways to Filter
//!
//! - **One-shot**: [`ShowcaseApi::list_projects`] and [`ShowcaseApi::list_tags`] take a
//!   search term and tags, build a fresh filter state and leave the session alone.
//!   This is what `showcase list -s wallet -t Privacy` uses.
//! - **Interactive**: [`ShowcaseApi::apply`] feeds a [`FilterEvent`] into the session
//!   and returns the new visible set. This is what `showcase browse` uses.
//!
//! Both paths run the same predicates and produce the same results for the same
//! state.
//!
//! ## Configuration
//!
//! [`config`] needs no catalog, so it is a free function taking the config
//! directory. A broken catalog path can then still be fixed through it.
//!
//! ## Generic Over CatalogSource
//!
//! `ShowcaseApi<S: CatalogSource>` works with any source:
//! - Production: `ShowcaseApi<Box<dyn CatalogSource>>` (built-in or file)
//! - Testing: `ShowcaseApi<MemorySource>`

use crate::commands;
use crate::error::Result;
use crate::session::{FilterEvent, FilterState, Session};
use crate::store::CatalogSource;
use std::collections::BTreeSet;
use std::path::Path;

pub struct ShowcaseApi<S: CatalogSource> {
    source: S,
    session: Session,
}

impl<S: CatalogSource> ShowcaseApi<S> {
    pub fn new(source: S) -> Result<Self> {
        let catalog = source.load()?;
        tracing::debug!(source = %source.describe(), "catalog ready");
        Ok(Self {
            source,
            session: Session::new(catalog),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list_projects<T: AsRef<str>>(
        &self,
        search: Option<&str>,
        tags: &[T],
    ) -> Result<commands::CmdResult> {
        let state = build_state(search, tags);
        commands::list::run(self.session.catalog(), &state)
    }

    pub fn list_tags<T: AsRef<str>>(&self, tags: &[T]) -> Result<commands::CmdResult> {
        let state = build_state(None, tags);
        commands::tags::run(self.session.catalog(), &state)
    }

    pub fn show_project(&self, id: u64) -> Result<commands::CmdResult> {
        commands::show::run(self.session.catalog(), id)
    }

    /// Applies one interaction to the session and returns the new visible set.
    pub fn apply(&mut self, event: FilterEvent) -> Result<commands::CmdResult> {
        self.session.apply(event);
        self.current_view()
    }

    pub fn current_view(&self) -> Result<commands::CmdResult> {
        commands::list::run(self.session.catalog(), self.session.state())
    }

    pub fn current_tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(self.session.catalog(), self.session.state())
    }
}

/// Shows or changes the configuration stored in `config_dir`.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

/// Builds a filter state the way a visitor would: type the term, click each tag.
///
/// Repeated tags are clicked once; clicking twice would deselect.
fn build_state<T: AsRef<str>>(search: Option<&str>, tags: &[T]) -> FilterState {
    let mut state = FilterState::new();
    if let Some(term) = search {
        state.apply(FilterEvent::SearchChanged(term.to_string()));
    }

    let mut clicked = BTreeSet::new();
    for tag in tags {
        let tag = tag.as_ref();
        if clicked.insert(tag) {
            state.apply(FilterEvent::TagClicked(tag.to_string()));
        }
    }
    state
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::model::Project;
    use crate::store::memory::MemorySource;
    use tempfile::TempDir;

    fn api() -> ShowcaseApi<MemorySource> {
        let source = MemorySource::new(vec![
            Project::new(1, "Miden Name Service").with_tags(["Naming", "Utility"]),
            Project::new(2, "Pocket Wallet").with_tags(["Wallet", "Privacy"]),
            Project::new(3, "Note Relay").with_tags(["Privacy", "Utility"]),
        ]);
        ShowcaseApi::new(source).unwrap()
    }

    fn ids(result: &CmdResult) -> Vec<u64> {
        result.projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn list_projects_builds_state_from_arguments() {
        let api = api();
        let result = api.list_projects(Some("o"), &["Privacy"]).unwrap();
        assert_eq!(ids(&result), vec![2, 3]);

        let filter = result.filter.unwrap();
        assert_eq!(filter.search_term(), "o");
        assert!(filter.is_selected("Privacy"));
    }

    #[test]
    fn repeated_tags_are_selected_once() {
        let api = api();
        let result = api
            .list_projects(None, &["Utility", "Utility"])
            .unwrap();
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn one_shot_listing_leaves_session_alone() {
        let api = api();
        api.list_projects(Some("wallet"), &["Wallet"]).unwrap();
        assert!(api.session().state().is_unfiltered());
    }

    #[test]
    fn apply_drives_the_session() {
        let mut api = api();
        let result = api
            .apply(FilterEvent::TagClicked("Utility".into()))
            .unwrap();
        assert_eq!(ids(&result), vec![1, 3]);

        let result = api.apply(FilterEvent::SearchChanged("relay".into())).unwrap();
        assert_eq!(ids(&result), vec![3]);

        let result = api.apply(FilterEvent::ClearAll).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn current_tags_reflects_session_selection() {
        let mut api = api();
        api.apply(FilterEvent::TagClicked("Wallet".into())).unwrap();
        let result = api.current_tags().unwrap();
        let selected: Vec<_> = result
            .chips
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(selected, vec!["Wallet"]);
    }

    #[test]
    fn show_project_dispatches() {
        let api = api();
        assert_eq!(api.show_project(2).unwrap().projects[0].name, "Pocket Wallet");
        assert!(matches!(
            api.show_project(42).unwrap_err(),
            ShowcaseError::ProjectNotFound(42)
        ));
    }

    #[test]
    fn config_writes_to_given_directory() {
        let dir = TempDir::new().unwrap();
        config(dir.path(), ConfigAction::Set("line-width".into(), "60".into())).unwrap();
        assert!(dir.path().join("config.json").exists());

        let result = config(dir.path(), ConfigAction::ShowKey("line-width".into())).unwrap();
        assert_eq!(result.config.unwrap().line_width, 60);
    }

    #[test]
    fn source_is_kept_for_description() {
        assert_eq!(api().source().describe(), "in-memory (3 projects)");
    }
}
