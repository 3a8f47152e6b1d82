use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::visible;
use crate::model::Catalog;
use crate::session::FilterState;

pub fn run(catalog: &Catalog, state: &FilterState) -> Result<CmdResult> {
    let listed: Vec<_> = visible(catalog.projects(), state)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No projects match the current filters."));
    } else if !state.is_unfiltered() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} project{}",
            listed.len(),
            catalog.len(),
            plural(catalog.len())
        )));
    }

    Ok(result.with_projects(listed).with_filter(state.clone()))
}
