use crate::commands::CmdResult;
use crate::error::{Result, ShowcaseError};
use crate::model::Catalog;

pub fn run(catalog: &Catalog, id: u64) -> Result<CmdResult> {
    let project = catalog
        .get(id)
        .cloned()
        .ok_or(ShowcaseError::ProjectNotFound(id))?;
    Ok(CmdResult::default().with_projects(vec![project]))
}
