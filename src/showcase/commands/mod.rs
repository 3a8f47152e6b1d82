//! # Command Layer
//!
//! The business logic behind each user-facing operation. Commands take a catalog
//! and a filter state (or a config directory) and return a [`CmdResult`]; they never
//! print, prompt or exit.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `projects`: Projects to display, in catalog order (always present, so an
//!   empty result serializes as `"projects": []`)
//! - `chips`: Tag chips with their selected flag and project count
//! - `filter`: The filter state the result was computed for
//! - `config`: Configuration data (for `config`)
//! - `messages`: Leveled messages (info, success, warning)
//!
//! The UI decides how to render this data.
//!
//! ## Command Modules
//!
//! - [`list`]: The visible set for a filter state
//! - [`tags`]: The tag vocabulary as chips
//! - [`show`]: One project by id
//! - [`config`]: Show and change configuration

use crate::config::ShowcaseConfig;
use crate::model::Project;
use crate::session::FilterState;
use crate::tags::TagChip;
use serde::Serialize;

pub mod config;
pub mod list;
pub mod show;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chips: Vec<TagChip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ShowcaseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_chips(mut self, chips: Vec<TagChip>) -> Self {
        self.chips = chips;
        self
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_config(mut self, config: ShowcaseConfig) -> Self {
        self.config = Some(config);
        self
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
