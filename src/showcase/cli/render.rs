//! # Rendering Module
//!
//! Turns command results into terminal text. Layout math (widths, truncation,
//! padding) happens on plain strings first and styling is applied last, so colour
//! codes never count against the line width.

use colored::*;
use showcase::api::{CmdMessage, CmdResult, MessageLevel};
use showcase::error::Result;
use showcase::model::Project;
use showcase::session::FilterState;
use showcase::tags::TagChip;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_GAP: &str = "  ";

pub fn render_projects(projects: &[Project], line_width: usize) -> String {
    let mut out = String::new();

    for project in projects {
        let id_str = format!("{:>width$}. ", project.id, width = ID_WIDTH);
        let tags_str = if project.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", project.tags.join(", "))
        };

        let fixed_width = id_str.width() + tags_str.width();
        let available = line_width.saturating_sub(fixed_width);

        let name = truncate_to_width(&project.name, available);
        let desc_room = available.saturating_sub(name.width() + NAME_GAP.width());
        let description = if project.description.is_empty() || desc_room < 8 {
            String::new()
        } else {
            truncate_to_width(&single_line(&project.description), desc_room)
        };

        let used = name.width()
            + if description.is_empty() {
                0
            } else {
                NAME_GAP.width() + description.width()
            };
        let padding = available.saturating_sub(used);

        let mut line = format!("{}{}", id_str.yellow(), name.bold());
        if !description.is_empty() {
            line.push_str(NAME_GAP);
            line.push_str(&description.dimmed().to_string());
        }
        if !tags_str.is_empty() {
            line.push_str(&" ".repeat(padding));
            line.push_str(&tags_str.cyan().to_string());
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

pub fn render_project_detail(project: &Project) -> String {
    let mut out = format!(
        "{} {}\n",
        format!("{}.", project.id).yellow(),
        project.name.bold()
    );
    out.push_str("--------------------------------\n");
    if !project.description.is_empty() {
        out.push_str(&project.description);
        out.push_str("\n\n");
    }
    if !project.link.is_empty() {
        out.push_str(&format!("{:<7}{}\n", "link", project.link.underline()));
    }
    if !project.image.is_empty() {
        out.push_str(&format!("{:<7}{}\n", "image", project.image));
    }
    if !project.tags.is_empty() {
        out.push_str(&format!("{:<7}{}\n", "tags", project.tags.join(", ").cyan()));
    }
    out
}

pub fn render_chips(chips: &[TagChip]) -> String {
    let name_width = chips.iter().map(|c| c.name.width()).max().unwrap_or(0);
    let mut out = String::new();

    for chip in chips {
        let marker = if chip.selected { "[x]" } else { "[ ]" };
        let pad = " ".repeat(name_width.saturating_sub(chip.name.width()));
        let label = if chip.selected {
            chip.name.green().bold()
        } else {
            chip.name.normal()
        };
        out.push_str(&format!(
            "  {} {}{}  {}\n",
            marker,
            label,
            pad,
            chip.count.to_string().dimmed()
        ));
    }

    out
}

/// One line describing the active filters, empty when nothing filters.
pub fn render_filter_state(state: &FilterState) -> String {
    if state.is_unfiltered() {
        return String::new();
    }

    let mut parts = Vec::new();
    if !state.search_term().is_empty() {
        parts.push(format!("search: \"{}\"", state.search_term()));
    }
    if !state.selected_tags().is_empty() {
        let tags: Vec<&str> = state.selected_tags().iter().map(String::as_str).collect();
        parts.push(format!("tags: {}", tags.join(" + ")));
    }
    format!("{}\n", parts.join("  ").dimmed())
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

pub fn render_json(result: &CmdResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn mns() -> Project {
        Project::new(1, "Miden Name Service")
            .with_description("Human-readable names for accounts")
            .with_link("https://mns.example.org")
            .with_tags(["Naming", "Utility"])
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn project_line_fits_width() {
        plain();
        let out = render_projects(&[mns()], 60);
        let line = out.lines().next().unwrap();
        assert!(line.starts_with("   1. Miden Name Service"));
        assert!(line.ends_with("[Naming, Utility]"));
        assert_eq!(line.width(), 60);
    }

    #[test]
    fn narrow_lines_drop_description() {
        plain();
        let out = render_projects(&[mns()], 46);
        assert!(!out.contains("Human"));
        assert!(out.contains("Miden Name Service"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_projects(&[], 80), "");
    }

    #[test]
    fn detail_shows_all_fields() {
        plain();
        let out = render_project_detail(&mns().with_image("mns.png"));
        assert!(out.starts_with("1. Miden Name Service\n"));
        assert!(out.contains("link   https://mns.example.org"));
        assert!(out.contains("image  mns.png"));
        assert!(out.contains("tags   Naming, Utility"));
    }

    #[test]
    fn chips_show_selection() {
        plain();
        let chips = vec![
            TagChip { name: "DeFi".into(), selected: false, count: 2 },
            TagChip { name: "Naming".into(), selected: true, count: 1 },
        ];
        let out = render_chips(&chips);
        assert_eq!(out, "  [ ] DeFi    2\n  [x] Naming  1\n");
    }

    #[test]
    fn filter_state_line() {
        plain();
        let mut state = FilterState::new();
        assert_eq!(render_filter_state(&state), "");

        state.set_search_term("mi");
        state.toggle("Utility");
        state.toggle("Naming");
        assert_eq!(
            render_filter_state(&state),
            "search: \"mi\"  tags: Naming + Utility\n"
        );
    }

    #[test]
    fn json_output_includes_projects() {
        let result = CmdResult::default().with_projects(vec![mns()]);
        let json = render_json(&result).unwrap();
        assert!(json.contains("\"Miden Name Service\""));
        assert!(!json.contains("\"chips\""));
    }

    #[test]
    fn json_output_keeps_empty_projects() {
        let json = render_json(&CmdResult::default()).unwrap();
        assert!(json.contains("\"projects\": []"));
    }
}
