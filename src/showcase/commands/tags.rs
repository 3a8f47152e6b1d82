use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Catalog;
use crate::session::FilterState;
use crate::tags::chips;

/// Lists the tag vocabulary as chips, marking the ones selected in `state`.
pub fn run(catalog: &Catalog, state: &FilterState) -> Result<CmdResult> {
    let chips = chips(
        catalog.vocabulary(),
        catalog.projects(),
        state.selected_tags(),
    );

    let mut result = CmdResult::default();
    if chips.is_empty() {
        result.add_message(CmdMessage::info("No tags defined"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} tag{}",
            chips.len(),
            plural(chips.len())
        )));
    }

    // Selected tags that no vocabulary entry spells exactly still narrow the list.
    for tag in state.selected_tags() {
        if !catalog.vocabulary().contains(tag) {
            result.add_message(CmdMessage::warning(format!(
                "Selected tag '{}' is not in the vocabulary",
                tag
            )));
        }
    }

    Ok(result.with_chips(chips).with_filter(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Project;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Project::new(1, "A").with_tags(["Utility", "Naming"]),
            Project::new(2, "B").with_tags(["Utility"]),
        ])
    }

    #[test]
    fn lists_sorted_chips() {
        let result = run(&catalog(), &FilterState::new()).unwrap();
        let names: Vec<_> = result.chips.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Naming", "Utility"]);
        assert_eq!(result.chips[1].count, 2);
        assert_eq!(result.messages[0].content, "2 tags");
    }

    #[test]
    fn marks_selected_chips() {
        let mut state = FilterState::new();
        state.toggle("Naming");
        let result = run(&catalog(), &state).unwrap();
        assert!(result.chips[0].selected);
        assert!(!result.chips[1].selected);
    }

    #[test]
    fn warns_about_selection_outside_vocabulary() {
        let mut state = FilterState::new();
        state.toggle("naming");
        let result = run(&catalog(), &state).unwrap();
        assert!(result.chips.iter().all(|c| !c.selected));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("'naming'")));
    }

    #[test]
    fn empty_catalog_has_no_tags() {
        let result = run(&Catalog::default(), &FilterState::new()).unwrap();
        assert!(result.chips.is_empty());
        assert_eq!(result.messages[0].content, "No tags defined");
    }
}
