//! Selector Option Helpers
//!
//! Shared by the radio and checkbox groups: which options are checked and
//! what a click on one reports back.

use std::collections::HashSet;

/// One rendered option of a selector group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionState {
    pub label: String,
    pub checked: bool,
}

impl OptionState {
    /// Report this option's label to the owner
    pub fn emit(&self, on_change: impl FnOnce(String)) {
        on_change(self.label.clone());
    }
}

/// Options in their given order, checked when `is_selected` says so.
/// Only the first occurrence of a duplicate label is kept.
pub fn option_states(options: &[String], is_selected: impl Fn(&str) -> bool) -> Vec<OptionState> {
    let mut seen = HashSet::new();
    options
        .iter()
        .filter(|label| seen.insert(label.as_str()))
        .map(|label| OptionState {
            label: label.clone(),
            checked: is_selected(label.as_str()),
        })
        .collect()
}

/// DOM id for an option input, used by its `<label for=..>`
pub fn option_input_id(group: &str, label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{}-{}", group, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_selection_checks_one() {
        let options = labels(&["A", "B", "C"]);
        let states = option_states(&options, |l| l == "B");
        let checked: Vec<&str> = states.iter().filter(|s| s.checked).map(|s| s.label.as_str()).collect();
        assert_eq!(checked, vec!["B"]);
    }

    #[test]
    fn test_selecting_other_option_emits_its_label_once() {
        let options = labels(&["A", "B", "C"]);
        let states = option_states(&options, |l| l == "B");

        let mut calls = Vec::new();
        states[2].emit(|label| calls.push(label));
        assert_eq!(calls, vec!["C".to_string()]);
    }

    #[test]
    fn test_emit_ignores_current_selection() {
        let options = labels(&["A", "B"]);
        let selected = labels(&["A"]);
        let states = option_states(&options, |l| selected.iter().any(|s| s == l));

        // Checked and unchecked options both report their own label
        let mut calls = Vec::new();
        for state in &states {
            state.emit(|label| calls.push(label));
        }
        assert_eq!(calls, labels(&["A", "B"]));
    }

    #[test]
    fn test_duplicate_labels_render_once() {
        let options = labels(&["A", "B", "A"]);
        let states = option_states(&options, |l| l == "A");
        assert_eq!(states.len(), 2);
        assert_eq!(states.iter().filter(|s| s.checked).count(), 1);
    }

    #[test]
    fn test_empty_options() {
        assert!(option_states(&[], |_| true).is_empty());
    }

    #[test]
    fn test_option_input_id() {
        assert_eq!(option_input_id("genre", "Sci-Fi"), "genre-sci-fi");
        assert_eq!(option_input_id("cat", "New Releases"), "cat-new-releases");
    }
}
