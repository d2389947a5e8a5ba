//! Logic for the `information-form` questionnaire: aggregating checklist
//! selections into their hidden fields and toggling the "Other" free-text
//! input. All DOM access goes through [`QuestionnaireDom`] so the branching
//! here stays pure.

pub const FORM_ID: &str = "information-form";

/// Selection value that reveals the free-text input.
pub const OTHER_VALUE: &str = "other";
/// Checkbox inspected by the checklist variant of the toggle.
pub const OTHER_CHECKBOX_ID: &str = "ethnicity-OTHER";
/// Checklist group whose "Other" entry is wired through a change handler.
pub const ETHNICITY_LABEL: &str = "ethnicity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistGroup {
    /// CSS selector matching the group's checkboxes.
    pub selector: &'static str,
    /// Id of the field receiving the joined values on submit.
    pub field_id: &'static str,
}

/// The two fixed (group, aggregate field) pairs the form submits.
pub const CHECKLIST_GROUPS: [ChecklistGroup; 2] = [
    ChecklistGroup {
        selector: ".focusListCheckbox",
        field_id: "focusList",
    },
    ChecklistGroup {
        selector: ".ethnicityCheckbox",
        field_id: "ethnicity",
    },
];

/// Id of the container swapped between the "Other" input and empty.
pub fn other_region_id(label: &str) -> String {
    format!("other-input-{label}")
}

/// Name and id of the injected free-text input.
pub fn other_field_name(label: &str) -> String {
    format!("{label}Other")
}

pub fn is_other_selection(value: &str) -> bool {
    value.to_lowercase() == OTHER_VALUE
}

/// Comma-and-space joined checkbox values, `None` when nothing is checked.
/// Order is the caller's (DOM) order, not selection order.
pub fn join_checked_values(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Seam between the form logic and the live page. The wasm shell backs this
/// with web-sys; tests back it with an in-memory page.
pub trait QuestionnaireDom {
    /// Values of checked checkboxes matching `selector`, in DOM order.
    fn checked_values(&self, selector: &str) -> Vec<String>;
    fn set_field_value(&mut self, field_id: &str, value: &str);
    fn is_checked(&self, element_id: &str) -> bool;
    /// Render the labeled "Other" text input inside `other-input-<label>`,
    /// replacing whatever the region currently holds.
    fn show_other_input(&mut self, label: &str);
    /// Empty the `other-input-<label>` region.
    fn clear_other_region(&mut self, label: &str);
}

/// Submit-time aggregation. A group with no checked boxes leaves its field
/// untouched; otherwise the field is overwritten with the joined values, so
/// resubmitting without a reload cannot duplicate them.
pub fn aggregate_checked_groups(dom: &mut impl QuestionnaireDom) {
    for group in &CHECKLIST_GROUPS {
        let checked = dom.checked_values(group.selector);
        if let Some(joined) = join_checked_values(&checked) {
            dom.set_field_value(group.field_id, &joined);
        }
    }
}

/// Change-handler entry point for single-choice controls.
pub fn apply_other_selection(dom: &mut impl QuestionnaireDom, value: &str, label: &str) {
    if is_other_selection(value) {
        dom.show_other_input(label);
    } else {
        dom.clear_other_region(label);
    }
}

/// Change-handler entry point for checklist groups, keyed off the fixed
/// `ethnicity-OTHER` checkbox.
pub fn apply_checklist_other(dom: &mut impl QuestionnaireDom, label: &str) {
    if dom.is_checked(OTHER_CHECKBOX_ID) {
        dom.show_other_input(label);
    } else {
        dom.clear_other_region(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// In-memory stand-in for the questionnaire page.
    #[derive(Default)]
    struct FakePage {
        checked: HashMap<&'static str, Vec<String>>,
        fields: HashMap<String, String>,
        checked_ids: HashSet<String>,
        regions: HashMap<String, Option<String>>,
    }

    impl FakePage {
        fn with_checked(mut self, selector: &'static str, values: &[&str]) -> Self {
            self.checked
                .insert(selector, values.iter().map(|v| (*v).to_string()).collect());
            self
        }

        fn region(&self, label: &str) -> Option<&str> {
            self.regions
                .get(&other_region_id(label))
                .and_then(|content| content.as_deref())
        }
    }

    impl QuestionnaireDom for FakePage {
        fn checked_values(&self, selector: &str) -> Vec<String> {
            self.checked.get(selector).cloned().unwrap_or_default()
        }

        fn set_field_value(&mut self, field_id: &str, value: &str) {
            self.fields.insert(field_id.to_string(), value.to_string());
        }

        fn is_checked(&self, element_id: &str) -> bool {
            self.checked_ids.contains(element_id)
        }

        fn show_other_input(&mut self, label: &str) {
            self.regions
                .insert(other_region_id(label), Some(other_field_name(label)));
        }

        fn clear_other_region(&mut self, label: &str) {
            self.regions.insert(other_region_id(label), None);
        }
    }

    #[test]
    fn aggregation_joins_in_dom_order() {
        let mut page = FakePage::default().with_checked(".focusListCheckbox", &["A", "B", "C"]);
        aggregate_checked_groups(&mut page);
        assert_eq!(page.fields.get("focusList").map(String::as_str), Some("A, B, C"));
    }

    #[test]
    fn single_selection_has_no_separator() {
        let mut page = FakePage::default().with_checked(".ethnicityCheckbox", &["X"]);
        aggregate_checked_groups(&mut page);
        assert_eq!(page.fields.get("ethnicity").map(String::as_str), Some("X"));
    }

    #[test]
    fn zero_selection_leaves_field_untouched() {
        let mut page = FakePage::default();
        page.fields
            .insert("focusList".to_string(), "stale".to_string());
        aggregate_checked_groups(&mut page);
        assert_eq!(page.fields.get("focusList").map(String::as_str), Some("stale"));
    }

    #[test]
    fn resubmit_overwrites_instead_of_appending() {
        let mut page = FakePage::default().with_checked(".focusListCheckbox", &["A", "B"]);
        aggregate_checked_groups(&mut page);
        aggregate_checked_groups(&mut page);
        assert_eq!(page.fields.get("focusList").map(String::as_str), Some("A, B"));
    }

    #[test]
    fn both_groups_aggregate_independently() {
        let mut page = FakePage::default()
            .with_checked(".focusListCheckbox", &["Career growth"])
            .with_checked(".ethnicityCheckbox", &["HISPANIC", "OTHER"]);
        aggregate_checked_groups(&mut page);
        assert_eq!(
            page.fields.get("focusList").map(String::as_str),
            Some("Career growth")
        );
        assert_eq!(
            page.fields.get("ethnicity").map(String::as_str),
            Some("HISPANIC, OTHER")
        );
    }

    #[test]
    fn other_selection_is_case_insensitive() {
        assert!(is_other_selection("Other"));
        assert!(is_other_selection("OTHER"));
        assert!(!is_other_selection("otherwise"));
    }

    #[test]
    fn other_toggle_shows_then_clears() {
        let mut page = FakePage::default();
        apply_other_selection(&mut page, "Other", "gender");
        assert_eq!(page.region("gender"), Some("genderOther"));

        apply_other_selection(&mut page, "FEMALE", "gender");
        assert_eq!(page.region("gender"), None);
    }

    #[test]
    fn other_toggle_is_idempotent() {
        let mut page = FakePage::default();
        apply_other_selection(&mut page, "other", "gender");
        let first = page.region("gender").map(str::to_string);
        apply_other_selection(&mut page, "other", "gender");
        assert_eq!(page.region("gender").map(str::to_string), first);
    }

    #[test]
    fn checklist_toggle_follows_other_checkbox() {
        let mut page = FakePage::default();
        page.checked_ids.insert(OTHER_CHECKBOX_ID.to_string());
        apply_checklist_other(&mut page, ETHNICITY_LABEL);
        assert_eq!(page.region(ETHNICITY_LABEL), Some("ethnicityOther"));

        page.checked_ids.clear();
        apply_checklist_other(&mut page, ETHNICITY_LABEL);
        assert_eq!(page.region(ETHNICITY_LABEL), None);
    }

    #[test]
    fn region_and_field_naming() {
        assert_eq!(other_region_id("educationLevel"), "other-input-educationLevel");
        assert_eq!(other_field_name("educationLevel"), "educationLevelOther");
    }
}
