//! Submission form state: archive selection and run-option controls
//!
//! The form is the only place the client-side precondition is enforced:
//! the submit control stays unavailable until exactly one file with a
//! case-insensitive `.zip` suffix is selected. An invalid selection sets
//! feedback and never reaches the session state machine.

use std::path::PathBuf;

use serde_json::{Map, Value};

use zipline_core::prelude::*;

use crate::config::{OptionDef, OptionKind};

/// Feedback shown when a non-archive path is chosen
pub const INVALID_ARCHIVE_FEEDBACK: &str = "Please select a single ZIP file.";

/// Case-insensitive `.zip` suffix check on the file name
pub fn is_zip_archive(name: &str) -> bool {
    name.to_lowercase().ends_with(".zip")
}

/// Current value of one named form control
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Checkbox(bool),
    Radio {
        choices: Vec<String>,
        selected: usize,
    },
    Text(String),
}

/// A named form control with its current value
#[derive(Debug, Clone, PartialEq)]
pub struct OptionControl {
    pub name: String,
    pub label: String,
    pub value: OptionValue,
}

impl OptionControl {
    fn from_def(def: &OptionDef) -> Self {
        let value = match &def.kind {
            OptionKind::Checkbox { default } => OptionValue::Checkbox(*default),
            OptionKind::Radio { choices, default } => OptionValue::Radio {
                choices: choices.clone(),
                selected: (*default).min(choices.len().saturating_sub(1)),
            },
            OptionKind::Text { default } => OptionValue::Text(default.clone()),
        };
        Self {
            name: def.name.clone(),
            label: def.label.clone(),
            value,
        }
    }

    /// The JSON value this control contributes to the kickoff options map
    pub fn value_json(&self) -> Value {
        match &self.value {
            OptionValue::Checkbox(checked) => Value::Bool(*checked),
            OptionValue::Radio { choices, selected } => Value::String(
                choices.get(*selected).cloned().unwrap_or_default(),
            ),
            OptionValue::Text(text) => Value::String(text.clone()),
        }
    }

    /// Flip a checkbox or advance a radio group; text controls ignore this
    pub fn toggle(&mut self) {
        match &mut self.value {
            OptionValue::Checkbox(checked) => *checked = !*checked,
            OptionValue::Radio { choices, selected } => {
                if !choices.is_empty() {
                    *selected = (*selected + 1) % choices.len();
                }
            }
            OptionValue::Text(_) => {}
        }
    }

    /// Step a radio group backwards; other kinds ignore this
    pub fn cycle_back(&mut self) {
        if let OptionValue::Radio { choices, selected } = &mut self.value {
            if !choices.is_empty() {
                *selected = (*selected + choices.len() - 1) % choices.len();
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.value, OptionValue::Text(_))
    }

    /// Current value as shown on the form
    pub fn display_value(&self) -> String {
        match &self.value {
            OptionValue::Checkbox(true) => "[x]".to_string(),
            OptionValue::Checkbox(false) => "[ ]".to_string(),
            OptionValue::Radio { choices, selected } => {
                format!("‹ {} ›", choices.get(*selected).map(String::as_str).unwrap_or(""))
            }
            OptionValue::Text(text) => text.clone(),
        }
    }
}

/// State of the submission form
#[derive(Debug, Clone)]
pub struct FormState {
    /// Text being typed into the archive-path row
    pub path_input: String,
    /// The validated selection; `Some` implies a `.zip` name
    pub archive: Option<PathBuf>,
    pub controls: Vec<OptionControl>,
    /// Focused row: 0 = path input, 1..=controls, last = submit
    pub focus: usize,
    /// Validation feedback for the last rejected selection
    pub feedback: Option<String>,
}

impl FormState {
    pub fn new(defs: &[OptionDef]) -> Self {
        Self {
            path_input: String::new(),
            archive: None,
            controls: defs.iter().map(OptionControl::from_def).collect(),
            focus: 0,
            feedback: None,
        }
    }

    /// Restore the pristine state: selection cleared, defaults back,
    /// submit unavailable until a new valid file is chosen.
    pub fn reset(&mut self, defs: &[OptionDef]) {
        *self = Self::new(defs);
    }

    /// Total focusable rows (path input + controls + submit)
    pub fn rows(&self) -> usize {
        self.controls.len() + 2
    }

    pub fn path_focused(&self) -> bool {
        self.focus == 0
    }

    pub fn submit_focused(&self) -> bool {
        self.focus == self.rows() - 1
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.rows();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.rows() - 1) % self.rows();
    }

    /// The focused option control, if an option row has focus
    pub fn focused_control(&mut self) -> Option<&mut OptionControl> {
        if self.focus == 0 || self.focus >= self.rows() - 1 {
            return None;
        }
        self.controls.get_mut(self.focus - 1)
    }

    /// Whether the focused row is a text control
    pub fn focused_is_text(&self) -> bool {
        if self.focus == 0 || self.focus >= self.rows() - 1 {
            return false;
        }
        self.controls
            .get(self.focus - 1)
            .map(OptionControl::is_text)
            .unwrap_or(false)
    }

    /// Validate and take a selection.
    ///
    /// A path without a case-insensitive `.zip` file name is rejected:
    /// the selection stays empty, feedback is set, and the submit control
    /// remains unavailable.
    pub fn select_archive(&mut self, path: PathBuf) -> bool {
        let valid = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(is_zip_archive)
            .unwrap_or(false);

        if !valid {
            debug!("rejected archive selection: {}", path.display());
            self.archive = None;
            self.feedback = Some(INVALID_ARCHIVE_FEEDBACK.to_string());
            return false;
        }

        self.path_input = path.display().to_string();
        self.archive = Some(path);
        self.feedback = None;
        true
    }

    /// Apply the typed path as the selection (Enter on the path row)
    pub fn confirm_path_input(&mut self) {
        let trimmed = self.path_input.trim().to_string();
        if trimmed.is_empty() {
            self.archive = None;
            self.feedback = Some(INVALID_ARCHIVE_FEEDBACK.to_string());
            return;
        }
        self.select_archive(PathBuf::from(trimmed));
    }

    /// The submit control is available only with a valid selection
    pub fn is_submittable(&self) -> bool {
        self.archive.is_some()
    }

    /// File name of the current selection
    pub fn archive_name(&self) -> Option<String> {
        self.archive
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
    }

    /// Collect every named control into the kickoff options map:
    /// checkboxes as booleans, radio groups as the selected value,
    /// text controls as their string value.
    pub fn collect_options(&self) -> Map<String, Value> {
        self.controls
            .iter()
            .map(|c| (c.name.clone(), c.value_json()))
            .collect()
    }
}
