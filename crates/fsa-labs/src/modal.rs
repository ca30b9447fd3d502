//! Headless model of the modal surface.
//!
//! Holds what a browser would hold in the DOM: whether the modal is open and
//! for which lab, the rendered content, the body scroll lock, control values
//! and the result/outcome regions. [`PopupLabs`](crate::PopupLabs) drives it.

use std::collections::BTreeMap;

use serde::Serialize;

/// Open/closed state. At most one lab is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open { lab_id: String },
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Char(char),
}

/// A toggleable region (calculator result or scenario outcome).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    pub html: String,
    pub active: bool,
    pub class: String,
}

impl Region {
    fn hidden(class: &str) -> Self {
        Self {
            html: String::new(),
            active: false,
            class: class.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Modal {
    state: ModalState,
    content: String,
    scroll_locked: bool,
    inputs: BTreeMap<String, String>,
    slider_labels: BTreeMap<String, String>,
    result: Option<Region>,
    outcome: Option<Region>,
}

impl Modal {
    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Id of the open lab, if any.
    #[must_use]
    pub fn open_lab(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open { lab_id } => Some(lab_id),
            ModalState::Closed => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether background scrolling is suspended.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Current raw value of a control of the open lab.
    #[must_use]
    pub fn input(&self, input_id: &str) -> Option<&str> {
        self.inputs.get(input_id).map(String::as_str)
    }

    /// Text of a slider's value label.
    #[must_use]
    pub fn slider_label(&self, input_id: &str) -> Option<&str> {
        self.slider_labels.get(input_id).map(String::as_str)
    }

    /// Result region; `None` unless a calculator is open.
    #[must_use]
    pub const fn result(&self) -> Option<&Region> {
        self.result.as_ref()
    }

    /// Outcome region; `None` unless a scenario is open.
    #[must_use]
    pub const fn outcome(&self) -> Option<&Region> {
        self.outcome.as_ref()
    }

    /// Show `content` for `lab_id`, replacing whatever was open.
    pub(crate) fn show(&mut self, lab_id: &str, content: String) {
        self.state = ModalState::Open {
            lab_id: lab_id.to_string(),
        };
        self.content = content;
        self.scroll_locked = true;
        self.inputs.clear();
        self.slider_labels.clear();
        self.result = None;
        self.outcome = None;
    }

    pub(crate) fn add_result_region(&mut self) {
        self.result = Some(Region::hidden("lab-result"));
    }

    pub(crate) fn add_outcome_region(&mut self) {
        self.outcome = Some(Region::hidden("lab-outcome"));
    }

    pub(crate) fn set_input(&mut self, input_id: &str, raw: String) {
        self.inputs.insert(input_id.to_string(), raw);
    }

    pub(crate) fn set_slider_label(&mut self, input_id: &str, label: String) {
        self.slider_labels.insert(input_id.to_string(), label);
    }

    /// Fill and reveal the result region. `false` when there is none.
    pub(crate) fn show_result(&mut self, html: String) -> bool {
        let Some(region) = &mut self.result else {
            return false;
        };
        region.html = html;
        region.active = true;
        region.class = "lab-result active".to_string();
        true
    }

    /// Fill and reveal the outcome region with an extra state class.
    pub(crate) fn show_outcome(&mut self, html: String, outcome_type: Option<&str>) -> bool {
        let Some(region) = &mut self.outcome else {
            return false;
        };
        region.html = html;
        region.active = true;
        region.class = match outcome_type {
            Some(kind) if !kind.is_empty() => format!("lab-outcome active {kind}"),
            _ => "lab-outcome active".to_string(),
        };
        true
    }

    /// Hide the modal and release the scroll lock. Content is kept, as a
    /// hidden DOM node would keep it.
    pub(crate) fn hide(&mut self) {
        self.state = ModalState::Closed;
        self.scroll_locked = false;
    }
}
