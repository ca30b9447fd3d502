//! The popup lab engine.

use tokio::sync::OnceCell;

use crate::calculation::{CalculationRegistry, InputValues, LabResult};
use crate::catalog::{Catalog, InputKind, InputValue, LabEntry, LabKind};
use crate::modal::{Key, Modal};
use crate::render;
use crate::source::CatalogSource;

/// Loads the lab catalog once and drives the modal.
///
/// Every operation degrades to a logged no-op on a missing lab, a missing
/// computation or a region that is not on screen. Nothing here returns an
/// error to the caller.
#[derive(Debug)]
pub struct PopupLabs<S> {
    source: S,
    catalog: OnceCell<Catalog>,
    registry: CalculationRegistry,
    modal: Modal,
}

impl<S: CatalogSource> PopupLabs<S> {
    /// Engine with the built-in computations.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_registry(source, CalculationRegistry::with_builtins())
    }

    #[must_use]
    pub fn with_registry(source: S, registry: CalculationRegistry) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
            registry,
            modal: Modal::default(),
        }
    }

    /// Load the catalog if that has not happened yet.
    ///
    /// Concurrent callers share a single load. A failed load is final: the
    /// catalog stays empty and records the error, and later calls do not
    /// retry.
    pub async fn init(&self) -> &Catalog {
        self.catalog
            .get_or_init(|| async {
                let origin = self.source.describe();
                let loaded = match self.source.fetch().await {
                    Ok(document) => Catalog::parse(&document),
                    Err(error) => Err(error),
                };
                match loaded {
                    Ok(catalog) => {
                        tracing::info!(%origin, labs = catalog.len(), "lab catalog loaded");
                        catalog
                    }
                    Err(error) => {
                        tracing::error!(%origin, %error, "failed to load lab catalog");
                        Catalog::failed(&error)
                    }
                }
            })
            .await
    }

    /// The catalog, if [`Self::init`] has completed.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.get()
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub const fn registry(&self) -> &CalculationRegistry {
        &self.registry
    }

    pub const fn registry_mut(&mut self) -> &mut CalculationRegistry {
        &mut self.registry
    }

    /// Open `lab_id`, loading the catalog first if needed. An unknown id
    /// leaves the modal as it was and returns `false`.
    pub async fn open(&mut self, lab_id: &str) -> bool {
        let Some(entry) = self.init().await.get(lab_id).cloned() else {
            tracing::error!(lab = lab_id, "lab not found");
            return false;
        };

        self.modal.show(lab_id, render::render_lab(lab_id, &entry));
        match &entry.kind {
            LabKind::Calculator(lab) => {
                self.modal.add_result_region();
                for input in &lab.inputs {
                    let initial = input.initial_value();
                    if input.kind == InputKind::Range {
                        self.modal
                            .set_slider_label(&input.id, input.display_value(&initial));
                    }
                    self.modal.set_input(&input.id, initial);
                }
            }
            LabKind::Scenario(_) => self.modal.add_outcome_region(),
            LabKind::Checklist(_) | LabKind::Info(_) => {}
        }

        tracing::debug!(lab = lab_id, kind = entry.kind.type_name(), "lab opened");
        true
    }

    /// Close the modal. Safe to call when nothing is open.
    pub fn close(&mut self) {
        if let Some(lab_id) = self.modal.open_lab() {
            tracing::debug!(lab = lab_id, "lab closed");
        }
        self.modal.hide();
    }

    /// Keyboard handling: Escape closes an open lab. Returns whether the key
    /// was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.modal.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Change a control of the open lab, as typing or dragging would. Sliders
    /// also refresh their value label.
    pub fn set_input(&mut self, input_id: &str, raw: &str) -> bool {
        let Some(entry) = self.open_entry() else {
            tracing::warn!(input = input_id, "no lab open");
            return false;
        };
        let LabKind::Calculator(lab) = &entry.kind else {
            tracing::warn!(input = input_id, "open lab has no inputs");
            return false;
        };
        let Some(input) = lab.input(input_id) else {
            tracing::warn!(input = input_id, "unknown input");
            return false;
        };

        let label = (input.kind == InputKind::Range).then(|| input.display_value(raw));
        if let Some(label) = label {
            self.modal.set_slider_label(input_id, label);
        }
        self.modal.set_input(input_id, raw.to_string());
        true
    }

    /// Gather the open calculator's inputs, run its computation and show the
    /// result. A lab that is not open, not a calculator, or has no registered
    /// computation is a no-op returning `None`.
    pub fn calculate(&mut self, lab_id: &str) -> Option<LabResult> {
        let entry = self.catalog.get()?.get(lab_id)?;
        let LabKind::Calculator(lab) = &entry.kind else {
            tracing::warn!(lab = lab_id, "lab is not a calculator");
            return None;
        };
        if self.modal.open_lab() != Some(lab_id) {
            tracing::warn!(lab = lab_id, "calculator is not on screen");
            return None;
        }

        let name = lab.calculation.as_deref().unwrap_or(lab_id);
        let Some(calculation) = self.registry.get(name) else {
            tracing::warn!(lab = lab_id, calculation = name, "no computation registered");
            return None;
        };

        let inputs: InputValues = lab
            .inputs
            .iter()
            .map(|input| {
                let raw = self.modal.input(&input.id).unwrap_or_default();
                (input.id.clone(), gather(input.kind, raw))
            })
            .collect();

        let result = match calculation.calculate(&inputs) {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(lab = lab_id, %error, "calculation failed");
                return None;
            }
        };

        self.modal.show_result(render::render_result(&result));
        Some(result)
    }

    /// Show the outcome of choice `index` of the open scenario.
    pub fn select_choice(&mut self, lab_id: &str, index: usize) -> bool {
        let Some(choice) = self
            .catalog
            .get()
            .and_then(|catalog| catalog.get(lab_id))
            .and_then(|entry| match &entry.kind {
                LabKind::Scenario(lab) => lab.choices.get(index),
                _ => None,
            })
        else {
            tracing::warn!(lab = lab_id, index, "no such scenario choice");
            return false;
        };
        if self.modal.open_lab() != Some(lab_id) {
            tracing::warn!(lab = lab_id, "scenario is not on screen");
            return false;
        }

        self.modal
            .show_outcome(render::render_outcome(choice), choice.outcome_type.as_deref())
    }

    fn open_entry(&self) -> Option<&LabEntry> {
        let lab_id = self.modal.open_lab()?;
        self.catalog.get()?.get(lab_id)
    }
}

/// Number and range fields parse as numbers when they can; selects and
/// unparseable text stay strings.
fn gather(kind: InputKind, raw: &str) -> InputValue {
    match kind {
        InputKind::Number | InputKind::Range => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map_or_else(|| InputValue::Text(raw.to_string()), InputValue::Number),
        InputKind::Select => InputValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InlineCatalogSource;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(InputKind::Number, "250", InputValue::Number(250.0))]
    #[case(InputKind::Range, " 0 ", InputValue::Number(0.0))]
    #[case(InputKind::Number, "abc", InputValue::Text("abc".into()))]
    #[case(InputKind::Number, "NaN", InputValue::Text("NaN".into()))]
    #[case(InputKind::Select, "30", InputValue::Text("30".into()))]
    fn gathers_by_kind(#[case] kind: InputKind, #[case] raw: &str, #[case] expected: InputValue) {
        assert_eq!(gather(kind, raw), expected);
    }

    #[tokio::test]
    async fn init_runs_once_and_failure_is_final() {
        let labs = PopupLabs::new(InlineCatalogSource::new("{broken"));
        let first = labs.init().await;
        assert!(first.is_empty());
        assert!(first.load_error().is_some());
        assert!(std::ptr::eq(first, labs.init().await));
    }

    #[tokio::test]
    async fn calculate_before_init_is_noop() {
        let mut labs = PopupLabs::new(InlineCatalogSource::new(r#"{"popups":{}}"#));
        assert!(labs.calculate("anything").is_none());
        assert!(labs.catalog().is_none());
    }
}
