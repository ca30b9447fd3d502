//! Lab catalog data model and loading.
//!
//! A catalog document looks like `{"popups": {"<lab-id>": <LabEntry>, ...}}`.
//! Each entry is checked against the schema generated from [`LabEntry`]
//! before it is deserialized. Entries that fail are left out of the catalog
//! and reported as [`CatalogDiagnostic`]s; one bad entry never fails the
//! whole load.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LabError;
use crate::schema::CatalogSchema;

/// One interactive lab as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(flatten)]
    pub kind: LabKind,
}

/// Type-specific payload, selected by the entry's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LabKind {
    Calculator(CalculatorLab),
    Scenario(ScenarioLab),
    Checklist(ChecklistLab),
    Info(InfoLab),
}

impl LabKind {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Calculator(_) => "calculator",
            Self::Scenario(_) => "scenario",
            Self::Checklist(_) => "checklist",
            Self::Info(_) => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorLab {
    #[serde(default)]
    pub inputs: Vec<Input>,
    /// Label of the calculate button. Defaults to "Calculate".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Registered computation to run. Defaults to the lab id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
}

impl CalculatorLab {
    pub const DEFAULT_BUTTON_TEXT: &'static str = "Calculate";

    #[must_use]
    pub fn button_text(&self) -> &str {
        self.button_text
            .as_deref()
            .unwrap_or(Self::DEFAULT_BUTTON_TEXT)
    }

    #[must_use]
    pub fn input(&self, id: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<InputValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl Input {
    /// Raw control value before any user edit.
    ///
    /// A select starts on its `default` when that names one of its options,
    /// otherwise on the first option.
    #[must_use]
    pub fn initial_value(&self) -> String {
        let default = self.default.as_ref().map(ToString::to_string);
        match self.kind {
            InputKind::Select => default
                .filter(|value| self.options.iter().any(|option| &option.value == value))
                .or_else(|| self.options.first().map(|option| option.value.clone()))
                .unwrap_or_default(),
            InputKind::Number | InputKind::Range => default.unwrap_or_default(),
        }
    }

    /// Text shown next to a slider: `prefix + value + suffix`.
    #[must_use]
    pub fn display_value(&self, raw: &str) -> String {
        format!(
            "{}{raw}{}",
            self.prefix.as_deref().unwrap_or_default(),
            self.suffix.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Number,
    Range,
    Select,
}

/// A default or gathered input value: numeric for number and range fields,
/// text for selects or unparseable entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioLab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub title: String,
    pub description: String,
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,
    /// Extra CSS class of the outcome region (`warning`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistLab {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoLab {
    #[serde(default)]
    pub sections: Vec<InfoSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InfoSection {
    pub title: String,
    pub content: String,
}

/// A catalog entry left out at load time, with the reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogDiagnostic {
    pub lab_id: String,
    pub messages: Vec<String>,
}

/// The loaded set of labs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    entries: BTreeMap<String, LabEntry>,
    diagnostics: Vec<CatalogDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_error: Option<String>,
}

impl Catalog {
    /// Parse a catalog document, skipping malformed entries.
    ///
    /// # Errors
    ///
    /// Returns [`LabError`] when the document is not JSON, has no `popups`
    /// object, or the entry schema cannot be compiled.
    pub fn parse(document: &str) -> Result<Self, LabError> {
        let schema = CatalogSchema::new()?;
        let mut root: serde_json::Value = serde_json::from_str(document)?;
        let popups = match root.get_mut("popups").map(serde_json::Value::take) {
            Some(serde_json::Value::Object(popups)) => popups,
            _ => return Err(LabError::MissingPopups),
        };

        let mut catalog = Self::default();
        for (lab_id, value) in popups {
            let errors = schema.check(&value);
            if !errors.is_empty() {
                tracing::warn!(lab = %lab_id, errors = errors.len(), "skipping invalid lab entry");
                catalog.diagnostics.push(CatalogDiagnostic {
                    lab_id,
                    messages: errors,
                });
                continue;
            }

            match serde_json::from_value::<LabEntry>(value) {
                Ok(entry) => {
                    catalog.entries.insert(lab_id, entry);
                }
                Err(error) => {
                    tracing::warn!(lab = %lab_id, %error, "skipping undecodable lab entry");
                    catalog.diagnostics.push(CatalogDiagnostic {
                        lab_id,
                        messages: vec![error.to_string()],
                    });
                }
            }
        }

        tracing::debug!(
            labs = catalog.entries.len(),
            skipped = catalog.diagnostics.len(),
            "lab catalog parsed"
        );
        Ok(catalog)
    }

    /// Empty catalog recording why loading failed.
    #[must_use]
    pub fn failed(error: &LabError) -> Self {
        Self {
            load_error: Some(error.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, lab_id: &str) -> Option<&LabEntry> {
        self.entries.get(lab_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[CatalogDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "popups": {
            "budget-basics": {
                "title": "Budget Basics",
                "type": "calculator",
                "inputs": [
                    {"id": "amount", "label": "Amount", "type": "range",
                     "default": 100, "min": 0, "max": 1000, "prefix": "$"}
                ]
            },
            "first-paycheck": {
                "title": "First Paycheck",
                "type": "scenario",
                "scenario": "You just got paid.",
                "choices": [
                    {"title": "Spend it", "description": "All of it", "outcome": "Broke again",
                     "outcomeType": "warning"}
                ],
                "unknownField": true
            },
            "no-title": {"type": "checklist", "items": ["a"]},
            "bad-type": {"title": "Nope", "type": "quiz"},
            "bad-items": {"title": "Items", "type": "checklist", "items": "not-a-list"}
        }
    }"#;

    #[test]
    fn parses_valid_entries_and_skips_invalid_ones() {
        let catalog = Catalog::parse(DOC).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("budget-basics").is_some());
        assert!(catalog.get("first-paycheck").is_some());

        let mut skipped: Vec<&str> = catalog
            .diagnostics()
            .iter()
            .map(|d| d.lab_id.as_str())
            .collect();
        skipped.sort_unstable();
        assert_eq!(skipped, vec!["bad-items", "bad-type", "no-title"]);
        assert!(catalog.diagnostics().iter().all(|d| !d.messages.is_empty()));
    }

    #[test]
    fn optional_fields_default() {
        let catalog = Catalog::parse(DOC).unwrap();
        let entry = catalog.get("budget-basics").unwrap();
        let LabKind::Calculator(lab) = &entry.kind else {
            panic!("expected calculator");
        };
        assert_eq!(lab.button_text(), "Calculate");
        assert!(lab.calculation.is_none());
        let input = lab.input("amount").unwrap();
        assert_eq!(input.kind, InputKind::Range);
        assert_eq!(input.initial_value(), "100");
        assert_eq!(input.display_value("250"), "$250");
    }

    #[test]
    fn missing_popups_is_a_load_error() {
        assert!(matches!(
            Catalog::parse(r#"{"labs": {}}"#),
            Err(LabError::MissingPopups)
        ));
        assert!(matches!(
            Catalog::parse(r#"{"popups": []}"#),
            Err(LabError::MissingPopups)
        ));
        assert!(matches!(Catalog::parse("not json"), Err(LabError::Json(_))));
    }

    #[test]
    fn select_starts_on_matching_default_or_first_option() {
        let mut input: Input = serde_json::from_value(serde_json::json!({
            "id": "term", "label": "Term", "type": "select",
            "options": [{"value": "15", "label": "15 years"}, {"value": "30", "label": "30 years"}]
        }))
        .unwrap();
        assert_eq!(input.initial_value(), "15");
        input.default = Some(InputValue::Text("30".into()));
        assert_eq!(input.initial_value(), "30");
        input.default = Some(InputValue::Text("40".into()));
        assert_eq!(input.initial_value(), "15");
    }

    #[test]
    fn input_kind_defaults_to_number() {
        let input: Input =
            serde_json::from_value(serde_json::json!({"id": "x", "label": "X"})).unwrap();
        assert_eq!(input.kind, InputKind::Number);
        assert_eq!(input.initial_value(), "");
    }

    #[test]
    fn numeric_defaults_display_like_plain_numbers() {
        assert_eq!(InputValue::Number(100.0).to_string(), "100");
        assert_eq!(InputValue::Number(0.5).to_string(), "0.5");
    }
}
