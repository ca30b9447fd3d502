//! Named computations that calculator labs dispatch to.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::InputValue;
use crate::error::CalculationError;

/// Gathered calculator inputs, keyed by input id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputValues(BTreeMap<String, InputValue>);

impl InputValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: InputValue) {
        self.0.insert(id.into(), value);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InputValue> {
        self.0.get(id)
    }

    /// Numeric value of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] when the input is absent or not a number.
    pub fn number(&self, id: &str) -> Result<f64, CalculationError> {
        match self.get(id) {
            Some(InputValue::Number(value)) => Ok(*value),
            Some(InputValue::Text(text)) => Err(CalculationError::NotNumeric {
                id: id.to_string(),
                value: text.clone(),
            }),
            None => Err(CalculationError::MissingInput(id.to_string())),
        }
    }

    /// Like [`Self::number`] but also rejects negative values.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] when the input is absent, not a number or
    /// negative.
    pub fn non_negative(&self, id: &str) -> Result<f64, CalculationError> {
        let value = self.number(id)?;
        if value < 0.0 {
            return Err(CalculationError::OutOfRange {
                id: id.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        Ok(value)
    }

    /// Like [`Self::non_negative`] for an optional field: absent or blank
    /// reads as zero, anything else must still be a non-negative number.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] when a filled-in value is not a number or
    /// is negative.
    pub fn optional_non_negative(&self, id: &str) -> Result<f64, CalculationError> {
        match self.get(id) {
            None => Ok(0.0),
            Some(InputValue::Text(text)) if text.trim().is_empty() => Ok(0.0),
            Some(_) => self.non_negative(id),
        }
    }

    /// Text form of `id`, whatever its kind.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(ToString::to_string)
    }
}

impl<K: Into<String>> FromIterator<(K, InputValue)> for InputValues {
    fn from_iter<T: IntoIterator<Item = (K, InputValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Output of a calculator: either a single sentence or a metrics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabResult {
    Text(String),
    Report {
        metrics: Vec<Metric>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl LabResult {
    #[must_use]
    pub const fn report(metrics: Vec<Metric>) -> Self {
        Self::Report {
            metrics,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(self, text: impl Into<String>) -> Self {
        match self {
            Self::Report { metrics, .. } => Self::Report {
                metrics,
                message: Some(text.into()),
            },
            Self::Text(_) => Self::Text(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    /// Extra CSS class of the value (`warning`, `danger`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Metric {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: None,
        }
    }

    #[must_use]
    pub fn warning(self) -> Self {
        self.with_kind("warning")
    }

    #[must_use]
    pub fn danger(self) -> Self {
        self.with_kind("danger")
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A pure computation from gathered inputs to a displayable result.
pub trait Calculation: Send + Sync {
    /// Run the computation.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] when a required input is missing or
    /// unusable.
    fn calculate(&self, inputs: &InputValues) -> Result<LabResult, CalculationError>;
}

impl<F> Calculation for F
where
    F: Fn(&InputValues) -> Result<LabResult, CalculationError> + Send + Sync,
{
    fn calculate(&self, inputs: &InputValues) -> Result<LabResult, CalculationError> {
        self(inputs)
    }
}

/// Name → computation lookup used by calculator labs.
#[derive(Clone, Default)]
pub struct CalculationRegistry {
    calculations: HashMap<String, Arc<dyn Calculation>>,
}

impl CalculationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a computation under `name`.
    pub fn register(&mut self, name: impl Into<String>, calculation: impl Calculation + 'static) {
        self.calculations.insert(name.into(), Arc::new(calculation));
    }

    /// Register a plain function or closure under `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, calculation: F)
    where
        F: Fn(&InputValues) -> Result<LabResult, CalculationError> + Send + Sync + 'static,
    {
        self.register(name, calculation);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Calculation> {
        self.calculations.get(name).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.calculations.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.calculations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for CalculationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculationRegistry")
            .field("names", &self.names())
            .finish()
    }
}
