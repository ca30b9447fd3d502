//! JSON Schema for catalog entries, generated from [`LabEntry`].

use schemars::schema_for;

use crate::catalog::LabEntry;
use crate::error::LabError;

/// Compiled validator for a single catalog entry.
pub struct CatalogSchema {
    schema: serde_json::Value,
    validator: jsonschema::Validator,
}

impl CatalogSchema {
    /// Generate and compile the entry schema.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Schema`] if the generated schema does not compile.
    pub fn new() -> Result<Self, LabError> {
        let schema = serde_json::to_value(schema_for!(LabEntry))?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| LabError::Schema(e.to_string()))?;
        Ok(Self { schema, validator })
    }

    /// The generated schema document.
    #[must_use]
    pub const fn schema(&self) -> &serde_json::Value {
        &self.schema
    }

    /// Every validation error for `entry`; empty when it conforms.
    #[must_use]
    pub fn check(&self, entry: &serde_json::Value) -> Vec<String> {
        self.validator
            .iter_errors(entry)
            .map(|e| e.to_string())
            .collect()
    }
}
