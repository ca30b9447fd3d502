//! The persisted progress record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fsa_core::{ModuleId, TOTAL_MODULES};
use serde::{Deserialize, Serialize};

/// Version written into every record. A stored record with any other
/// version is discarded and replaced with a fresh one.
pub const RECORD_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub persona: Option<String>,
    /// Derived from `modules`; see [`ProgressRecord::recompute_totals`].
    pub completed_modules: u8,
    /// Derived from `modules`; 0..=100.
    pub progress_percentage: u8,
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleProgress>,
}

impl ProgressRecord {
    /// Zero-state record stamped with `now`.
    #[must_use]
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            created_at: now,
            last_activity: now,
            persona: None,
            completed_modules: 0,
            progress_percentage: 0,
            modules: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_current_version(&self) -> bool {
        self.version == RECORD_VERSION
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&ModuleProgress> {
        self.modules.get(&id.storage_key())
    }

    /// Recompute `completed_modules` and `progress_percentage` from the
    /// module map. Only entries keyed by a valid module id count.
    pub fn recompute_totals(&mut self) {
        let completed = self
            .modules
            .iter()
            .filter(|(key, module)| module.completed && ModuleId::from_storage_key(key).is_some())
            .count();
        let completed = u8::try_from(completed).unwrap_or(TOTAL_MODULES);
        self.completed_modules = completed;
        self.progress_percentage = percentage(completed);
    }
}

/// `round(completed / TOTAL_MODULES * 100)`, rounding halves up.
#[must_use]
pub fn percentage(completed: u8) -> u8 {
    let total = u32::from(TOTAL_MODULES);
    let scaled = (u32::from(completed.min(TOTAL_MODULES)) * 100 + total / 2) / total;
    u8::try_from(scaled).unwrap_or(100)
}

/// Per-module state inside [`ProgressRecord::modules`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub id: u32,
    pub completed: bool,
    pub visited: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub attempts: u32,
    pub time_spent: u64,
    pub score: Option<f64>,
}

impl ModuleProgress {
    /// Defaulted entry for a module first touched at `now`.
    #[must_use]
    pub fn new(id: ModuleId, now: DateTime<Utc>) -> Self {
        Self {
            id: u32::from(id),
            completed: false,
            visited: false,
            started_at: now,
            completed_at: None,
            attempts: 0,
            time_spent: 0,
            score: None,
        }
    }
}

/// Optional data merged into a module on completion.
///
/// `score` overwrites the stored score; `time_spent` is added to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

impl CompletionMetadata {
    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub const fn with_time_spent(mut self, time_spent: u64) -> Self {
        self.time_spent = Some(time_spent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 10)]
    #[case(5, 50)]
    #[case(10, 100)]
    #[case(12, 100)]
    fn percentage_uses_fixed_denominator(#[case] completed: u8, #[case] expected: u8) {
        assert_eq!(percentage(completed), expected);
    }

    #[test]
    fn fresh_record_is_zero_state() {
        let record = ProgressRecord::fresh(Utc::now());
        assert!(record.is_current_version());
        assert_eq!(record.completed_modules, 0);
        assert_eq!(record.progress_percentage, 0);
        assert!(record.persona.is_none());
        assert!(record.modules.is_empty());
    }

    #[test]
    fn recompute_ignores_foreign_keys() {
        let now = Utc::now();
        let mut record = ProgressRecord::fresh(now);
        let id = ModuleId::new(2).unwrap();
        let mut done = ModuleProgress::new(id, now);
        done.completed = true;
        record.modules.insert(id.storage_key(), done.clone());
        record.modules.insert("module_42".into(), done);
        record.recompute_totals();
        assert_eq!(record.completed_modules, 1);
        assert_eq!(record.progress_percentage, 10);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let now = Utc::now();
        let mut record = ProgressRecord::fresh(now);
        let id = ModuleId::new(1).unwrap();
        record.modules.insert(id.storage_key(), ModuleProgress::new(id, now));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("progressPercentage").is_some());
        assert_eq!(value["modules"]["module_1"]["timeSpent"], 0);
        assert!(value["modules"]["module_1"]["completedAt"].is_null());
    }

    #[test]
    fn metadata_skips_absent_fields() {
        let json = serde_json::to_string(&CompletionMetadata::default().with_time_spent(5)).unwrap();
        assert_eq!(json, r#"{"timeSpent":5}"#);
    }
}
