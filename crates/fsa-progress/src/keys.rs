//! Namespaced storage keys.

/// The three keys the progress manager owns. `clear_all_progress` removes
/// all of them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub progress: String,
    pub assessment_completed: String,
    pub persona: String,
}

impl StorageKeys {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            progress: format!("{namespace}-progress"),
            assessment_completed: format!("{namespace}-assessment-completed"),
            persona: format!("{namespace}-persona"),
        }
    }

    /// Auxiliary keys cleared together with the main record.
    #[must_use]
    pub fn auxiliary(&self) -> [&str; 2] {
        [&self.assessment_completed, &self.persona]
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new("fsa")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespace_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.progress, "fsa-progress");
        assert_eq!(keys.auxiliary(), ["fsa-assessment-completed", "fsa-persona"]);
    }
}
