//! Module identifiers.
//!
//! Module ids are the integers 1 through [`TOTAL_MODULES`]. Progress storage
//! keys every module as `module_<id>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::modules::TOTAL_MODULES;

/// Prefix of the per-module key inside the progress record.
pub const MODULE_KEY_PREFIX: &str = "module_";

/// A validated module identifier (1..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ModuleId(u8);

impl ModuleId {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(TOTAL_MODULES);

    /// Build an id, rejecting anything outside 1..=10.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownModule`] when `raw` is out of range.
    pub fn new(raw: u32) -> Result<Self, CoreError> {
        match u8::try_from(raw) {
            Ok(id) if (1..=TOTAL_MODULES).contains(&id) => Ok(Self(id)),
            _ => Err(CoreError::UnknownModule(raw)),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Key of this module in the progress record's `modules` map.
    #[must_use]
    pub fn storage_key(self) -> String {
        format!("{MODULE_KEY_PREFIX}{}", self.0)
    }

    /// Parse a `module_<id>` key back into an id.
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        key.strip_prefix(MODULE_KEY_PREFIX)?
            .parse::<u32>()
            .ok()
            .and_then(|raw| Self::new(raw).ok())
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.0 < TOTAL_MODULES {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// All ids in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=TOTAL_MODULES).map(Self)
    }
}

impl TryFrom<u32> for ModuleId {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for u32 {
    fn from(id: ModuleId) -> Self {
        Self::from(id.0)
    }
}

impl FromStr for ModuleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|_| CoreError::Validation(format!("not a module id: '{s}'")))?;
        Self::new(raw)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(10)]
    fn accepts_ids_in_range(#[case] raw: u32) {
        let id = ModuleId::new(raw).expect("id in range");
        assert_eq!(u32::from(id), raw);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(256)]
    #[case(u32::MAX)]
    fn rejects_ids_out_of_range(#[case] raw: u32) {
        assert!(matches!(
            ModuleId::new(raw),
            Err(CoreError::UnknownModule(value)) if value == raw
        ));
    }

    #[test]
    fn storage_key_roundtrip() {
        let id = ModuleId::new(3).unwrap();
        assert_eq!(id.storage_key(), "module_3");
        assert_eq!(ModuleId::from_storage_key("module_3"), Some(id));
        assert_eq!(ModuleId::from_storage_key("module_11"), None);
        assert_eq!(ModuleId::from_storage_key("mod_3"), None);
    }

    #[test]
    fn neighbours_stop_at_the_ends() {
        assert_eq!(ModuleId::FIRST.previous(), None);
        assert_eq!(ModuleId::LAST.next(), None);
        assert_eq!(ModuleId::FIRST.next(), ModuleId::new(2).ok());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<ModuleId>("7").is_ok());
        assert!(serde_json::from_str::<ModuleId>("12").is_err());
    }

    #[test]
    fn parses_from_trimmed_text() {
        assert_eq!(" 4 ".parse::<ModuleId>().unwrap().get(), 4);
        assert!("four".parse::<ModuleId>().is_err());
    }
}
