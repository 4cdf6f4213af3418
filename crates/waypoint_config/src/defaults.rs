//! Init-time configuration defaults

use crate::store::{ConfigError, ConfigStore};
use serde_json::Value;

/// One defaultable configuration entry.
///
/// `invalid` is the sentinel that marks the stored value as unusable;
/// `Value::Null` matches both an explicit null and a missing key.
#[derive(Debug, Clone)]
pub struct DefaultEntry {
    /// Configuration key
    pub key: String,
    /// Stored value treated as "not really set"
    pub invalid: Value,
    /// Value written when the current one is absent or invalid
    pub default: Value,
}

impl DefaultEntry {
    /// Default `key` to `default` when it is absent or null
    pub fn absent(key: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            invalid: Value::Null,
            default: default.into(),
        }
    }

    /// Set the sentinel marking a stored value as invalid
    pub fn with_invalid(mut self, invalid: impl Into<Value>) -> Self {
        self.invalid = invalid.into();
        self
    }
}

/// Table of defaults applied once at startup.
///
/// Healing is silent toward the caller; each healed key is logged at
/// debug level.
#[derive(Debug, Clone, Default)]
pub struct ConfigDefaults {
    entries: Vec<DefaultEntry>,
}

impl ConfigDefaults {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    pub fn with_entry(mut self, entry: DefaultEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Registered entries
    pub fn entries(&self) -> &[DefaultEntry] {
        &self.entries
    }

    /// Write each entry's default for every key whose current value
    /// is absent or equals the entry's invalid sentinel. Returns the
    /// number of keys healed.
    pub fn apply<S: ConfigStore>(&self, store: &mut S) -> Result<usize, ConfigError> {
        let mut healed = 0;
        for entry in &self.entries {
            let current = store.get(&entry.key).unwrap_or(Value::Null);
            if current == entry.invalid {
                log::debug!("Defaulting config key '{}' to {}", entry.key, entry.default);
                store.set(&entry.key, entry.default.clone())?;
                healed += 1;
            }
        }
        Ok(healed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde_json::json;

    fn table() -> ConfigDefaults {
        let table = ConfigDefaults::new().with_entry(DefaultEntry::absent("best_score", 0));
        assert_eq!(table.entries().len(), 1);
        table
    }

    #[test]
    fn test_absent_key_is_defaulted() {
        let mut store = MemoryStore::new();

        let healed = table().apply(&mut store).unwrap();

        assert_eq!(healed, 1);
        assert_eq!(store.get_i64("best_score"), Some(0));
    }

    #[test]
    fn test_existing_value_is_kept() {
        let mut store = MemoryStore::new();
        store.set_i64("best_score", 250).unwrap();

        let healed = table().apply(&mut store).unwrap();

        assert_eq!(healed, 0);
        assert_eq!(store.get_i64("best_score"), Some(250));
    }

    #[test]
    fn test_explicit_zero_is_not_healed() {
        let mut store = MemoryStore::new();
        store.set_i64("best_score", 0).unwrap();

        let healed = table().apply(&mut store).unwrap();

        assert_eq!(healed, 0);
    }

    #[test]
    fn test_custom_invalid_sentinel() {
        let defaults = ConfigDefaults::new()
            .with_entry(DefaultEntry::absent("volume", 100).with_invalid(-1));

        let mut store = MemoryStore::new();
        store.set("volume", json!(-1)).unwrap();

        defaults.apply(&mut store).unwrap();
        assert_eq!(store.get_i64("volume"), Some(100));
    }
}
