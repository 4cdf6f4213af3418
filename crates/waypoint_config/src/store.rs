//! Configuration store contract

use serde_json::Value;
use thiserror::Error;

/// Configuration store errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key/value persistence contract.
///
/// Absence is `None`, never an error: a key that was never written,
/// or whose stored bytes cannot be read back, reads as `None`. A
/// stored falsy value such as `0` or `false` is still `Some`, so
/// callers can tell "unset" from "set to zero" without truthiness
/// tricks.
pub trait ConfigStore {
    /// Get the stored JSON value for `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Durably store `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;

    /// Get an integer value. `None` if absent or not a number.
    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    /// Get a float value. `None` if absent or not a number.
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    /// Get a boolean value. `None` if absent or not a boolean.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Get a string value. `None` if absent or not a string.
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Store an integer value.
    fn set_i64(&mut self, key: &str, value: i64) -> Result<(), ConfigError> {
        self.set(key, Value::from(value))
    }

    /// Store a boolean value.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), ConfigError> {
        self.set(key, Value::from(value))
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}
