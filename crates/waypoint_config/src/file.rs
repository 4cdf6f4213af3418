//! File-backed configuration store

use crate::store::{ConfigError, ConfigStore};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Durable store holding a single JSON object in one file.
///
/// Every `get` re-reads the file and every `set` does a
/// read-modify-write, so there is never a cached copy to go stale.
/// One process is assumed to own the file; there is no cross-process
/// locking.
///
/// A missing file reads as an empty map. A file that no longer parses
/// as a JSON object also reads as an empty map, so corrupted
/// configuration degrades to defaults instead of aborting. The next
/// `set` rewrites the file from scratch.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is created on the first `set`; construction never
    /// touches the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Pretty-print the JSON file (useful while debugging saves)
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Map<String, Value> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // No file yet is the normal fresh-install case
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Map::new(),
            Err(err) => {
                log::warn!(
                    "Failed to read config file {}: {}",
                    self.path.display(),
                    err
                );
                return Map::new();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => map,
            _ => {
                log::warn!(
                    "Config file {} is not a JSON object, treating as empty",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let bytes = if self.pretty {
            serde_json::to_vec_pretty(map)
        } else {
            serde_json::to_vec(map)
        }
        .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.read_map().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}
