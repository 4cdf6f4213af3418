//! Waypoint Config - Durable Key/Value Configuration
//!
//! This crate provides the persistence layer for Waypoint: a flat
//! string-keyed map of JSON values with interchangeable backends.
//!
//! # Features
//!
//! - `ConfigStore` trait with typed accessors
//! - File-backed store (one JSON object per file)
//! - In-memory store for tests and browser-like embeddings
//! - Init-time defaulting table for self-healing values
//!
//! # Example
//!
//! ```ignore
//! use waypoint_config::prelude::*;
//!
//! let mut store = FileStore::new("config.json");
//! store.set_i64("best_score", 120)?;
//! assert_eq!(store.get_i64("best_score"), Some(120));
//! ```

pub mod defaults;
pub mod file;
pub mod memory;
pub mod store;

pub mod prelude {
    pub use crate::defaults::{ConfigDefaults, DefaultEntry};
    pub use crate::file::FileStore;
    pub use crate::memory::MemoryStore;
    pub use crate::store::{ConfigError, ConfigStore};
}

pub use prelude::*;
