//! Waypoint Progress - Chapter/Level Progress Tracking
//!
//! This crate tracks how far a player has come through a game laid
//! out as ordered chapters of ordered levels, persisting the furthest
//! position reached via a [`waypoint_config`] store.
//!
//! # Features
//!
//! - Chapter/level position with single-integer encoding
//! - Monotone "furthest reached" persistence with self-healing load
//! - Advance-to-next-level transition over app-supplied level data
//! - Best-score tracking
//!
//! # Example
//!
//! ```ignore
//! use waypoint_progress::prelude::*;
//!
//! let levels = LevelData::from_counts(&[3, 2]);
//! let mut tracker = ProgressTracker::new(MemoryStore::new(), levels)?;
//!
//! if tracker.advance()? {
//!     println!("now at {}", tracker.position_label());
//! }
//! ```

pub mod level;
pub mod progress;

pub mod prelude {
    pub use crate::level::{ChapterData, LevelData, LevelEntry, Position, LEVELS_PER_CHAPTER};
    pub use crate::progress::ProgressTracker;
    pub use waypoint_config::prelude::*;
}

pub use prelude::*;
