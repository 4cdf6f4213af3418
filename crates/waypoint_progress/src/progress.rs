//! Furthest-reached progress tracking

use crate::level::{LevelData, Position};
use waypoint_config::{ConfigDefaults, ConfigError, ConfigStore, DefaultEntry};

/// Config key holding the furthest chapter index reached
pub const KEY_MAX_CHAPTER: &str = "max_chapter";
/// Config key holding the furthest position, encoded
pub const KEY_MAX_LEVEL: &str = "max_level";
/// Config key holding the best score
pub const KEY_BEST_SCORE: &str = "best_score";
/// Config key for the debug overlay flag
pub const KEY_DEBUG: &str = "debug";

/// Tracks the furthest (chapter, level) a player has reached.
///
/// The tracker owns an injected [`ConfigStore`] and the read-only
/// level layout; one tracker per store/layout pair, no shared global
/// state. Loading is self-healing: missing or non-numeric stored
/// maxima are replaced with zeros and written back. Saved maxima only
/// ever grow, so a replayed early level can never regress progress.
pub struct ProgressTracker<S: ConfigStore> {
    store: S,
    levels: LevelData,
    defaults: ConfigDefaults,
    current: Position,
}

impl<S: ConfigStore> ProgressTracker<S> {
    /// Create a tracker and load persisted progress from `store`.
    ///
    /// Uses the standard defaults table (`best_score` defaults to 0).
    pub fn new(store: S, levels: LevelData) -> Result<Self, ConfigError> {
        let defaults =
            ConfigDefaults::new().with_entry(DefaultEntry::absent(KEY_BEST_SCORE, 0));
        Self::with_defaults(store, levels, defaults)
    }

    /// Create a tracker with a custom init-time defaults table.
    pub fn with_defaults(
        store: S,
        levels: LevelData,
        defaults: ConfigDefaults,
    ) -> Result<Self, ConfigError> {
        let mut tracker = Self {
            store,
            levels,
            defaults,
            current: Position::default(),
        };
        tracker.reload()?;
        Ok(tracker)
    }

    /// Re-read persisted progress and re-apply the defaults table.
    ///
    /// Missing or non-numeric `max_chapter`/`max_level` values are
    /// healed to 0 and persisted before the position is derived.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let max_chapter = self.load_or_heal(KEY_MAX_CHAPTER)?;
        let max_level = self.load_or_heal(KEY_MAX_LEVEL)?;

        self.current = Position::decode(max_chapter, max_level);
        self.defaults.apply(&mut self.store)?;
        Ok(())
    }

    fn load_or_heal(&mut self, key: &str) -> Result<i64, ConfigError> {
        match self.store.get_i64(key) {
            Some(value) => Ok(value),
            None => {
                self.store.set_i64(key, 0)?;
                Ok(0)
            }
        }
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.current
    }

    /// Level layout the tracker was built with
    pub fn levels(&self) -> &LevelData {
        &self.levels
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the tracker and hand the store back
    pub fn into_store(self) -> S {
        self.store
    }

    /// Position the player moves to on completing the current level.
    ///
    /// Steps to the next level of the current chapter, then to the
    /// first level of the next chapter, and finally sticks at the
    /// current position once the last level of the last chapter is
    /// reached. Pure; nothing is persisted.
    pub fn next_position(&self) -> Position {
        if !self.levels.is_last_level(self.current) {
            Position::new(self.current.chapter, self.current.level + 1)
        } else if !self.levels.is_last_chapter(self.current) {
            Position::new(self.current.chapter + 1, 0)
        } else {
            self.current
        }
    }

    /// Persist `pos` as the furthest position, if it is further.
    ///
    /// Both stored maxima are monotone: each is written only when the
    /// candidate is strictly greater, so out-of-order saves and level
    /// replays are no-ops. The in-memory position is then reassigned
    /// from the store, keeping the two views identical even when the
    /// writes were skipped.
    pub fn save_progress(&mut self, pos: Position) -> Result<(), ConfigError> {
        let stored_chapter = self.store.get_i64(KEY_MAX_CHAPTER).unwrap_or(0);
        if (pos.chapter as i64) > stored_chapter {
            self.store.set_i64(KEY_MAX_CHAPTER, pos.chapter as i64)?;
        }

        let stored_encoded = self.store.get_i64(KEY_MAX_LEVEL).unwrap_or(0);
        if pos.encode() > stored_encoded {
            self.store.set_i64(KEY_MAX_LEVEL, pos.encode())?;
        }

        let max_chapter = self.store.get_i64(KEY_MAX_CHAPTER).unwrap_or(0);
        let max_level = self.store.get_i64(KEY_MAX_LEVEL).unwrap_or(0);
        self.current = Position::decode(max_chapter, max_level);
        Ok(())
    }

    /// Persist the current position (no-op unless it beats the store)
    pub fn save_current(&mut self) -> Result<(), ConfigError> {
        self.save_progress(self.current)
    }

    /// Move to the next level after completing the current one.
    ///
    /// Returns `Ok(true)` when the position moved forward, `Ok(false)`
    /// once all content is exhausted. Safe to call repeatedly at the
    /// end of content; nothing further is written.
    pub fn advance(&mut self) -> Result<bool, ConfigError> {
        let next = self.next_position();
        if next != self.current {
            self.save_progress(next)?;
            log::debug!("Progress advanced to {}", self.current);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 1-indexed label of the current position, e.g. "1 - 1"
    pub fn position_label(&self) -> String {
        self.current.to_string()
    }

    /// Best score recorded so far, 0 when none
    pub fn best_score(&self) -> i64 {
        self.store.get_i64(KEY_BEST_SCORE).unwrap_or(0)
    }

    /// Record `score` if it beats the stored best.
    ///
    /// Returns whether a new best was written.
    pub fn record_score(&mut self, score: i64) -> Result<bool, ConfigError> {
        if score > self.best_score() {
            self.store.set_i64(KEY_BEST_SCORE, score)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether the embedding app's debug overlay is enabled
    pub fn debug_enabled(&self) -> bool {
        self.store.get_bool(KEY_DEBUG).unwrap_or(false)
    }
}
