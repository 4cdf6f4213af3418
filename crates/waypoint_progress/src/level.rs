//! Level layout data and positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one chapter in the encoded position space.
///
/// A (chapter, level) pair is persisted as the single integer
/// `chapter * LEVELS_PER_CHAPTER + level`, so positions compare in
/// play order as plain integers. The encoding only orders correctly
/// while every chapter holds fewer than this many levels.
pub const LEVELS_PER_CHAPTER: i64 = 10_000;

/// One playable level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Level identifier (scene name, asset key, ...)
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl LevelEntry {
    /// Create a level entry
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// One chapter: an ordered run of levels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterData {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Levels in play order
    pub levels: Vec<LevelEntry>,
}

impl ChapterData {
    /// Create a chapter from its levels
    pub fn new(levels: Vec<LevelEntry>) -> Self {
        Self {
            name: String::new(),
            levels,
        }
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Ordered chapters of ordered levels, supplied by the embedding
/// application (typically deserialized from a bundled JSON asset).
/// The tracker only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelData {
    chapters: Vec<ChapterData>,
}

impl LevelData {
    /// Create level data from chapters
    pub fn new(chapters: Vec<ChapterData>) -> Self {
        Self { chapters }
    }

    /// Build level data from per-chapter level counts.
    ///
    /// Handy in tests and for games whose levels are purely
    /// procedural.
    pub fn from_counts(counts: &[usize]) -> Self {
        let chapters = counts
            .iter()
            .map(|&n| ChapterData::new((0..n).map(|i| LevelEntry::new(format!("{}", i))).collect()))
            .collect();
        Self { chapters }
    }

    /// Chapters in play order
    pub fn chapters(&self) -> &[ChapterData] {
        &self.chapters
    }

    /// Number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Number of levels in `chapter`, 0 if out of range
    pub fn level_count(&self, chapter: usize) -> usize {
        self.chapters.get(chapter).map(|c| c.levels.len()).unwrap_or(0)
    }

    /// Whether `pos` sits on the last level of its chapter
    pub fn is_last_level(&self, pos: Position) -> bool {
        let count = self.level_count(pos.chapter);
        count == 0 || pos.level + 1 >= count
    }

    /// Whether `pos` sits in the last chapter
    pub fn is_last_chapter(&self, pos: Position) -> bool {
        pos.chapter + 1 >= self.chapter_count()
    }
}

/// A (chapter, level) pair, both zero-based
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Chapter index
    pub chapter: usize,
    /// Level index within the chapter
    pub level: usize,
}

impl Position {
    /// Create a position
    pub fn new(chapter: usize, level: usize) -> Self {
        Self { chapter, level }
    }

    /// Encode into the single persisted integer.
    ///
    /// Positions encode in play order as long as the level index
    /// stays below [`LEVELS_PER_CHAPTER`]; a larger index would
    /// collide with the next chapter's range.
    pub fn encode(&self) -> i64 {
        debug_assert!(
            (self.level as i64) < LEVELS_PER_CHAPTER,
            "level index {} overflows the chapter encoding",
            self.level
        );
        self.chapter as i64 * LEVELS_PER_CHAPTER + self.level as i64
    }

    /// Recover a position from a stored chapter index and encoded
    /// level. A stale or mismatched encoding clamps to level 0 rather
    /// than producing a negative index.
    pub fn decode(chapter: i64, encoded: i64) -> Self {
        let chapter = chapter.max(0);
        let level = (encoded - chapter * LEVELS_PER_CHAPTER).max(0);
        Self {
            chapter: chapter as usize,
            level: level as usize,
        }
    }
}

impl fmt::Display for Position {
    /// Render the 1-indexed label shown to players, e.g. "3 - 5"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.chapter + 1, self.level + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let pos = Position::new(3, 42);
        assert_eq!(pos.encode(), 30_042);
        assert_eq!(Position::decode(3, 30_042), pos);
    }

    #[test]
    fn test_encode_orders_by_play_order() {
        let early = Position::new(0, 9_999).encode();
        let late = Position::new(1, 0).encode();
        assert!(early < late);
    }

    #[test]
    fn test_decode_clamps_stale_values() {
        // Encoded level from an older chapter than the stored max
        let pos = Position::decode(2, 5);
        assert_eq!(pos, Position::new(2, 0));

        let pos = Position::decode(-1, -7);
        assert_eq!(pos, Position::new(0, 0));
    }

    #[test]
    fn test_display_is_one_indexed() {
        assert_eq!(Position::new(0, 0).to_string(), "1 - 1");
        assert_eq!(Position::new(2, 4).to_string(), "3 - 5");
    }

    #[test]
    fn test_level_data_queries() {
        let data = LevelData::from_counts(&[3, 2]);

        assert_eq!(data.chapter_count(), 2);
        assert_eq!(data.level_count(0), 3);
        assert_eq!(data.level_count(5), 0);

        assert!(!data.is_last_level(Position::new(0, 1)));
        assert!(data.is_last_level(Position::new(0, 2)));
        assert!(data.is_last_chapter(Position::new(1, 0)));
        assert!(!data.is_last_chapter(Position::new(0, 0)));
    }

    #[test]
    fn test_entry_builder() {
        let entry = LevelEntry::new("boss").with_name("The Boss");
        assert_eq!(entry.id, "boss");
        assert_eq!(entry.name, "The Boss");
    }

    #[test]
    fn test_level_data_from_json() {
        let json = r#"[
            { "name": "Forest", "levels": [{ "id": "f1" }, { "id": "f2" }] },
            { "levels": [{ "id": "c1", "name": "Cavern Mouth" }] }
        ]"#;

        let data: LevelData = serde_json::from_str(json).unwrap();
        assert_eq!(data.chapter_count(), 2);
        assert_eq!(data.chapters()[0].name, "Forest");
        assert_eq!(data.chapters()[1].levels[0].name, "Cavern Mouth");
    }
}
