//! End-to-end progress flow over the file-backed store
//!
//! These tests run the tracker the way an embedding game would: a
//! config file on disk, progress saved as levels are completed, and
//! the tracker rebuilt from the same file on the next launch.

use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use waypoint_progress::prelude::*;
use waypoint_progress::progress::{KEY_MAX_CHAPTER, KEY_MAX_LEVEL};

fn test_path(name: &str) -> PathBuf {
    temp_dir().join(format!("waypoint_flow_{}.json", name))
}

fn campaign() -> LevelData {
    LevelData::new(vec![
        ChapterData::new(vec![
            LevelEntry::new("f1"),
            LevelEntry::new("f2"),
            LevelEntry::new("f3"),
        ])
        .with_name("Forest"),
        ChapterData::new(vec![LevelEntry::new("c1"), LevelEntry::new("c2")])
            .with_name("Cavern"),
    ])
}

#[test]
fn progress_survives_restart() {
    let path = test_path("restart");
    let _ = fs::remove_file(&path); // Clean up

    // First launch: fresh file, play through chapter 0
    let mut tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    assert_eq!(tracker.position_label(), "1 - 1");
    assert_eq!(tracker.levels().chapter_count(), 2);

    assert!(tracker.advance().unwrap());
    assert!(tracker.advance().unwrap());
    assert!(tracker.advance().unwrap());
    assert_eq!(tracker.position(), Position::new(1, 0));
    drop(tracker);

    // Second launch over the same file
    let tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    assert_eq!(tracker.position(), Position::new(1, 0));
    assert_eq!(tracker.position_label(), "2 - 1");

    let _ = fs::remove_file(&path); // Clean up
}

#[test]
fn finishing_the_campaign_is_terminal() {
    let path = test_path("terminal");
    let _ = fs::remove_file(&path);

    let mut tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    while tracker.advance().unwrap() {}

    assert_eq!(tracker.position(), Position::new(1, 1));
    assert!(!tracker.advance().unwrap());

    // Still terminal after a restart
    let mut tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    assert!(!tracker.advance().unwrap());
    assert_eq!(tracker.position(), Position::new(1, 1));

    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_config_file_resets_to_defaults() {
    let path = test_path("corrupt");
    fs::write(&path, b"{ definitely not json").unwrap();

    let tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();

    assert_eq!(tracker.position(), Position::new(0, 0));
    assert_eq!(tracker.store().get_i64(KEY_MAX_CHAPTER), Some(0));
    assert_eq!(tracker.store().get_i64(KEY_MAX_LEVEL), Some(0));

    let _ = fs::remove_file(&path);
}

#[test]
fn best_score_and_progress_share_the_file() {
    let path = test_path("shared");
    let _ = fs::remove_file(&path);

    let mut tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    tracker.advance().unwrap();
    tracker.record_score(340).unwrap();
    drop(tracker);

    let tracker = ProgressTracker::new(FileStore::new(&path), campaign()).unwrap();
    assert_eq!(tracker.position(), Position::new(0, 1));
    assert_eq!(tracker.best_score(), 340);

    let _ = fs::remove_file(&path);
}
