//! Unit tests for settings_watcher module.

use photocraft::settings::Settings;
use photocraft::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone());
    assert!(watcher.is_ok());
    assert_eq!(watcher.unwrap().path(), settings_path.as_path());
}

#[test]
fn test_watcher_without_file_yet() {
    // The directory is watched, so the file itself may not exist yet
    let dir = tempdir().unwrap();
    let watcher = SettingsWatcher::new(dir.path().join("settings.json"));
    assert!(watcher.is_ok());
}

#[test]
fn test_watcher_creates_missing_settings_dir() {
    // First launch: the app directory under the config dir is not there yet
    let dir = tempdir().unwrap();
    let app_dir = dir.path().join("photocraft");
    let watcher = SettingsWatcher::new(app_dir.join("settings.json"));
    assert!(watcher.is_ok());
    assert!(app_dir.is_dir());
}

#[test]
fn test_default_paths() {
    // These should return Some on most systems
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
}

#[test]
fn test_poll_without_changes() {
    let dir = tempdir().unwrap();
    let mut watcher = SettingsWatcher::new(dir.path().join("settings.json")).unwrap();
    assert_eq!(watcher.poll(), None);
}

/// This test is ignored because file watcher event detection is inherently
/// timing-dependent and platform-specific. It requires OS-level file system
/// events which are not deterministic in CI environments.
///
/// To run: cargo test test_save_is_detected -- --ignored
#[test]
#[ignore]
fn test_save_is_detected() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    Settings::default().save_to(&settings_path).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = None;
    while Instant::now() < deadline && seen.is_none() {
        seen = watcher.poll();
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(matches!(
        seen,
        Some(SettingsEvent::Created | SettingsEvent::Modified)
    ));
}
