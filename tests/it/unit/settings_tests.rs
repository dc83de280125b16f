//! Unit tests for settings module.

use photocraft::content::Locale;
use photocraft::settings::{Settings, SettingsChange, SettingsError, default_settings_path};
use std::time::Duration;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.locale, Locale::En);
    assert!(!settings.reduce_motion);
    assert!(settings.autoplay);
    assert!(settings.prefetch_images);
}

#[test]
fn test_default_path_ends_with_app_dir() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("photocraft/settings.json"));
    }
}

#[test]
fn test_missing_file_is_none() {
    let dir = tempdir().unwrap();
    let loaded = Settings::load_from(&dir.path().join("settings.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        locale: Locale::Ru,
        reduce_motion: true,
        autoplay: false,
        prefetch_images: false,
    };

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path).unwrap(), Some(settings));
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "locale": "ru" }"#).unwrap();

    let settings = Settings::load_or_default(&path);
    assert_eq!(settings.locale, Locale::Ru);
    assert!(settings.autoplay);
}

#[test]
fn test_broken_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Json { .. }));
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn snapshot_settings_file() {
    let settings = Settings {
        reduce_motion: true,
        ..Default::default()
    };
    insta::assert_json_snapshot!(settings, @r#"
    {
      "locale": "en",
      "reduce_motion": true,
      "autoplay": true,
      "prefetch_images": true
    }
    "#);
}

#[test]
fn test_carousel_timing_follows_motion_and_autoplay() {
    let timing = Settings::default().carousel_timing();
    assert_eq!(timing.transition, Duration::from_millis(500));
    assert_eq!(timing.autoplay, Some(Duration::from_millis(6000)));

    let still = Settings {
        reduce_motion: true,
        autoplay: false,
        ..Settings::default()
    };
    let timing = still.carousel_timing();
    assert_eq!(timing.transition, Duration::ZERO);
    assert_eq!(timing.autoplay, None);
}

#[test]
fn test_reload_without_changes_is_empty() {
    let settings = Settings::default();
    assert!(settings.changes_to(&settings.clone(), None).is_empty());
}

#[test]
fn test_reload_of_unrelated_field_keeps_locale() {
    let current = Settings::default();
    let next = Settings {
        autoplay: false,
        ..current.clone()
    };
    let change = current.changes_to(&next, None);
    assert_eq!(
        change,
        SettingsChange {
            locale: None,
            autoplay: Some(false),
            reduce_motion: None,
        }
    );
}

#[test]
fn test_reload_respects_locale_flag() {
    // Launched with --locale ru while the file says en
    let current = Settings::default();
    let next = Settings {
        locale: Locale::Ru,
        autoplay: false,
        ..current.clone()
    };
    let change = current.changes_to(&next, Some(Locale::Ru));
    assert_eq!(change.locale, None);
    assert_eq!(change.autoplay, Some(false));

    let back_to_en = next.changes_to(&current, Some(Locale::Ru));
    assert_eq!(back_to_en.locale, None);
}

#[test]
fn test_reload_applies_locale_edit_without_flag() {
    let current = Settings::default();
    let next = Settings {
        locale: Locale::Ru,
        ..current.clone()
    };
    assert_eq!(current.changes_to(&next, None).locale, Some(Locale::Ru));
}

#[test]
fn test_reload_reports_reduce_motion_both_ways() {
    let current = Settings::default();
    let still = Settings {
        reduce_motion: true,
        ..current.clone()
    };
    assert_eq!(current.changes_to(&still, None).reduce_motion, Some(true));
    assert_eq!(still.changes_to(&current, None).reduce_motion, Some(false));
}

#[test]
fn test_first_run_writes_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photocraft").join("settings.json");

    let settings = Settings::load_or_create(&path);
    assert_eq!(settings, Settings::default());
    assert_eq!(Settings::load_from(&path).unwrap(), Some(Settings::default()));
}

#[test]
fn test_load_or_create_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"locale":"ru"}"#).unwrap();

    let settings = Settings::load_or_create(&path);
    assert_eq!(settings.locale, Locale::Ru);
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"locale":"ru"}"#);
}

#[test]
fn test_load_or_create_leaves_broken_file_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(Settings::load_or_create(&path), Settings::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}
