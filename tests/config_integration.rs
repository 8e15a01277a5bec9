// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toastboard::app::config::{self, Config};
use toastboard::ui::theming::ThemeMode;

#[test]
fn notification_timing_survives_a_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Light;
    saved.notifications.default_duration_ms = Some(8000);
    saved.notifications.grace_period_ms = Some(500);
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, saved);

    let settings = loaded.notifications.manager_settings();
    assert_eq!(settings.default_duration, Duration::from_millis(8000));
    assert_eq!(settings.grace_period, Duration::from_millis(500));
}

#[test]
fn hand_written_file_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\ntheme_mode = \"dark\"\n\n[notifications]\ndefault_duration_ms = 10\ntick_interval_ms = 1\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(
        loaded.notifications.manager_settings().default_duration,
        Duration::from_millis(config::MIN_DURATION_MS)
    );
    assert_eq!(
        loaded.notifications.tick_interval(),
        Duration::from_millis(config::MIN_TICK_INTERVAL_MS)
    );
}

#[test]
fn override_directory_is_created_on_save() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let nested = dir.path().join("nested").join("config");

    config::save_with_override(&Config::default(), Some(nested.clone()))
        .expect("Failed to save config");

    assert!(nested.join("settings.toml").exists());
    let (loaded, warning) = config::load_with_override(Some(nested));
    assert!(warning.is_none());
    assert_eq!(loaded, Config::default());
}
