//! Tests for persisted tip settings

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tip::{CurrencyDisplayMode, DEFAULT_PRESETS, TipFlow, TipSettings};

#[test]
fn test_missing_file_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("tip.toml");

    let settings = TipSettings::load_from(&path).unwrap();

    assert_eq!(settings, TipSettings::default());
    assert!(path.exists());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tip.toml");

    let mut settings = TipSettings::default();
    settings.toggle_display_mode();
    settings.presets = vec![500, 1500];
    settings.save_to(&path).unwrap();

    let loaded = TipSettings::load_from(&path).unwrap();
    assert_eq!(loaded.display_mode, CurrencyDisplayMode::Fiat);
    assert_eq!(loaded.presets, vec![500, 1500]);
}

#[test]
fn test_hand_edited_file_is_normalized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tip.toml");
    std::fs::write(&path, "presets = [0, 210, 210, 420]\n").unwrap();

    let loaded = TipSettings::load_from(&path).unwrap();
    assert_eq!(loaded.display_mode, CurrencyDisplayMode::Native);
    assert_eq!(loaded.presets, vec![210, 420]);

    let mut flow = TipFlow::new(&loaded);
    flow.select_preset(1);
    assert_eq!(flow.effective_amount(), 420);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tip.toml");
    std::fs::write(&path, "display_mode = \"euros\"\n").unwrap();

    assert!(TipSettings::load_from(&path).is_err());
}

#[test]
fn test_default_presets_are_submittable() {
    assert!(DEFAULT_PRESETS.iter().all(|amount| tip::is_submittable(*amount)));
}
