use jumperkit_core::PortStrategy;
use jumperkit_settings::{EditorSettings, SettingsError};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("settings.toml");

    let mut settings = EditorSettings::new();
    settings.history.capacity = 250;
    settings.canvas.background_color = "#f0f0f0".to_string();
    settings.garment.port_strategy = PortStrategy::CenterClip;
    settings.symmetry.mirror_vertical = true;
    settings.shapes.catalog_path = Some(PathBuf::from("/tmp/shapes.json"));

    settings.save_to_file(&path).unwrap();
    let loaded = EditorSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = EditorSettings::new();
    settings.garment.default_config = "cropped".to_string();
    settings.garment.default_size = "s".to_string();

    settings.save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"default_config\": \"cropped\""));
    assert_eq!(EditorSettings::load_from_file(&path).unwrap(), settings);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.yaml");

    let err = EditorSettings::new().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
}

#[test]
fn test_missing_file_means_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings =
        EditorSettings::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, EditorSettings::default());
}

#[test]
fn test_invalid_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "[history]\ncapacity = 0\n").unwrap();

    let err = EditorSettings::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_bad_strategy_name_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    std::fs::write(&path, "[garment]\nport_strategy = \"stretch\"\n").unwrap();

    let err = EditorSettings::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlDe(_)));
}
