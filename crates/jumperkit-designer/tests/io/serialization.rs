use jumperkit_core::{DesignError, Panel, DEFAULT_CONFIG_ID, DEFAULT_SIZE};
use jumperkit_designer::{DesignDocument, DESIGN_FORMAT_VERSION};
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test_design.json");

    let mut design = DesignDocument::new("Fair Isle", "classic", "l");
    design.front.insert("3-12".to_string(), "#aa2233".to_string());
    design.back.insert("40-30".to_string(), "rgb(10, 20, 30)".to_string());

    design.save_to_file(&file_path).unwrap();
    let loaded = DesignDocument::load_from_file(&file_path).unwrap();

    assert_eq!(loaded, design);
    assert_eq!(loaded.panel(Panel::Back).len(), 1);
}

#[test]
fn test_legacy_document_migrates_to_front() {
    let json = r##"{"1-1": "#ff0000", "10-20": "#00ff00"}"##;
    let design = DesignDocument::from_json(json).unwrap();

    assert_eq!(design.version, DESIGN_FORMAT_VERSION);
    assert_eq!(design.config_id, DEFAULT_CONFIG_ID);
    assert_eq!(design.size, DEFAULT_SIZE);
    assert_eq!(design.front.len(), 2);
    assert!(design.back.is_empty());
}

#[test]
fn test_migrated_document_writes_version_two() {
    let design = DesignDocument::from_json(r##"{"5-5": "#123456"}"##).unwrap();
    let json = design.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], 2);
    assert_eq!(value["front"]["5-5"], "#123456");
    assert!(value["id"].is_string());
    assert!(value["created"].is_string());
}

#[test]
fn test_version_two_without_timestamps_loads() {
    let json = r##"{
        "version": 2,
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "name": "Sparse",
        "config_id": "cropped",
        "size": "m",
        "front": {"2-2": "#000000"}
    }"##;
    let design = DesignDocument::from_json(json).unwrap();
    assert_eq!(design.name, "Sparse");
    assert!(design.back.is_empty());
}

#[test]
fn test_version_two_missing_shape_is_an_error() {
    let json = r#"{"version": 2, "id": "67e55044-10b1-426f-9247-bb680e5fe0c8"}"#;
    let err = DesignDocument::from_json(json).unwrap_err();
    assert!(matches!(err, DesignError::Json(_)));
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = DesignDocument::load_from_file(temp_dir.path().join("absent.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_garbage_file_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("garbage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = DesignDocument::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse design file"));
}
