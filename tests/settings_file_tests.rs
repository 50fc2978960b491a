use std::fs;

use storyboard_engine::{GenerationSettings, StoryboardError};
use tempfile::tempdir;

#[test]
fn missing_file_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let settings =
        GenerationSettings::load_from(&dir.path().join("absent.toml")).expect("load settings");
    assert_eq!(settings, GenerationSettings::default());
}

#[test]
fn loads_settings_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("storyboard.toml");
    fs::write(
        &path,
        "max_scenes = 3\nmodel_id = \"local/sd-mini\"\nimage_width = 640\n",
    )
    .expect("write settings");

    let settings = GenerationSettings::load_from(&path).expect("load settings");
    assert_eq!(settings.max_scenes, 3);
    assert_eq!(settings.model_id, "local/sd-mini");
    assert_eq!(settings.image_width, 640);
    assert_eq!(settings.grid_preview_len, 100);
}

#[test]
fn invalid_file_reports_diagnostic() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "image_height = [1, 2]\n").expect("write settings");

    let err = GenerationSettings::load_from(&path).expect_err("should fail");
    assert!(matches!(err, StoryboardError::ConfigParse { .. }));
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("storyboard.config_parse"));
}
