use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_preview_constants() {
    let settings = GenerationSettings::default();
    assert_eq!(settings.max_scenes, 5);
    assert_eq!(settings.review_preview_len, 150);
    assert_eq!(settings.grid_preview_len, 100);
    assert_eq!(settings.inference_steps, 20);
    assert_eq!(settings.image_width, 512);
    assert!(settings.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults() {
    let input = "max_scenes = 4\nguidance_scale = 9.0\n";
    let settings = GenerationSettings::from_toml_str(input).expect("parse settings");
    assert_eq!(settings.max_scenes, 4);
    assert_eq!(settings.guidance_scale, 9.0);
    assert_eq!(settings.image_height, 512);
    assert_eq!(settings.script_limits().max_scenes, 4);
}

#[test]
fn malformed_toml_reports_parse_error() {
    match GenerationSettings::from_toml_str("max_scenes = \"many\"") {
        Err(StoryboardError::ConfigParse { src, .. }) => assert!(src.contains("many")),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn invalid_values_are_rejected() {
    let result = GenerationSettings::from_toml_str("inference_steps = 0");
    assert!(matches!(result, Err(StoryboardError::Config(_))));
}

#[test]
fn zero_scene_cap_is_rejected() {
    match GenerationSettings::from_toml_str("max_scenes = 0\n") {
        Err(StoryboardError::Config(message)) => assert!(message.contains("max_scenes")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn scene_cap_above_five_is_rejected() {
    let result = GenerationSettings::from_toml_str("max_scenes = 50\n");
    assert!(matches!(result, Err(StoryboardError::Config(_))));
    let at_cap = GenerationSettings::from_toml_str("max_scenes = 5\n");
    let at_cap = at_cap.expect("parse settings");
    assert_eq!(at_cap.max_scenes, 5);
}

#[test]
fn zero_preview_lengths_are_rejected() {
    for input in ["review_preview_len = 0\n", "grid_preview_len = 0\n"] {
        match GenerationSettings::from_toml_str(input) {
            Err(StoryboardError::Config(message)) => assert!(message.contains("preview")),
            other => panic!("expected Config error for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn overrides_replace_file_values() {
    let mut settings = GenerationSettings::default();
    settings
        .apply_overrides(lookup_from(&[
            ("MODEL_ID", "runwayml/stable-diffusion-v1-5"),
            ("NUM_INFERENCE_STEPS", "30"),
            ("IMAGE_WIDTH", " 768 "),
        ]))
        .expect("apply overrides");
    assert_eq!(settings.model_id, "runwayml/stable-diffusion-v1-5");
    assert_eq!(settings.inference_steps, 30);
    assert_eq!(settings.image_width, 768);
    assert_eq!(settings.image_height, 512);
}

#[test]
fn unparsable_override_is_a_config_error() {
    let mut settings = GenerationSettings::default();
    let result = settings.apply_overrides(lookup_from(&[("GUIDANCE_SCALE", "strong")]));
    match result {
        Err(StoryboardError::Config(message)) => assert!(message.contains("GUIDANCE_SCALE")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn toml_output_parses_back() {
    let settings = GenerationSettings {
        max_scenes: 3,
        ..GenerationSettings::default()
    };
    let raw = settings.to_toml_string().expect("serialize");
    assert!(raw.contains("max_scenes = 3"));
    assert_eq!(GenerationSettings::from_toml_str(&raw).expect("parse"), settings);
}
