//! Generation settings loaded from TOML and the environment.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{StoryboardError, StoryboardResult};
use crate::resource::ScriptLimits;
use crate::script::MAX_SCENES;
use crate::text::{GRID_PREVIEW_LEN, REVIEW_PREVIEW_LEN};

pub const ENV_MODEL_ID: &str = "MODEL_ID";
pub const ENV_INFERENCE_STEPS: &str = "NUM_INFERENCE_STEPS";
pub const ENV_GUIDANCE_SCALE: &str = "GUIDANCE_SCALE";
pub const ENV_IMAGE_WIDTH: &str = "IMAGE_WIDTH";
pub const ENV_IMAGE_HEIGHT: &str = "IMAGE_HEIGHT";

/// Settings for scene analysis and frame generation requests.
///
/// Missing TOML fields fall back to [`GenerationSettings::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_scenes: usize,
    pub review_preview_len: usize,
    pub grid_preview_len: usize,
    pub model_id: String,
    pub inference_steps: u32,
    pub guidance_scale: f32,
    pub image_width: u32,
    pub image_height: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_scenes: MAX_SCENES,
            review_preview_len: REVIEW_PREVIEW_LEN,
            grid_preview_len: GRID_PREVIEW_LEN,
            model_id: "CompVis/stable-diffusion-v1-4".to_string(),
            inference_steps: 20,
            guidance_scale: 7.5,
            image_width: 512,
            image_height: 512,
        }
    }
}

impl GenerationSettings {
    pub fn from_toml_str(input: &str) -> StoryboardResult<Self> {
        let settings: Self = toml::from_str(input).map_err(|err| {
            let span = err.span().unwrap_or(0..0);
            StoryboardError::ConfigParse {
                message: err.message().to_string(),
                src: input.to_string(),
                span: (span.start, span.end.saturating_sub(span.start)).into(),
            }
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, using defaults when the file is absent.
    pub fn load_from(path: &Path) -> StoryboardResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file missing, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "loaded generation settings");
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> StoryboardResult<String> {
        toml::to_string_pretty(self)
            .map_err(|err| StoryboardError::Serialization(err.to_string()))
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> StoryboardResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> StoryboardResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model_id) = lookup(ENV_MODEL_ID) {
            self.model_id = model_id;
        }
        if let Some(raw) = lookup(ENV_INFERENCE_STEPS) {
            self.inference_steps = parse_override(ENV_INFERENCE_STEPS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_GUIDANCE_SCALE) {
            self.guidance_scale = parse_override(ENV_GUIDANCE_SCALE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_IMAGE_WIDTH) {
            self.image_width = parse_override(ENV_IMAGE_WIDTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_IMAGE_HEIGHT) {
            self.image_height = parse_override(ENV_IMAGE_HEIGHT, &raw)?;
        }
        self.validate()
    }

    /// Checks field ranges; `max_scenes` must lie in `1..=MAX_SCENES`.
    pub fn validate(&self) -> StoryboardResult<()> {
        if !(1..=MAX_SCENES).contains(&self.max_scenes) {
            return Err(StoryboardError::Config(format!(
                "max_scenes must be between 1 and {MAX_SCENES}, got {}",
                self.max_scenes
            )));
        }
        if self.review_preview_len == 0 || self.grid_preview_len == 0 {
            return Err(StoryboardError::Config(
                "preview lengths must be positive".to_string(),
            ));
        }
        if self.model_id.trim().is_empty() {
            return Err(StoryboardError::Config(
                "model_id cannot be empty".to_string(),
            ));
        }
        if self.inference_steps == 0 {
            return Err(StoryboardError::Config(
                "inference_steps must be positive".to_string(),
            ));
        }
        if !self.guidance_scale.is_finite() || self.guidance_scale <= 0.0 {
            return Err(StoryboardError::Config(
                "guidance_scale must be a positive number".to_string(),
            ));
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err(StoryboardError::Config(
                "image dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn script_limits(&self) -> ScriptLimits {
        ScriptLimits::default().with_max_scenes(self.max_scenes)
    }
}

fn parse_override<T: FromStr>(key: &str, raw: &str) -> StoryboardResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| StoryboardError::Config(format!("{key} has invalid value '{raw}'")))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
