//! Storyboard frames assembled from annotated scenes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::{AnnotatedScene, SceneAnalyzer};
use crate::config::GenerationSettings;
use crate::emotion::{CyclicClassifier, EmotionClassifier, EmotionLabel};
use crate::error::{StoryboardError, StoryboardResult};
use crate::style::VisualStyle;

const NEGATIVE_PROMPT: &str =
    "blurry, low quality, distorted, ugly, bad anatomy, bad proportions, watermark, signature";

/// A storyboard frame as exchanged with the image backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardItem {
    pub scene: String,
    pub emotion: EmotionLabel,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    pub storyboard: Vec<StoryboardItem>,
}

impl Storyboard {
    pub fn len(&self) -> usize {
        self.storyboard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storyboard.is_empty()
    }

    pub fn to_json(&self) -> StoryboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| StoryboardError::Serialization(err.to_string()))
    }
}

/// Text-to-image prompt for one scene.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImagePrompt {
    pub prompt: String,
    pub negative_prompt: &'static str,
}

impl ImagePrompt {
    pub fn compose(scene: &str, emotion: EmotionLabel, style: VisualStyle) -> Self {
        Self {
            prompt: format!(
                "A {style} scene: {scene}, {emotion} atmosphere, cinematic lighting, detailed, \
                 high quality, 4k, professional photography"
            ),
            negative_prompt: NEGATIVE_PROMPT,
        }
    }
}

/// Produces image locations for prompts.
pub trait ImageSource {
    fn image_for(&self, prompt: &ImagePrompt, settings: &GenerationSettings) -> Option<String>;
}

/// Source that never yields an image; frames fall back to the placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderImages;

impl ImageSource for PlaceholderImages {
    fn image_for(&self, _prompt: &ImagePrompt, _settings: &GenerationSettings) -> Option<String> {
        None
    }
}

/// Input to storyboard assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardRequest {
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub style: VisualStyle,
}

impl StoryboardRequest {
    pub fn new(script: impl Into<String>, style: VisualStyle) -> Self {
        Self {
            script: script.into(),
            style,
        }
    }

    pub fn validate(&self) -> StoryboardResult<()> {
        if self.script.trim().is_empty() {
            return Err(StoryboardError::ScriptRequired);
        }
        Ok(())
    }
}

/// Builds a storyboard with the placeholder classifier.
pub fn build_storyboard(
    request: &StoryboardRequest,
    settings: &GenerationSettings,
    source: &dyn ImageSource,
) -> StoryboardResult<Storyboard> {
    let limits = settings.script_limits();
    let analyzer = SceneAnalyzer::new(CyclicClassifier).with_limits(limits);
    build_storyboard_with(request, settings, &analyzer, source)
}

/// Builds a storyboard using a caller supplied analyzer.
pub fn build_storyboard_with<C: EmotionClassifier>(
    request: &StoryboardRequest,
    settings: &GenerationSettings,
    analyzer: &SceneAnalyzer<C>,
    source: &dyn ImageSource,
) -> StoryboardResult<Storyboard> {
    request.validate()?;
    settings.validate()?;
    let scenes = analyzer.analyze(&request.script);
    if scenes.is_empty() {
        warn!("script produced no scenes");
    }
    let storyboard = scenes
        .into_iter()
        .map(|scene| frame_for(scene, request.style, settings, source))
        .collect::<Vec<_>>();
    info!(
        frames = storyboard.len(),
        style = %request.style,
        "assembled storyboard"
    );
    Ok(Storyboard { storyboard })
}

fn frame_for(
    scene: AnnotatedScene,
    style: VisualStyle,
    settings: &GenerationSettings,
    source: &dyn ImageSource,
) -> StoryboardItem {
    let prompt = ImagePrompt::compose(&scene.text, scene.emotion, style);
    let image_url = source.image_for(&prompt, settings);
    debug!(
        index = scene.index,
        has_image = image_url.is_some(),
        "prepared frame"
    );
    StoryboardItem {
        scene: scene.text.into_string(),
        emotion: scene.emotion,
        image_url,
    }
}

#[cfg(test)]
#[path = "tests/storyboard_tests.rs"]
mod tests;
