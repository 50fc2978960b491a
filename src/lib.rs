mod analysis;
mod config;
mod emotion;
mod error;
mod render;
mod resource;
mod script;
mod storyboard;
mod style;
mod text;
mod ui;

pub use analysis::{segment_and_annotate, AnnotatedScene, SceneAnalyzer};
pub use config::{
    GenerationSettings, ENV_GUIDANCE_SCALE, ENV_IMAGE_HEIGHT, ENV_IMAGE_WIDTH, ENV_INFERENCE_STEPS,
    ENV_MODEL_ID,
};
pub use emotion::{emotion_of, CyclicClassifier, EmotionClassifier, EmotionLabel, FIXED_EMOTIONS};
pub use error::{StoryboardError, StoryboardResult};
pub use render::{Panel, RenderBackend, RenderOutput, TextRenderer};
pub use resource::ScriptLimits;
pub use script::{limit_scenes, split_scenes, Scene, Script, MAX_SCENES};
pub use storyboard::{
    build_storyboard, build_storyboard_with, ImagePrompt, ImageSource, PlaceholderImages,
    Storyboard, StoryboardItem, StoryboardRequest,
};
pub use style::{StyleSelector, VisualStyle};
pub use text::{display_len, truncate_preview, ELLIPSIS, GRID_PREVIEW_LEN, REVIEW_PREVIEW_LEN};
pub use ui::{
    badge_variant, Badge, BadgeVariant, FrameCard, ReviewPanel, SceneCard, StoryboardGrid,
    StyleOption, StylePanel, EMOTION_BADGES, NO_FRAMES_MESSAGE, NO_SCENES_MESSAGE,
    PLACEHOLDER_IMAGE, REVIEW_INTRO, STYLE_HEADING,
};
