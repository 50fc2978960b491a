//! View models for the review, storyboard and style panels.

use serde::Serialize;

use crate::analysis::AnnotatedScene;
use crate::emotion::EmotionLabel;
use crate::storyboard::StoryboardItem;
use crate::style::VisualStyle;
use crate::text::truncate_preview;

pub const REVIEW_INTRO: &str = "The script has been divided into scenes. Each scene will be \
                                analyzed for emotional tone and visual elements.";
pub const NO_SCENES_MESSAGE: &str =
    "No scenes detected. Please enter a script with clear scene breaks.";
pub const NO_FRAMES_MESSAGE: &str = "No storyboard frames generated yet.";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=400";
pub const STYLE_HEADING: &str = "Visual Style";

/// Badge appearance for an emotion tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Destructive,
    Secondary,
    Outline,
}

/// Badge per emotion, in [`EmotionLabel`] declaration order.
pub const EMOTION_BADGES: [(EmotionLabel, BadgeVariant); 5] = [
    (EmotionLabel::Tense, BadgeVariant::Destructive),
    (EmotionLabel::Joyful, BadgeVariant::Default),
    (EmotionLabel::Melancholic, BadgeVariant::Secondary),
    (EmotionLabel::Suspenseful, BadgeVariant::Outline),
    (EmotionLabel::Romantic, BadgeVariant::Default),
];

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}

pub fn badge_variant(emotion: EmotionLabel) -> BadgeVariant {
    EMOTION_BADGES[emotion as usize].1
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: EmotionLabel,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn for_emotion(label: EmotionLabel) -> Self {
        Self {
            label,
            variant: badge_variant(label),
        }
    }
}

/// One card in the scene review panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SceneCard {
    pub title: String,
    pub badge: Badge,
    pub body: String,
}

fn scene_title(index: usize) -> String {
    format!("Scene {}", index + 1)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewPanel {
    Cards { intro: String, cards: Vec<SceneCard> },
    Empty { intro: String, message: String },
}

impl ReviewPanel {
    pub fn from_scenes(scenes: &[AnnotatedScene], preview_len: usize) -> Self {
        let intro = REVIEW_INTRO.to_string();
        if scenes.is_empty() {
            return ReviewPanel::Empty {
                intro,
                message: NO_SCENES_MESSAGE.to_string(),
            };
        }
        let cards = scenes
            .iter()
            .map(|scene| SceneCard {
                title: scene_title(scene.index),
                badge: Badge::for_emotion(scene.emotion),
                body: truncate_preview(&scene.text, preview_len).into_owned(),
            })
            .collect();
        ReviewPanel::Cards { intro, cards }
    }
}

/// One frame in the storyboard grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameCard {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub badge: Badge,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoryboardGrid {
    Frames { frames: Vec<FrameCard> },
    Empty { message: String },
}

impl StoryboardGrid {
    pub fn from_items(items: &[StoryboardItem], preview_len: usize) -> Self {
        if items.is_empty() {
            return StoryboardGrid::Empty {
                message: NO_FRAMES_MESSAGE.to_string(),
            };
        }
        let frames = items
            .iter()
            .enumerate()
            .map(|(index, item)| FrameCard {
                title: scene_title(index),
                image_src: item
                    .image_url
                    .as_deref()
                    .filter(|url| !url.is_empty())
                    .unwrap_or(PLACEHOLDER_IMAGE)
                    .to_string(),
                image_alt: scene_title(index),
                badge: Badge::for_emotion(item.emotion),
                caption: truncate_preview(&item.scene, preview_len).into_owned(),
            })
            .collect();
        StoryboardGrid::Frames { frames }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StylePanel {
    pub heading: &'static str,
    pub options: Vec<StyleOption>,
}

impl StylePanel {
    pub fn new(selected: VisualStyle) -> Self {
        let options = VisualStyle::ALL
            .into_iter()
            .map(|style| StyleOption {
                id: style.id(),
                name: style.display_name(),
                description: style.description(),
                selected: style == selected,
            })
            .collect();
        Self {
            heading: STYLE_HEADING,
            options,
        }
    }
}

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
