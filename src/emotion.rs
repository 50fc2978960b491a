//! Mock emotion labels and the classifier seam.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoryboardError;
use crate::script::Scene;

/// Fixed set of sentiment tags attached to scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Tense,
    Joyful,
    Melancholic,
    Suspenseful,
    Romantic,
}

/// Labels in assignment order.
pub const FIXED_EMOTIONS: [EmotionLabel; 5] = [
    EmotionLabel::Tense,
    EmotionLabel::Joyful,
    EmotionLabel::Melancholic,
    EmotionLabel::Suspenseful,
    EmotionLabel::Romantic,
];

impl EmotionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Tense => "tense",
            EmotionLabel::Joyful => "joyful",
            EmotionLabel::Melancholic => "melancholic",
            EmotionLabel::Suspenseful => "suspenseful",
            EmotionLabel::Romantic => "romantic",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = StoryboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FIXED_EMOTIONS
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| StoryboardError::UnknownEmotion(value.to_string()))
    }
}

/// Returns the label assigned to the scene at `index`.
pub fn emotion_of(index: usize) -> EmotionLabel {
    FIXED_EMOTIONS[index % FIXED_EMOTIONS.len()]
}

/// Assigns an emotion to a scene.
///
/// Implementations may inspect the scene text; the pipeline only relies on
/// getting one label per position.
pub trait EmotionClassifier {
    fn classify(&self, index: usize, scene: &Scene) -> EmotionLabel;
}

/// Placeholder classifier cycling through [`FIXED_EMOTIONS`] by position.
#[derive(Clone, Copy, Debug, Default)]
pub struct CyclicClassifier;

impl EmotionClassifier for CyclicClassifier {
    fn classify(&self, index: usize, _scene: &Scene) -> EmotionLabel {
        emotion_of(index)
    }
}

impl<F> EmotionClassifier for F
where
    F: Fn(usize, &Scene) -> EmotionLabel,
{
    fn classify(&self, index: usize, scene: &Scene) -> EmotionLabel {
        self(index, scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cycle_with_period_five() {
        for index in 0..20 {
            assert_eq!(emotion_of(index), emotion_of(index + 5));
        }
        assert_eq!(emotion_of(0), EmotionLabel::Tense);
        assert_eq!(emotion_of(4), EmotionLabel::Romantic);
        assert_eq!(emotion_of(5), EmotionLabel::Tense);
        assert_eq!(emotion_of(usize::MAX), FIXED_EMOTIONS[usize::MAX % 5]);
    }

    #[test]
    fn cyclic_classifier_ignores_content() {
        let classifier = CyclicClassifier;
        let happy = Scene::new("Everyone laughs.");
        let grim = Scene::new("The funeral begins.");
        assert_eq!(
            classifier.classify(2, &happy),
            classifier.classify(2, &grim)
        );
        assert_eq!(classifier.classify(1, &grim), EmotionLabel::Joyful);
    }

    #[test]
    fn unknown_label_is_rejected() {
        match "noir".parse::<EmotionLabel>() {
            Err(StoryboardError::UnknownEmotion(value)) => assert_eq!(value, "noir"),
            other => panic!("expected UnknownEmotion, got {other:?}"),
        }
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(
            "TENSE".parse::<EmotionLabel>().ok(),
            Some(EmotionLabel::Tense)
        );
        assert_eq!(
            "rOmAnTiC".parse::<EmotionLabel>().ok(),
            Some(EmotionLabel::Romantic)
        );
        assert_eq!(
            " Suspenseful ".parse::<EmotionLabel>().ok(),
            Some(EmotionLabel::Suspenseful)
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&EmotionLabel::Melancholic).expect("serialize");
        assert_eq!(json, "\"melancholic\"");
    }
}
