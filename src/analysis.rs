//! Segmentation plus emotion annotation of a script.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emotion::{CyclicClassifier, EmotionClassifier, EmotionLabel};
use crate::resource::ScriptLimits;
use crate::script::{limit_scenes, split_scenes, Scene};

/// A scene paired with its position and assigned emotion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedScene {
    pub index: usize,
    pub text: Scene,
    pub emotion: EmotionLabel,
}

/// Splits, limits and labels a script with the placeholder classifier.
pub fn segment_and_annotate(script: &str) -> Vec<AnnotatedScene> {
    SceneAnalyzer::new(CyclicClassifier).analyze(script)
}

/// Scene pipeline with a pluggable classifier.
#[derive(Clone, Debug)]
pub struct SceneAnalyzer<C = CyclicClassifier> {
    classifier: C,
    limits: ScriptLimits,
}

impl Default for SceneAnalyzer<CyclicClassifier> {
    fn default() -> Self {
        Self::new(CyclicClassifier)
    }
}

impl<C: EmotionClassifier> SceneAnalyzer<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            limits: ScriptLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ScriptLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn analyze(&self, script: &str) -> Vec<AnnotatedScene> {
        let scenes = split_scenes(script);
        let detected = scenes.len();
        let kept = limit_scenes(scenes, self.limits.max_scenes);
        debug!(detected, kept = kept.len(), "segmented script");
        kept.into_iter()
            .enumerate()
            .map(|(index, text)| {
                let emotion = self.classifier.classify(index, &text);
                AnnotatedScene {
                    index,
                    text,
                    emotion,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/analysis_tests.rs"]
mod tests;
