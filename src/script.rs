//! Scene segmentation for raw script text.

use std::fmt;
use std::ops::Deref;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{StoryboardError, StoryboardResult};
use crate::resource::ScriptLimits;

/// Maximum number of scenes kept after splitting.
pub const MAX_SCENES: usize = 5;

// Two or more consecutive line breaks, `\r\n` counting as one break.
static SCENE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n){2,}").expect("scene break pattern is valid"));

/// A blank-line delimited segment of a script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene(String);

impl Scene {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Scene {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a script into scenes on blank-line separators.
///
/// Segments that are empty after trimming are dropped and the remaining
/// scenes keep their order of appearance. Any input is valid; an empty
/// script yields no scenes.
pub fn split_scenes(script: &str) -> Vec<Scene> {
    SCENE_BREAK
        .split(script)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(Scene::new)
        .collect()
}

/// Keeps at most the first `max` scenes.
pub fn limit_scenes(mut scenes: Vec<Scene>, max: usize) -> Vec<Scene> {
    scenes.truncate(max);
    scenes
}

/// Raw script text accepted within a byte budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    source: String,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Accepts script text, rejecting input larger than the byte budget.
    pub fn parse_with_limits(input: &str, limits: ScriptLimits) -> StoryboardResult<Self> {
        if input.len() > limits.max_script_bytes {
            return Err(StoryboardError::ResourceLimit(format!(
                "script is {} bytes, budget is {}",
                input.len(),
                limits.max_script_bytes
            )));
        }
        Ok(Self::new(input))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Splits and limits the script in one pass.
    pub fn scenes(&self, limits: ScriptLimits) -> Vec<Scene> {
        limit_scenes(split_scenes(&self.source), limits.max_scenes)
    }
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
