/// Upper bounds applied to script input and the derived scene list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLimits {
    pub max_scenes: usize,
    pub max_script_bytes: usize,
}

impl Default for ScriptLimits {
    fn default() -> Self {
        Self {
            max_scenes: crate::script::MAX_SCENES,
            max_script_bytes: 512 * 1024,
        }
    }
}

impl ScriptLimits {
    /// Sets the scene cap, never above [`MAX_SCENES`](crate::script::MAX_SCENES).
    pub fn with_max_scenes(self, max_scenes: usize) -> Self {
        Self {
            max_scenes: max_scenes.min(crate::script::MAX_SCENES),
            ..self
        }
    }
}
