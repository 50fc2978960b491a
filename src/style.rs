//! Visual styles offered for storyboard frames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoryboardError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Cinematic,
    Anime,
    Noir,
    Watercolor,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [
        VisualStyle::Cinematic,
        VisualStyle::Anime,
        VisualStyle::Noir,
        VisualStyle::Watercolor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "cinematic",
            VisualStyle::Anime => "anime",
            VisualStyle::Noir => "noir",
            VisualStyle::Watercolor => "watercolor",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "Cinematic",
            VisualStyle::Anime => "Anime",
            VisualStyle::Noir => "Film Noir",
            VisualStyle::Watercolor => "Watercolor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            VisualStyle::Cinematic => "Hollywood-style realistic visuals",
            VisualStyle::Anime => "Japanese animation style",
            VisualStyle::Noir => "High contrast black and white",
            VisualStyle::Watercolor => "Artistic watercolor painting style",
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VisualStyle {
    type Err = StoryboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.id() == value)
            .ok_or_else(|| StoryboardError::UnknownStyle(value.to_string()))
    }
}

type StyleCallback = Box<dyn FnMut(VisualStyle)>;

/// Selection state for the style picker.
///
/// The change callback fires only when the selection actually changes.
#[derive(Default)]
pub struct StyleSelector {
    selected: VisualStyle,
    on_change: Option<StyleCallback>,
}

impl fmt::Debug for StyleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSelector")
            .field("selected", &self.selected)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl StyleSelector {
    pub fn new(selected: VisualStyle) -> Self {
        Self {
            selected,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(VisualStyle) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn selected(&self) -> VisualStyle {
        self.selected
    }

    /// Selects `style`, returning whether the selection changed.
    pub fn select(&mut self, style: VisualStyle) -> bool {
        if style == self.selected {
            return false;
        }
        debug!(from = %self.selected, to = %style, "style changed");
        self.selected = style;
        if let Some(callback) = self.on_change.as_mut() {
            callback(style);
        }
        true
    }

    /// Selects a style by id as emitted by the picker.
    pub fn select_id(&mut self, id: &str) -> Result<bool, StoryboardError> {
        let style = id.parse()?;
        Ok(self.select(style))
    }
}
