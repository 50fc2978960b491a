//! Plain-text rendering of panel view models.

use crate::ui::{Badge, ReviewPanel, StoryboardGrid, StylePanel};

/// A panel ready to be painted.
#[derive(Clone, Copy, Debug)]
pub enum Panel<'a> {
    Review(&'a ReviewPanel),
    Grid(&'a StoryboardGrid),
    Styles(&'a StylePanel),
}

/// Renderer interface for panel consumers.
pub trait RenderBackend {
    fn render(&self, panel: Panel<'_>) -> RenderOutput;
}

/// Rendered text output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
}

/// Simple renderer that formats panels as text blocks.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn header(title: &str, badge: &Badge) -> String {
        format!("{title} [{}/{}]", badge.label, badge.variant.as_str())
    }

    fn render_review(&self, panel: &ReviewPanel) -> String {
        match panel {
            ReviewPanel::Cards { intro, cards } => {
                let mut blocks = vec![intro.clone()];
                for card in cards {
                    let header = Self::header(&card.title, &card.badge);
                    blocks.push(format!("{header}\n{}", card.body));
                }
                blocks.join("\n\n")
            }
            ReviewPanel::Empty { intro, message } => format!("{intro}\n\n{message}"),
        }
    }

    fn render_grid(&self, grid: &StoryboardGrid) -> String {
        match grid {
            StoryboardGrid::Frames { frames } => frames
                .iter()
                .map(|frame| {
                    format!(
                        "{}\nImage: {}\n{}",
                        Self::header(&frame.title, &frame.badge),
                        frame.image_src,
                        frame.caption
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
            StoryboardGrid::Empty { message } => message.clone(),
        }
    }

    fn render_styles(&self, panel: &StylePanel) -> String {
        let mut lines = vec![panel.heading.to_string()];
        for option in &panel.options {
            let marker = if option.selected { "(*)" } else { "( )" };
            lines.push(format!(
                "{marker} {} [{}] - {}",
                option.name, option.id, option.description
            ));
        }
        lines.join("\n")
    }
}

impl RenderBackend for TextRenderer {
    fn render(&self, panel: Panel<'_>) -> RenderOutput {
        let text = match panel {
            Panel::Review(review) => self.render_review(review),
            Panel::Grid(grid) => self.render_grid(grid),
            Panel::Styles(styles) => self.render_styles(styles),
        };
        RenderOutput { text }
    }
}
