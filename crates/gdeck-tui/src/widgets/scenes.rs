//! Scene shortcut row widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_core::SCENES;

use crate::theme::styles;

/// One-line scene preset row; keys 1-6 apply the matching scene.
pub struct SceneBar;

impl SceneBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SceneBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SceneBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(SCENES.len() * 3 + 1);
        spans.push(Span::raw(" "));
        for (index, scene) in SCENES.iter().enumerate() {
            spans.push(Span::styled(format!("[{}]", index + 1), styles::accent()));
            spans.push(Span::styled(
                format!(" {} {}  ", scene.icon, scene.name),
                styles::text_secondary(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
