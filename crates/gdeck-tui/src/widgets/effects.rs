//! Effects panel widget
//!
//! Selectable list over the static effect catalog. The device's active
//! effect is marked independently of the cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_app::PanelState;
use gdeck_core::EFFECTS;

use crate::theme::{palette, styles};

pub struct EffectsPanel<'a> {
    state: &'a PanelState,
}

impl<'a> EffectsPanel<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }
}

impl Widget for EffectsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Effects");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let cursor = self.state.effect_cursor;
        let active_id = self.state.snapshot.effect;

        // Window the list around the cursor when it does not fit.
        let visible = inner.height as usize;
        let offset = cursor.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = EFFECTS
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, effect)| {
                let marker = if index == cursor {
                    Span::styled("▶ ", styles::accent_bold())
                } else {
                    Span::raw("  ")
                };
                let name_style = if index == cursor {
                    styles::selected_highlight()
                } else {
                    styles::text_primary()
                };

                let mut spans = vec![
                    marker,
                    Span::styled(format!("{:<15}", effect.name), name_style),
                    Span::styled(effect.description.to_string(), styles::text_muted()),
                ];
                if effect.id == active_id {
                    spans.push(Span::styled(
                        "  ● active",
                        Style::default().fg(palette::STATUS_GREEN),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
