//! Settings panel widget
//!
//! Address and token fields with save/clear, plus the restart row. The
//! token is rendered masked.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_app::{PanelState, SettingsRow};

use crate::theme::{palette, styles};

pub struct SettingsPanel<'a> {
    state: &'a PanelState,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }

    fn marker(&self, row: SettingsRow) -> Span<'static> {
        if self.state.settings.row == row {
            Span::styled("▶ ", styles::accent_bold())
        } else {
            Span::raw("  ")
        }
    }

    fn field_line(&self, row: SettingsRow, label: &str, value: String) -> Line<'static> {
        let focused = self.state.settings.row == row;
        let mut spans = vec![
            self.marker(row),
            Span::styled(format!("{:<16}", label), styles::text_secondary()),
            Span::styled(value, styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Settings");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let form = &self.state.settings;
        let masked_token = "•".repeat(form.token_input.chars().count());

        let restart_style = if form.row == SettingsRow::Restart {
            Style::default().fg(palette::STATUS_RED)
        } else {
            styles::text_muted()
        };

        let mut lines = vec![
            self.field_line(
                SettingsRow::Address,
                "Device address",
                form.address_input.clone(),
            ),
            self.field_line(SettingsRow::Token, "Access token", masked_token),
            Line::from(vec![
                self.marker(SettingsRow::Restart),
                Span::styled("[ Restart device ]", restart_style),
            ]),
            Line::default(),
        ];

        if let Some(ref status) = form.status {
            lines.push(Line::from(Span::styled(
                status.clone(),
                Style::default().fg(palette::STATUS_YELLOW),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "↑/↓ move · Enter save · Del clear stored value",
            styles::text_muted(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
