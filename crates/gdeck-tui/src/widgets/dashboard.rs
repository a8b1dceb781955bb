//! Dashboard panel widget
//!
//! Keyboard-adjustable power/channel/brightness rows plus the status cards
//! (color, uptime, memory) driven by the core formatters.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_app::{DashboardRow, PanelState};
use gdeck_core::{format_memory, format_uptime, rgb_to_hex};

use crate::theme::{palette, styles};

const BAR_WIDTH: usize = 20;

pub struct DashboardPanel<'a> {
    state: &'a PanelState,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }

    fn value_row(
        &self,
        row: DashboardRow,
        label: &str,
        value: u8,
        color: Color,
    ) -> Line<'static> {
        let marker = self.marker(row);
        let filled = (value as usize * BAR_WIDTH) / 255;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

        Line::from(vec![
            marker,
            Span::styled(format!("{:<11}", label), styles::text_secondary()),
            Span::styled(bar, Style::default().fg(color)),
            Span::styled(format!(" {:>3}", value), styles::text_primary()),
        ])
    }

    fn marker(&self, row: DashboardRow) -> Span<'static> {
        if self.state.dashboard_row == row {
            Span::styled("▶ ", styles::accent_bold())
        } else {
            Span::raw("  ")
        }
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("Dashboard");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let snapshot = &self.state.snapshot;

        let power_label = if snapshot.power { "On" } else { "Off" };
        let power_style = if snapshot.power {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            styles::text_muted()
        };

        let mut lines = vec![
            Line::from(vec![
                self.marker(DashboardRow::Power),
                Span::styled(format!("{:<11}", "Power"), styles::text_secondary()),
                Span::styled(format!("[{:^5}]", power_label), power_style),
            ]),
            self.value_row(DashboardRow::Red, "Red", snapshot.rgb.r, palette::CHANNEL_RED),
            self.value_row(
                DashboardRow::Green,
                "Green",
                snapshot.rgb.g,
                palette::CHANNEL_GREEN,
            ),
            self.value_row(
                DashboardRow::Blue,
                "Blue",
                snapshot.rgb.b,
                palette::CHANNEL_BLUE,
            ),
            self.value_row(
                DashboardRow::Brightness,
                "Brightness",
                snapshot.brightness,
                palette::ACCENT,
            ),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{:<13}", "Color"), styles::text_muted()),
                Span::styled(rgb_to_hex(snapshot.rgb), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<13}", "Uptime"), styles::text_muted()),
                Span::styled(format_uptime(snapshot.uptime), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<13}", "Free memory"), styles::text_muted()),
                Span::styled(format_memory(snapshot.free_memory), styles::text_primary()),
            ]),
        ];

        if !self.state.online {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Offline — showing fallback data",
                Style::default().fg(palette::STATUS_YELLOW),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "↑/↓ select · ←/→ adjust · p power · r refresh · 1-6 scenes",
            styles::text_muted(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
