//! Header bar widget
//!
//! Shows device name, power state, active effect, wifi link, and the
//! online/offline badge.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use gdeck_app::PanelState;

use crate::theme::{palette, styles};

pub struct Header<'a> {
    state: &'a PanelState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("glowdeck");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let snapshot = &self.state.snapshot;
        let (dot, badge, badge_style) = styles::online_indicator(self.state.online);

        let power_style = if snapshot.power {
            Style::default().fg(palette::STATUS_GREEN)
        } else {
            styles::text_muted()
        };
        let wifi_style = if snapshot.wifi_connected {
            styles::text_secondary()
        } else {
            Style::default().fg(palette::STATUS_YELLOW)
        };

        let left = Line::from(vec![
            Span::styled(dot, badge_style),
            Span::raw(" "),
            Span::styled(
                snapshot.device_name.clone(),
                styles::text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(
                format!("Power {}", if snapshot.power { "On" } else { "Off" }),
                power_style,
            ),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(snapshot.effect_name.clone(), styles::accent()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(
                if snapshot.wifi_connected {
                    "WiFi"
                } else {
                    "No WiFi"
                },
                wifi_style,
            ),
        ]);

        let padded = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: 1,
        };
        Paragraph::new(left).render(padded, buf);

        let right = Line::from(Span::styled(format!("{} {}", dot, badge), badge_style));
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(padded, buf);
    }
}
