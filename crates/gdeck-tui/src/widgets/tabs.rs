//! Tab bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use gdeck_app::Tab;

use crate::theme::styles;

pub struct TabBar {
    active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} ", tab.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_muted())
            .highlight_style(styles::accent_bold())
            .divider("│");

        let padded = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded, buf);
    }
}
