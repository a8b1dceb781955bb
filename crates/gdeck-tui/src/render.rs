//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use gdeck_app::{PanelState, Tab};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    ConsolePanel, DashboardPanel, EffectsPanel, Header, SceneBar, SettingsPanel, TabBar,
};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &PanelState) {
    let area = frame.area();

    // Fill the terminal with the base background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(Header::new(state), areas.header);
    frame.render_widget(TabBar::new(state.tab), areas.tabs);

    match state.tab {
        Tab::Dashboard => frame.render_widget(DashboardPanel::new(state), areas.body),
        Tab::Effects => frame.render_widget(EffectsPanel::new(state), areas.body),
        Tab::Console => frame.render_widget(ConsolePanel::new(state), areas.body),
        Tab::Settings => frame.render_widget(SettingsPanel::new(state), areas.body),
    }

    frame.render_widget(SceneBar::new(), areas.scenes);
}
