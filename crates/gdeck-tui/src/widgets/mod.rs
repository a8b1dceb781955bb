//! Panel widgets.
//!
//! Each widget borrows the panel state and renders one region of the
//! screen; none of them mutate state.

mod console;
mod dashboard;
mod effects;
mod header;
mod scenes;
mod settings;
mod tabs;

pub use console::ConsolePanel;
pub use dashboard::DashboardPanel;
pub use effects::EffectsPanel;
pub use header::Header;
pub use scenes::SceneBar;
pub use settings::SettingsPanel;
pub use tabs::TabBar;
