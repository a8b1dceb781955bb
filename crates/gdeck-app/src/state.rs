//! Application state (Model in TEA pattern)

use gdeck_core::{ConsoleLog, DeviceSnapshot, EFFECTS};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// Waiting for the first synchronization result
    #[default]
    Starting,
    /// Normal operation (online or degraded)
    Running,
    /// Shutting down; the event loop exits when it sees this
    Quitting,
}

/// Top-level tab of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Effects,
    Console,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Effects, Tab::Console, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Effects => "Effects",
            Tab::Console => "Console",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard row under keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardRow {
    #[default]
    Power,
    Red,
    Green,
    Blue,
    Brightness,
}

impl DashboardRow {
    pub const ALL: [DashboardRow; 5] = [
        DashboardRow::Power,
        DashboardRow::Red,
        DashboardRow::Green,
        DashboardRow::Blue,
        DashboardRow::Brightness,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> DashboardRow {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> DashboardRow {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Settings form row under keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Address,
    Token,
    Restart,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [
        SettingsRow::Address,
        SettingsRow::Token,
        SettingsRow::Restart,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(&self) -> SettingsRow {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> SettingsRow {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editable settings form state
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub row: SettingsRow,
    pub address_input: String,
    pub token_input: String,
    /// Outcome of the last save/clear, shown under the form
    pub status: Option<String>,
}

/// The single source of truth for what the panel believes about the device.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub phase: PanelPhase,
    pub tab: Tab,

    /// Current device snapshot. The stub until the first successful fetch,
    /// and again whenever a fetch fails; always replaced wholesale.
    pub snapshot: DeviceSnapshot,
    /// Whether the last fetch succeeded
    pub online: bool,

    // Dashboard
    pub dashboard_row: DashboardRow,

    // Effects
    pub effect_cursor: usize,

    // Console
    pub console: ConsoleLog,
    pub console_input: String,
    /// Lines scrolled up from the bottom of the console
    pub console_scroll: usize,

    // Settings
    pub settings: SettingsForm,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            phase: PanelPhase::Starting,
            tab: Tab::default(),
            snapshot: DeviceSnapshot::stub(),
            online: false,
            dashboard_row: DashboardRow::default(),
            effect_cursor: 0,
            console: ConsoleLog::new(),
            console_input: String::new(),
            console_scroll: 0,
            settings: SettingsForm::default(),
        }
    }

    /// Seed the settings form from the stored configuration.
    pub fn with_endpoint(mut self, address: Option<String>, token: Option<String>) -> Self {
        self.settings.address_input = address.unwrap_or_default();
        self.settings.token_input = token.unwrap_or_default();
        self
    }

    /// Apply a synchronization result. This is the whole online/offline
    /// policy: success replaces the snapshot and marks the panel online; any
    /// failure swaps in the stub, wholesale, and marks it offline. The error
    /// detail is for the log only.
    pub fn apply_fetch(&mut self, result: Result<DeviceSnapshot, String>) {
        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.online = true;
            }
            Err(_) => {
                self.snapshot = DeviceSnapshot::stub();
                self.online = false;
            }
        }
        if self.phase == PanelPhase::Starting {
            self.phase = PanelPhase::Running;
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = PanelPhase::Quitting;
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == PanelPhase::Quitting
    }

    /// Move the effect cursor, clamped to the catalog.
    pub fn move_effect_cursor(&mut self, delta: isize) {
        let last = EFFECTS.len().saturating_sub(1);
        let next = self.effect_cursor.saturating_add_signed(delta);
        self.effect_cursor = next.min(last);
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdeck_core::Rgb;

    fn live_snapshot() -> DeviceSnapshot {
        DeviceSnapshot {
            power: false,
            rgb: Rgb::new(1, 2, 3),
            brightness: 10,
            effect: 0,
            effect_name: "Static".to_string(),
            wifi_connected: false,
            device_name: "bench-rig".to_string(),
            uptime: 1234,
            free_memory: 4096,
        }
    }

    #[test]
    fn test_starts_offline_with_stub() {
        let state = PanelState::new();
        assert_eq!(state.phase, PanelPhase::Starting);
        assert!(!state.online);
        assert_eq!(state.snapshot, DeviceSnapshot::stub());
    }

    #[test]
    fn test_fetch_success_goes_online() {
        let mut state = PanelState::new();
        state.apply_fetch(Ok(live_snapshot()));

        assert!(state.online);
        assert_eq!(state.phase, PanelPhase::Running);
        assert_eq!(state.snapshot, live_snapshot());
    }

    #[test]
    fn test_fetch_failure_restores_stub_exactly() {
        let mut state = PanelState::new();
        state.apply_fetch(Ok(live_snapshot()));

        // A later failure must not leave any of the live data behind.
        state.apply_fetch(Err("connection refused".to_string()));
        assert!(!state.online);
        assert_eq!(state.snapshot, DeviceSnapshot::stub());
    }

    #[test]
    fn test_recovery_uses_server_snapshot_not_a_merge() {
        let mut state = PanelState::new();
        state.apply_fetch(Err("device down".to_string()));
        assert!(!state.online);

        state.apply_fetch(Ok(live_snapshot()));
        assert!(state.online);
        assert_eq!(state.snapshot, live_snapshot());
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Settings);
    }

    #[test]
    fn test_effect_cursor_clamps_to_catalog() {
        let mut state = PanelState::new();
        state.move_effect_cursor(-1);
        assert_eq!(state.effect_cursor, 0);

        state.move_effect_cursor(1000);
        assert_eq!(state.effect_cursor, gdeck_core::EFFECTS.len() - 1);
    }
}
