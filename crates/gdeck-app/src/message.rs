//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use gdeck_core::{CommandOutcome, DeviceSnapshot};

/// Where a command dispatch originated. Console commands echo their
/// responses into the console log; UI commands only surface failures there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrigin {
    Ui,
    Console,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event on the event-poll timeout; drives nothing state-bearing
    Tick,

    /// Force quit (Ctrl+C or `q`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Synchronization
    // ─────────────────────────────────────────────────────────
    /// Result of a state fetch, timer-driven or manual. The error arm
    /// carries display text only; the detail was already logged.
    StateFetched {
        result: Result<DeviceSnapshot, String>,
    },

    /// A command dispatch completed (successfully or not)
    CommandFinished {
        command: String,
        origin: CommandOrigin,
        result: Result<CommandOutcome, String>,
    },

    /// An endpoint configuration operation completed
    ConfigSaved {
        label: &'static str,
        result: Result<(), String>,
    },

    // ─────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    /// Move dashboard focus up/down
    DashboardUp,
    DashboardDown,
    /// Adjust the focused channel/brightness row by a delta
    DashboardAdjust(i16),
    /// Toggle device power
    TogglePower,
    /// Request an immediate state refresh outside the timer cadence
    RefreshNow,

    // ─────────────────────────────────────────────────────────
    // Effects
    // ─────────────────────────────────────────────────────────
    EffectUp,
    EffectDown,
    /// Apply the effect under the cursor
    ApplyEffect,

    // ─────────────────────────────────────────────────────────
    // Scenes
    // ─────────────────────────────────────────────────────────
    /// Apply a scene preset by catalog index (number row 1-6)
    ApplyScene(usize),

    // ─────────────────────────────────────────────────────────
    // Console
    // ─────────────────────────────────────────────────────────
    ConsoleInput(char),
    ConsoleBackspace,
    /// Send the typed command verbatim
    ConsoleSubmit,
    /// Clear the console scrollback
    ConsoleClear,
    ConsoleScrollUp,
    ConsoleScrollDown,

    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────
    SettingsUp,
    SettingsDown,
    SettingsInput(char),
    SettingsBackspace,
    /// Save the focused field (or trigger the restart row)
    SettingsCommit,
    /// Clear the focused field's stored value
    SettingsClearField,
}
