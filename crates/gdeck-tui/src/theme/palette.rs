//! Color palette for the panel theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Console entry colors ---
pub const CONSOLE_COMMAND: Color = Color::Cyan;
pub const CONSOLE_RESPONSE: Color = Color::White;
pub const CONSOLE_ERROR: Color = Color::Red;

// --- Channel colors ---
pub const CHANNEL_RED: Color = Color::Red;
pub const CHANNEL_GREEN: Color = Color::Green;
pub const CHANNEL_BLUE: Color = Color::Blue;
