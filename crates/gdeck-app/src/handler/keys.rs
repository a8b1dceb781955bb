//! Key event handling per UI tab.
//!
//! Translates abstract [`InputKey`] events into [`Message`]s based on the
//! active tab. Text-entry tabs (Console, Settings) capture printable
//! characters, so `q`-to-quit and scene shortcuts only apply on the
//! Dashboard and Effects tabs. Ctrl+C quits everywhere.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{PanelState, Tab};
use gdeck_core::SCENES;

/// Convert a key event into a message, or `None` to ignore it.
pub fn handle_key(state: &PanelState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        _ => {}
    }

    match state.tab {
        Tab::Dashboard => handle_dashboard_key(key),
        Tab::Effects => handle_effects_key(key),
        Tab::Console => handle_console_key(key),
        Tab::Settings => handle_settings_key(key),
    }
}

/// Scene shortcut on the number row, shared by Dashboard and Effects.
fn scene_shortcut(c: char) -> Option<Message> {
    let index = c.to_digit(10)? as usize;
    if (1..=SCENES.len()).contains(&index) {
        Some(Message::ApplyScene(index - 1))
    } else {
        None
    }
}

fn handle_dashboard_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('p') | InputKey::Char(' ') => Some(Message::TogglePower),
        InputKey::Char('r') => Some(Message::RefreshNow),
        InputKey::Char(c) => scene_shortcut(c),
        InputKey::Up => Some(Message::DashboardUp),
        InputKey::Down => Some(Message::DashboardDown),
        InputKey::Left => Some(Message::DashboardAdjust(-5)),
        InputKey::Right => Some(Message::DashboardAdjust(5)),
        InputKey::Enter => Some(Message::TogglePower),
        _ => None,
    }
}

fn handle_effects_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('p') => Some(Message::TogglePower),
        InputKey::Char('r') => Some(Message::RefreshNow),
        InputKey::Char(c) => scene_shortcut(c),
        InputKey::Up => Some(Message::EffectUp),
        InputKey::Down => Some(Message::EffectDown),
        InputKey::Enter => Some(Message::ApplyEffect),
        _ => None,
    }
}

fn handle_console_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('l') => Some(Message::ConsoleClear),
        InputKey::Char(c) => Some(Message::ConsoleInput(c)),
        InputKey::Backspace => Some(Message::ConsoleBackspace),
        InputKey::Enter => Some(Message::ConsoleSubmit),
        InputKey::Up => Some(Message::ConsoleScrollUp),
        InputKey::Down => Some(Message::ConsoleScrollDown),
        _ => None,
    }
}

fn handle_settings_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::SettingsInput(c)),
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::Delete => Some(Message::SettingsClearField),
        InputKey::Enter => Some(Message::SettingsCommit),
        InputKey::Up => Some(Message::SettingsUp),
        InputKey::Down => Some(Message::SettingsDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on(tab: Tab) -> PanelState {
        let mut state = PanelState::new();
        state.tab = tab;
        state
    }

    #[test]
    fn test_ctrl_c_quits_on_every_tab() {
        for tab in Tab::ALL {
            let msg = handle_key(&state_on(tab), InputKey::CharCtrl('c'));
            assert!(matches!(msg, Some(Message::Quit)), "tab {:?}", tab);
        }
    }

    #[test]
    fn test_tab_key_cycles_tabs_everywhere() {
        for tab in Tab::ALL {
            assert!(matches!(
                handle_key(&state_on(tab), InputKey::Tab),
                Some(Message::NextTab)
            ));
            assert!(matches!(
                handle_key(&state_on(tab), InputKey::BackTab),
                Some(Message::PrevTab)
            ));
        }
    }

    #[test]
    fn test_q_quits_only_outside_text_entry() {
        assert!(matches!(
            handle_key(&state_on(Tab::Dashboard), InputKey::Char('q')),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(&state_on(Tab::Console), InputKey::Char('q')),
            Some(Message::ConsoleInput('q'))
        ));
        assert!(matches!(
            handle_key(&state_on(Tab::Settings), InputKey::Char('q')),
            Some(Message::SettingsInput('q'))
        ));
    }

    #[test]
    fn test_scene_shortcuts_on_dashboard() {
        assert!(matches!(
            handle_key(&state_on(Tab::Dashboard), InputKey::Char('1')),
            Some(Message::ApplyScene(0))
        ));
        assert!(matches!(
            handle_key(&state_on(Tab::Dashboard), InputKey::Char('6')),
            Some(Message::ApplyScene(5))
        ));
        // Out of catalog range
        assert!(handle_key(&state_on(Tab::Dashboard), InputKey::Char('7')).is_none());
        assert!(handle_key(&state_on(Tab::Dashboard), InputKey::Char('0')).is_none());
    }

    #[test]
    fn test_digits_type_into_console() {
        assert!(matches!(
            handle_key(&state_on(Tab::Console), InputKey::Char('1')),
            Some(Message::ConsoleInput('1'))
        ));
    }

    #[test]
    fn test_dashboard_adjust_arrows() {
        assert!(matches!(
            handle_key(&state_on(Tab::Dashboard), InputKey::Left),
            Some(Message::DashboardAdjust(-5))
        ));
        assert!(matches!(
            handle_key(&state_on(Tab::Dashboard), InputKey::Right),
            Some(Message::DashboardAdjust(5))
        ));
    }

    #[test]
    fn test_effects_enter_applies() {
        assert!(matches!(
            handle_key(&state_on(Tab::Effects), InputKey::Enter),
            Some(Message::ApplyEffect)
        ));
    }

    #[test]
    fn test_console_ctrl_l_clears() {
        assert!(matches!(
            handle_key(&state_on(Tab::Console), InputKey::CharCtrl('l')),
            Some(Message::ConsoleClear)
        ));
    }
}
