//! Main update function - handles state transitions (TEA pattern)

use gdeck_client::commands;
use gdeck_core::prelude::*;
use gdeck_core::{ConsoleEntry, EFFECTS, SCENES};

use crate::message::{CommandOrigin, Message};
use crate::state::{DashboardRow, PanelState, SettingsRow};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut PanelState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Synchronization
        // ─────────────────────────────────────────────────────────
        Message::StateFetched { result } => {
            if let Err(ref e) = result {
                debug!("State fetch failed, showing fallback data: {}", e);
            }
            state.apply_fetch(result);
            UpdateResult::none()
        }

        Message::CommandFinished {
            command,
            origin,
            result,
        } => {
            match result {
                Ok(outcome) => match origin {
                    CommandOrigin::Console => {
                        let entry = if outcome.success {
                            ConsoleEntry::response(outcome.message)
                        } else {
                            ConsoleEntry::error(outcome.message)
                        };
                        state.console.push(entry);
                    }
                    CommandOrigin::Ui => {
                        if !outcome.success {
                            state.console.push(ConsoleEntry::error(outcome.message));
                        }
                    }
                },
                Err(e) => {
                    warn!("Command {:?} failed: {}", command, e);
                    state
                        .console
                        .push(ConsoleEntry::error(format!("{}: {}", command, e)));
                }
            }

            // Every completed command, successful or not, triggers one
            // refresh so the panel reflects its effect without waiting for
            // the next poll tick.
            UpdateResult::action(UpdateAction::RefreshNow)
        }

        Message::ConfigSaved { label, result } => {
            state.settings.status = Some(match result {
                Ok(()) => label.to_string(),
                Err(e) => e,
            });
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.tab = state.tab.next();
            UpdateResult::none()
        }
        Message::PrevTab => {
            state.tab = state.tab.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::DashboardUp => {
            state.dashboard_row = state.dashboard_row.prev();
            UpdateResult::none()
        }
        Message::DashboardDown => {
            state.dashboard_row = state.dashboard_row.next();
            UpdateResult::none()
        }

        Message::DashboardAdjust(delta) => handle_dashboard_adjust(state, delta),

        Message::TogglePower => {
            // Optimistic flip; the post-command refresh reconciles it.
            state.snapshot.power = !state.snapshot.power;
            UpdateResult::action(UpdateAction::Dispatch {
                command: commands::power(state.snapshot.power),
                origin: CommandOrigin::Ui,
            })
        }

        Message::RefreshNow => UpdateResult::action(UpdateAction::RefreshNow),

        // ─────────────────────────────────────────────────────────
        // Effects
        // ─────────────────────────────────────────────────────────
        Message::EffectUp => {
            state.move_effect_cursor(-1);
            UpdateResult::none()
        }
        Message::EffectDown => {
            state.move_effect_cursor(1);
            UpdateResult::none()
        }
        Message::ApplyEffect => match EFFECTS.get(state.effect_cursor) {
            Some(effect) => UpdateResult::action(UpdateAction::Dispatch {
                command: commands::effect(effect.id),
                origin: CommandOrigin::Ui,
            }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Scenes
        // ─────────────────────────────────────────────────────────
        Message::ApplyScene(index) => match SCENES.get(index) {
            Some(scene) => UpdateResult::action(UpdateAction::Dispatch {
                command: scene.command.to_string(),
                origin: CommandOrigin::Ui,
            }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Console
        // ─────────────────────────────────────────────────────────
        Message::ConsoleInput(c) => {
            state.console_input.push(c);
            UpdateResult::none()
        }
        Message::ConsoleBackspace => {
            state.console_input.pop();
            UpdateResult::none()
        }
        Message::ConsoleSubmit => {
            let command = state.console_input.trim().to_string();
            if command.is_empty() {
                return UpdateResult::none();
            }
            state.console_input.clear();
            state.console_scroll = 0;
            state.console.push(ConsoleEntry::command(command.clone()));
            UpdateResult::action(UpdateAction::Dispatch {
                command,
                origin: CommandOrigin::Console,
            })
        }
        Message::ConsoleClear => {
            state.console.clear();
            state.console_scroll = 0;
            UpdateResult::none()
        }
        Message::ConsoleScrollUp => {
            state.console_scroll = (state.console_scroll + 1).min(state.console.len());
            UpdateResult::none()
        }
        Message::ConsoleScrollDown => {
            state.console_scroll = state.console_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Settings
        // ─────────────────────────────────────────────────────────
        Message::SettingsUp => {
            state.settings.row = state.settings.row.prev();
            UpdateResult::none()
        }
        Message::SettingsDown => {
            state.settings.row = state.settings.row.next();
            UpdateResult::none()
        }
        Message::SettingsInput(c) => {
            match state.settings.row {
                SettingsRow::Address => state.settings.address_input.push(c),
                SettingsRow::Token => state.settings.token_input.push(c),
                SettingsRow::Restart => {}
            }
            UpdateResult::none()
        }
        Message::SettingsBackspace => {
            match state.settings.row {
                SettingsRow::Address => {
                    state.settings.address_input.pop();
                }
                SettingsRow::Token => {
                    state.settings.token_input.pop();
                }
                SettingsRow::Restart => {}
            }
            UpdateResult::none()
        }
        Message::SettingsCommit => match state.settings.row {
            SettingsRow::Address => UpdateResult::action(UpdateAction::SaveAddress {
                address: state.settings.address_input.clone(),
            }),
            SettingsRow::Token => UpdateResult::action(UpdateAction::SaveToken {
                token: state.settings.token_input.clone(),
            }),
            SettingsRow::Restart => UpdateResult::action(UpdateAction::Dispatch {
                command: commands::restart(),
                origin: CommandOrigin::Ui,
            }),
        },
        Message::SettingsClearField => match state.settings.row {
            SettingsRow::Address => {
                state.settings.address_input.clear();
                UpdateResult::action(UpdateAction::ClearAddress)
            }
            SettingsRow::Token => {
                state.settings.token_input.clear();
                UpdateResult::action(UpdateAction::ClearToken)
            }
            SettingsRow::Restart => UpdateResult::none(),
        },
    }
}

fn handle_dashboard_adjust(state: &mut PanelState, delta: i16) -> UpdateResult {
    fn adjust(value: u8, delta: i16) -> u8 {
        (value as i16 + delta).clamp(0, 255) as u8
    }

    // Edits are optimistic and clamped here; the encoders pass values
    // through untouched.
    match state.dashboard_row {
        DashboardRow::Power => UpdateResult::none(),
        DashboardRow::Red | DashboardRow::Green | DashboardRow::Blue => {
            let rgb = &mut state.snapshot.rgb;
            match state.dashboard_row {
                DashboardRow::Red => rgb.r = adjust(rgb.r, delta),
                DashboardRow::Green => rgb.g = adjust(rgb.g, delta),
                DashboardRow::Blue => rgb.b = adjust(rgb.b, delta),
                _ => unreachable!(),
            }
            UpdateResult::action(UpdateAction::Dispatch {
                command: commands::rgb(state.snapshot.rgb),
                origin: CommandOrigin::Ui,
            })
        }
        DashboardRow::Brightness => {
            state.snapshot.brightness = adjust(state.snapshot.brightness, delta);
            UpdateResult::action(UpdateAction::Dispatch {
                command: commands::brightness(state.snapshot.brightness),
                origin: CommandOrigin::Ui,
            })
        }
    }
}
