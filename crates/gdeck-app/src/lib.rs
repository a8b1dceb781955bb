//! # gdeck-app - Application State and Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! panel: the state model, the message vocabulary, the pure `update()`
//! transition, action dispatch, and the polling synchronization task.
//!
//! The synchronization policy lives in [`PanelState::apply_fetch`]: a
//! successful fetch replaces the snapshot and flips the panel online; any
//! failure (unconfigured, unreachable, rejected, malformed) swaps in the
//! fixed stub snapshot and flips it offline. The distinction is logged,
//! never surfaced as a blocking error.

pub mod actions;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod poller;
pub mod state;

// Re-export primary types
pub use actions::handle_action;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{CommandOrigin, Message};
pub use poller::{Poller, POLL_INTERVAL};
pub use state::{DashboardRow, PanelPhase, PanelState, SettingsForm, SettingsRow, Tab};
