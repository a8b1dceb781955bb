//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per tab

pub(crate) mod keys;
pub(crate) mod update;

use crate::message::{CommandOrigin, Message};

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send a command string to the device in the background
    Dispatch {
        command: String,
        origin: CommandOrigin,
    },

    /// Trigger an immediate state refresh outside the timer cadence
    RefreshNow,

    /// Persist a device address
    SaveAddress { address: String },

    /// Remove the stored device address
    ClearAddress,

    /// Persist an access token
    SaveToken { token: String },

    /// Remove the stored access token
    ClearToken,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
