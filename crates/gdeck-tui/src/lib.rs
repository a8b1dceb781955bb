//! gdeck-tui - Terminal UI for glowdeck
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, the view function, and the panel widgets. State and orchestration
//! live in gdeck-app; this crate only renders and forwards input.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
