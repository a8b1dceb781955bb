//! # gdeck-core - Core Domain Types
//!
//! Foundation crate for glowdeck. Provides the device snapshot model, error
//! handling, display formatters, static catalogs, and console log types.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Snapshot (`snapshot`)
//! - [`DeviceSnapshot`] - Full device state, replaced wholesale per fetch
//! - [`Rgb`] - One-byte-per-channel color triple
//! - [`StateResponse`], [`CommandOutcome`] - Wire DTOs for the device API
//!
//! ### Formatters (`format`)
//! - [`format_uptime()`], [`format_memory()`] - Status display strings
//! - [`rgb_to_hex()`], [`hex_to_rgb()`] - Hex color conversion
//!
//! ### Catalogs (`catalog`)
//! - [`Effect`], [`EFFECTS`] - Firmware effect table
//! - [`Scene`], [`SCENES`] - One-key scene presets
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Console (`console`)
//! - [`ConsoleEntry`], [`ConsoleKind`], [`ConsoleLog`] - Command console log
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gdeck_core::prelude::*;
//! ```

pub mod catalog;
pub mod console;
pub mod error;
pub mod format;
pub mod logging;
pub mod snapshot;

/// Prelude for common imports used throughout all glowdeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{effect_by_id, Effect, Scene, EFFECTS, SCENES};
pub use console::{ConsoleEntry, ConsoleKind, ConsoleLog};
pub use error::{Error, Result};
pub use format::{format_memory, format_timestamp, format_uptime, hex_to_rgb, rgb_to_hex};
pub use snapshot::{CommandOutcome, DeviceSnapshot, Rgb, StateResponse};
