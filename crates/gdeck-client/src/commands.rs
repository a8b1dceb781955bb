//! Canonical command string encoders.
//!
//! The device speaks a single `cmd`-string protocol; these helpers format
//! the known command shapes. New firmware capabilities only ever need a new
//! encoder here, never a new endpoint. Free text from the console is passed
//! through [`normalize`] untouched apart from the slash strip.

use gdeck_core::snapshot::Rgb;

/// Strip exactly one leading `/` so `"/power on"` and `"power on"` encode
/// identically on the wire.
pub fn normalize(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}

/// `power on` / `power off`
pub fn power(on: bool) -> String {
    format!("power {}", if on { "on" } else { "off" })
}

/// `rgb <r> <g> <b>`. Channel values pass through unclamped beyond the u8
/// type; range limiting is the caller's job.
pub fn rgb(color: Rgb) -> String {
    format!("rgb {} {} {}", color.r, color.g, color.b)
}

/// `brightness <level>`
pub fn brightness(level: u8) -> String {
    format!("brightness {}", level)
}

/// `effect <id>`
pub fn effect(id: u16) -> String {
    format!("effect {}", id)
}

/// `scene <name>`. The name is lower-cased before encoding.
pub fn scene(name: &str) -> String {
    format!("scene {}", name.to_lowercase())
}

/// `restart`
pub fn restart() -> String {
    "restart".to_string()
}
