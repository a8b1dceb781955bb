//! Display formatters for device-reported numeric fields.
//!
//! Pure functions, no state, no I/O. These back the dashboard status cards
//! and the `--status` CLI output.

use std::sync::OnceLock;

use regex::Regex;

use crate::snapshot::Rgb;

/// Format device uptime (milliseconds since boot) as a short human string.
///
/// `90_000` → `"1m 30s"`, `3_600_000` → `"1h 0m 0s"`, four days → `"4d 2h 7m"`.
pub fn format_uptime(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h {}m", days, hours % 24, minutes % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Format free heap bytes as kilobytes with two decimals.
pub fn format_memory(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Convert an RGB triple to a lowercase `#rrggbb` hex string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color pattern is valid")
    })
}

/// Parse a `#rrggbb` hex color (leading `#` optional, case-insensitive).
///
/// Returns `None` for anything that is not exactly six hex digits; short
/// forms like `#fff` are rejected.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let captures = hex_pattern().captures(hex)?;
    let channel = |i| u8::from_str_radix(&captures[i], 16).ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Format a timestamp for console display (local wall clock).
pub fn format_timestamp(time: chrono::DateTime<chrono::Local>) -> String {
    time.format("%H:%M:%S").to_string()
}
