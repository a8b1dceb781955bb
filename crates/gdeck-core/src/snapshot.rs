//! Device state snapshot and wire DTOs.
//!
//! These types define the API contract between the panel and the device
//! firmware. Field renames pin the exact wire shape the firmware emits;
//! nothing here clamps or defaults; the device is trusted to send a
//! complete, well-typed snapshot, and a snapshot is always replaced
//! wholesale, never patched field by field.

use serde::{Deserialize, Serialize};

/// An RGB color triple as reported by the device (one byte per channel).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Full device state snapshot.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DeviceSnapshot {
    pub power: bool,
    pub rgb: Rgb,
    pub brightness: u8,
    /// Active effect id (see the effect catalog).
    pub effect: u16,
    #[serde(rename = "effectName")]
    pub effect_name: String,
    #[serde(rename = "wifiConnected")]
    pub wifi_connected: bool,
    #[serde(rename = "deviceName")]
    pub device_name: String,
    /// Milliseconds since device boot.
    pub uptime: u64,
    /// Free heap in bytes.
    #[serde(rename = "freeMemory")]
    pub free_memory: u64,
}

impl DeviceSnapshot {
    /// The fixed fallback snapshot shown while the device is unreachable.
    ///
    /// Always shown whole, never merged with previously fetched data.
    pub fn stub() -> Self {
        Self {
            power: true,
            rgb: Rgb::new(128, 64, 255),
            brightness: 200,
            effect: 1,
            effect_name: "Rainbow".to_string(),
            wifi_connected: true,
            device_name: "ESP8266-RGB".to_string(),
            uptime: 3_600_000,
            free_memory: 24_576,
        }
    }
}

/// Response body of `GET /state`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StateResponse {
    pub success: bool,
    pub state: DeviceSnapshot,
}

/// Response body of `POST /command`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
}
