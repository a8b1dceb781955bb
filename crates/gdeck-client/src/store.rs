//! Persisted endpoint configuration.
//!
//! The panel remembers exactly one device: an address and an optional access
//! token. Storage is an injectable capability so the resolver and protocol
//! client depend on an interface rather than ambient global state: the TUI
//! uses [`FileStore`], while a one-run address override (and tests) use
//! [`MemoryStore`].

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use gdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "device.toml";
const CONFIG_DIR: &str = "glowdeck";

/// The persisted device endpoint configuration.
///
/// Both fields are optional and independently settable. An absent address
/// means "no base URL, requests cannot be made", not "use a default host".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Storage capability for [`EndpointConfig`].
///
/// Implementations must tolerate concurrent readers; the configuration is
/// re-read on every device request and may be changed by user action between
/// the start and end of a request.
pub trait ConfigStore: Send + Sync {
    /// Load the current configuration. Missing or unparseable storage yields
    /// the default (empty) configuration rather than an error.
    fn load(&self) -> EndpointConfig;

    /// Persist the given configuration, replacing what was stored.
    fn save(&self, config: &EndpointConfig) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// FileStore
// ─────────────────────────────────────────────────────────────────────────────

/// TOML-file-backed store under the user's config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, `<config dir>/glowdeck/device.toml`.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> EndpointConfig {
        if !self.path.exists() {
            debug!("No device config at {:?}, using defaults", self.path);
            return EndpointConfig::default();
        }

        match std::fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", self.path, e);
                    EndpointConfig::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", self.path, e);
                EndpointConfig::default()
            }
        }
    }

    fn save(&self, config: &EndpointConfig) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::config("config path has no parent directory"))?;

        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }

        let header = "# glowdeck device endpoint\n# Managed from the Settings tab\n\n";
        let content = toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;

        // Atomic write: write to temp, then rename
        let temp_path = dir.join(".device.toml.tmp");
        std::fs::write(&temp_path, format!("{}{}", header, content))
            .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved device config to {:?}", self.path);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store. Used for one-run address overrides from the command line
/// (nothing is persisted) and as a test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: Mutex<EndpointConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing configuration.
    pub fn with_config(config: EndpointConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> EndpointConfig {
        self.config.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, config: &EndpointConfig) -> Result<()> {
        *self.config.lock().unwrap_or_else(|e| e.into_inner()) = config.clone();
        Ok(())
    }
}
