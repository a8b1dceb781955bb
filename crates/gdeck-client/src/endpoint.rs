//! Endpoint resolution over a [`ConfigStore`].
//!
//! The resolver turns the persisted configuration into request material: an
//! optional base URL and an optional bearer token. It re-reads the store on
//! every call; nothing caches the base URL for longer than a single
//! request's construction, so user edits take effect on the next request.

use std::sync::Arc;

use url::Url;

use gdeck_core::prelude::*;

use crate::store::ConfigStore;

/// Resolves the device base URL and token from persisted configuration.
#[derive(Clone)]
pub struct EndpointResolver {
    store: Arc<dyn ConfigStore>,
}

impl std::fmt::Debug for EndpointResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointResolver")
            .field("address", &self.address())
            .finish()
    }
}

impl EndpointResolver {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// The configured device address, if any.
    pub fn address(&self) -> Option<String> {
        self.store.load().address
    }

    /// Save a device address. Fails with [`Error::InvalidAddress`] when the
    /// input is empty after trimming; format validation is advisory only and
    /// requires no network round-trip.
    pub fn set_address(&self, address: &str) -> Result<()> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidAddress);
        }

        let mut config = self.store.load();
        config.address = Some(trimmed.to_string());
        self.store.save(&config)
    }

    pub fn clear_address(&self) -> Result<()> {
        let mut config = self.store.load();
        config.address = None;
        self.store.save(&config)
    }

    /// The configured access token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.load().token
    }

    /// Save an access token. Same contract as [`set_address`], independent key.
    ///
    /// [`set_address`]: EndpointResolver::set_address
    pub fn set_token(&self, token: &str) -> Result<()> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidToken);
        }

        let mut config = self.store.load();
        config.token = Some(trimmed.to_string());
        self.store.save(&config)
    }

    pub fn clear_token(&self) -> Result<()> {
        let mut config = self.store.load();
        config.token = None;
        self.store.save(&config)
    }

    /// The device base URL, `http://<address>`, or `None` when no address is
    /// configured. Callers with no base URL must route to the offline path.
    pub fn base_url(&self) -> Option<Url> {
        let address = self.address()?;
        match Url::parse(&format!("http://{}", address)) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Configured address {:?} does not form a URL: {}", address, e);
                None
            }
        }
    }
}
