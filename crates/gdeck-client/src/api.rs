//! HTTP protocol client for the device API.
//!
//! Single choke point for all device I/O. Two endpoints exist:
//! `GET /state` returning `{success, state}` and `POST /command` taking
//! `{cmd}` and returning `{success, message}`. A bearer token is attached
//! only when one is configured. The client never retries; every failure is
//! returned to the caller, who decides policy (the sync loop degrades to the
//! stub snapshot, command dispatch surfaces the error inline).

use serde::Serialize;

use gdeck_core::prelude::*;
use gdeck_core::snapshot::{CommandOutcome, DeviceSnapshot, Rgb, StateResponse};

use crate::commands;
use crate::endpoint::EndpointResolver;

/// Request body of `POST /command`.
#[derive(Debug, Serialize)]
struct CommandRequest<'a> {
    cmd: &'a str,
}

/// HTTP client bound to the endpoint resolver.
///
/// Cheap to clone; clones share the underlying connection pool and config
/// store. The base URL and token are resolved fresh for every request.
#[derive(Clone, Debug)]
pub struct DeviceClient {
    resolver: EndpointResolver,
    http: reqwest::Client,
}

impl DeviceClient {
    pub fn new(resolver: EndpointResolver) -> Self {
        Self {
            resolver,
            http: reqwest::Client::new(),
        }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Fetch the authoritative device state.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConfigured`] when no address is stored.
    /// - [`Error::Transport`] when the request itself fails.
    /// - [`Error::HttpStatus`] on a non-2xx response.
    /// - [`Error::Decode`] when the body does not match the wire shape.
    /// - [`Error::Protocol`] when the body's `success` flag is false.
    pub async fn fetch_state(&self) -> Result<DeviceSnapshot> {
        let base = self.resolver.base_url().ok_or(Error::NotConfigured)?;
        let url = base
            .join("/state")
            .map_err(|e| Error::config(e.to_string()))?;

        let mut request = self.http.get(url);
        if let Some(token) = self.resolver.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        let body: StateResponse = response
            .json()
            .await
            .map_err(|e| Error::decode(e.to_string()))?;

        if !body.success {
            return Err(Error::protocol("state response flagged success: false"));
        }

        // Returned unchanged: no clamping, no defaulting of missing fields.
        Ok(body.state)
    }

    /// Send a raw command string to the device's interpreter.
    ///
    /// One leading `/` is stripped; beyond that the text is forwarded
    /// verbatim. The outcome's `success` flag reflects the interpreter's
    /// verdict and is not mapped to an error here.
    pub async fn send_command(&self, raw: &str) -> Result<CommandOutcome> {
        let cmd = commands::normalize(raw);

        let base = self.resolver.base_url().ok_or(Error::NotConfigured)?;
        let url = base
            .join("/command")
            .map_err(|e| Error::config(e.to_string()))?;

        let mut request = self.http.post(url).json(&CommandRequest { cmd });
        if let Some(token) = self.resolver.token() {
            request = request.bearer_auth(token);
        }

        debug!("Sending device command: {}", cmd);

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| Error::decode(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────
    // Convenience encoders over send_command
    // ─────────────────────────────────────────────────────────────

    pub async fn set_power(&self, on: bool) -> Result<CommandOutcome> {
        self.send_command(&commands::power(on)).await
    }

    pub async fn set_rgb(&self, color: Rgb) -> Result<CommandOutcome> {
        self.send_command(&commands::rgb(color)).await
    }

    pub async fn set_brightness(&self, level: u8) -> Result<CommandOutcome> {
        self.send_command(&commands::brightness(level)).await
    }

    pub async fn set_effect(&self, id: u16) -> Result<CommandOutcome> {
        self.send_command(&commands::effect(id)).await
    }

    pub async fn set_scene(&self, name: &str) -> Result<CommandOutcome> {
        self.send_command(&commands::scene(name)).await
    }

    pub async fn restart(&self) -> Result<CommandOutcome> {
        self.send_command(&commands::restart()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_fetch_state_without_address_fails_fast() {
        let client = DeviceClient::new(EndpointResolver::new(Arc::new(MemoryStore::new())));
        let err = client.fetch_state().await.unwrap_err();
        assert!(matches!(err, Error::NotConfigured));
    }

    #[tokio::test]
    async fn test_send_command_without_address_fails_fast() {
        let client = DeviceClient::new(EndpointResolver::new(Arc::new(MemoryStore::new())));
        let err = client.send_command("power on").await.unwrap_err();
        assert!(matches!(err, Error::NotConfigured));
    }
}
