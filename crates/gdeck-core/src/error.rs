//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Device API Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No device address configured")]
    NotConfigured,

    #[error("Device returned HTTP status {code}")]
    HttpStatus { code: u16 },

    #[error("Device protocol error: {message}")]
    Protocol { message: String },

    #[error("Failed to decode device response: {message}")]
    Decode { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Device address must not be empty")]
    InvalidAddress,

    #[error("Access token must not be empty")]
    InvalidToken,

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http_status(code: u16) -> Self {
        Self::HttpStatus { code }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Every device-facing failure is recoverable: the panel degrades to the
    /// stub snapshot and keeps polling.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::NotConfigured
                | Error::HttpStatus { .. }
                | Error::Protocol { .. }
                | Error::Decode { .. }
                | Error::Transport { .. }
                | Error::InvalidAddress
                | Error::InvalidToken
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::http_status(503);
        assert_eq!(err.to_string(), "Device returned HTTP status 503");

        let err = Error::protocol("success flag was false");
        assert_eq!(
            err.to_string(),
            "Device protocol error: success flag was false"
        );

        let err = Error::NotConfigured;
        assert!(err.to_string().contains("No device address"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_device_errors_are_recoverable() {
        assert!(Error::NotConfigured.is_recoverable());
        assert!(Error::http_status(500).is_recoverable());
        assert!(Error::protocol("nope").is_recoverable());
        assert!(Error::decode("bad body").is_recoverable());
        assert!(Error::transport("connection refused").is_recoverable());
    }

    #[test]
    fn test_terminal_error_is_fatal() {
        assert!(Error::terminal("raw mode failed").is_fatal());
        assert!(!Error::NotConfigured.is_fatal());
        assert!(!Error::transport("timeout").is_fatal());
    }

    #[test]
    fn test_invalid_address_is_not_fatal() {
        let err = Error::InvalidAddress;
        assert!(!err.is_fatal());
        assert!(err.is_recoverable());
    }
}
