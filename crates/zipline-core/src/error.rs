//! Application error types

use std::path::PathBuf;
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
    // Upload Errors
    // ─────────────────────────────────────────────────────────────
    /// The service rejected the upload; `message` is shown verbatim
    #[error("upload rejected: {message}")]
    Upload { message: String },

    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Transport/Channel Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("WebSocket error: {message}")]
    WebSocket { message: String },

    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    #[error("Invalid server URL: {url}")]
    InvalidUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
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

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn archive_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ArchiveNotFound { path: path.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn web_socket(message: impl Into<String>) -> Self {
        Self::WebSocket {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (user can retry via restart)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Upload { .. }
                | Error::Transport { .. }
                | Error::WebSocket { .. }
                | Error::ChannelSend { .. }
                | Error::ChannelClosed
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::Config { .. } | Error::InvalidUrl { .. }
        )
    }

    /// The message to surface in the console for a failed upload.
    ///
    /// Upload rejections carry the server's own words; everything else
    /// (transport failures, missing file) uses its display form.
    pub fn console_message(&self) -> String {
        match self {
            Error::Upload { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::upload("Invalid file type. Please upload a ZIP file.");
        assert_eq!(
            err.to_string(),
            "upload rejected: Invalid file type. Please upload a ZIP file."
        );

        let err = Error::invalid_url("nope");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::upload("nope").is_recoverable());
        assert!(Error::transport("timeout").is_recoverable());
        assert!(Error::ChannelClosed.is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::terminal("no tty").is_fatal());
        assert!(Error::config("bad toml").is_fatal());
        assert!(!Error::upload("nope").is_fatal());
    }

    #[test]
    fn test_console_message_uses_server_words_for_upload() {
        let err = Error::upload("No file selected.");
        assert_eq!(err.console_message(), "No file selected.");

        let err = Error::transport("connection refused");
        assert_eq!(err.console_message(), "Transport error: connection refused");
    }
}
