//! Error types used throughout the profile service client

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Main error type for profile service operations
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Invalid configuration (bad base URL, relative path without a base,
    /// transport construction failure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure; no usable response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("{0}")]
    Remote(RemoteError),

    /// A lookup produced no matching resource
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ProfileError {
    /// HTTP status attached to this error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Result type alias for profile service operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// A non-2xx response normalized into a uniform shape.
///
/// Callers never need to branch on transport-library error types; the
/// status, the server-supplied error type and the best available message
/// are always carried here.
#[derive(Debug, Clone)]
pub struct RemoteError {
    /// HTTP status code of the response
    pub status: u16,
    /// Server-supplied error type, when the payload carried one
    pub kind: Option<String>,
    /// Server-supplied message, falling back to the raw response text
    pub message: String,
}

impl RemoteError {
    /// Whether the server reported the target resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => {
                write!(f, "Remote error (status {}): {}: {}", self.status, kind, self.message)
            }
            None => write!(f, "Remote error (status {}): {}", self.status, self.message),
        }
    }
}

/// Error body returned by the profile service.
///
/// Both fields are optional; unknown fields are ignored rather than read
/// dynamically.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
    /// Server-side error type, e.g. `NotFoundError`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Human-readable server message
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Build a [`RemoteError`] from this payload.
    ///
    /// Message fallback order: server `message` field, then the raw body
    /// text, then a generic status line.
    pub fn into_remote(self, status: u16, body_text: &str) -> RemoteError {
        let message = match self.message {
            Some(message) => message,
            None if !body_text.trim().is_empty() => body_text.to_string(),
            None => format!("request failed with status {status}"),
        };
        RemoteError { status, kind: self.kind, message }
    }
}
