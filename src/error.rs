//! Error types for the Twitch Helix API client.
//!
//! This module provides a single error type covering all failure modes
//! of the crate, from transport errors to Helix API error responses.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Twitch Helix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Twitch Helix API operations.
///
/// Transport failures from the remote API keep the upstream JSON error
/// payload verbatim in [`Error::Api`], so callers can match on the
/// original response structurally instead of re-parsing a message string.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message from the API
        message: String,
        /// Raw response body, exactly as the API returned it
        body: Value,
    },

    /// Category lookup by name returned no results during a channel update
    #[error("category not found: {name}")]
    CategoryNotFound {
        /// The category name that was looked up
        name: String,
    },

    /// Configuration error (missing credentials, invalid base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if this error is a remote API rejection rather than
    /// a local transport or usage error.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response, preserving the raw payload.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "error": "Unauthorized",
            "status": 401,
            "message": "Invalid OAuth token"
        });

        let err = Error::from_api_response(401, body.clone());
        match err {
            Error::Api {
                status,
                message,
                body: payload,
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid OAuth token");
                assert_eq!(payload, body);
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_api_response_opaque_body() {
        let err = Error::from_api_response(500, serde_json::json!({}));
        match err {
            Error::Api { status, message, .. } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Unknown API error");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_category_not_found_is_not_api_error() {
        let err = Error::CategoryNotFound {
            name: "Just Chatting".into(),
        };
        assert!(!err.is_api_error());
        assert!(err.to_string().contains("Just Chatting"));
    }

    #[test]
    fn test_client_and_server_errors() {
        let client = Error::from_api_response(404, serde_json::json!({}));
        let server = Error::from_api_response(503, serde_json::json!({}));
        assert!(client.is_client_error());
        assert!(!client.is_server_error());
        assert!(server.is_server_error());
        assert!(Error::Config("missing TWITCH_CLIENT_ID".into()).is_client_error());
    }
}
