//! Request failures surfaced to callers of the API client.
//!
//! ERROR HANDLING
//! ==============
//! The `Display` text of each variant is the human-readable message shown to
//! users and handed to page scripts as the JS `Error` message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Message for requests refused locally because no credential is stored.
pub const UNAUTHENTICATED_MESSAGE: &str = "Authentication required";

/// Message for requests that never reached the server.
pub const CONNECTION_MESSAGE: &str = "Unable to reach the server. Check that the server is running.";

/// Failure modes of [`crate::net::api::ApiClient::request`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No credential stored and the path is not an auth endpoint.
    #[error("Authentication required")]
    Unauthenticated,
    /// The server rejected the stored credential; local state was cleared.
    #[error("Session expired, please sign in again")]
    SessionExpired,
    #[error("Unable to reach the server. Check that the server is running.")]
    Connection,
    /// Error text supplied by the server in the response body.
    #[error("{0}")]
    Server(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Transport(String),
}

/// Failure reported by a [`crate::net::transport::Transport`] before any
/// response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The network call itself failed (`fetch` rejected with a `TypeError`).
    #[error("network failure: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(_) => Self::Connection,
            TransportError::Other(message) => Self::Transport(message),
        }
    }
}
