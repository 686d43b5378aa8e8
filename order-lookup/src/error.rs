//! Error types for order lookups
//!
//! A lookup never fails past the fetch boundary: every outcome is a
//! `FetchResult`, and each `FetchError` kind is shown to the user as text.

use thiserror::Error;

use crate::order::Order;

/// Outcome of a single order lookup
pub type FetchResult = Result<Order, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success status without a readable `{"message": ...}` body
    #[error("HTTP error: {code} {status_text}")]
    Http { code: u16, status_text: String },

    /// Non-success status with a message from the API
    #[error("{message}")]
    Api { message: String },

    /// The request itself failed (DNS, connection, body read or decode)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// Short kind name used in generic user-facing messages
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http { .. } => "http",
            FetchError::Api { .. } => "api",
            FetchError::Network(_) => "network",
        }
    }
}
