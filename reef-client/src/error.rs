//! Client error types

use thiserror::Error;

/// Errors surfaced by the customers API client.
///
/// Non-success statuses map onto the variants below; the response body
/// text rides along so screens can show what the server said.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, or body decode
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 from the server
    #[error("Authentication required")]
    Unauthorized,

    /// 403 with the server's reason
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404 for a customer id the server does not know
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400, typically a rejected payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
