//! Shared error types

use thiserror::Error;

/// Classified failures from the remote text-generation provider
///
/// Held internally by the report client for logging; the HTTP surface
/// collapses all of these into one generic generation-failure response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    #[error("authentication failed (invalid API key)")]
    AuthenticationFailed,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service temporarily unavailable")]
    ServiceUnavailable,

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("server error from provider: {0}")]
    ServerError(String),
}
