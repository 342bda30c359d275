//! Server-specific error types and their HTTP renderings

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use shared::ApiFailure;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Deliberately generic so unknown-email and wrong-password cases are
    /// indistinguishable to the caller
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication token missing or invalid")]
    InvalidToken,

    #[error("API key for Gemini is not configured (set {key})")]
    MissingApiKey { key: &'static str },

    /// The provider cause stays internal; callers only see the generic
    /// message
    #[error("Failed to generate the payroll report")]
    GenerationFailed(#[source] ApiFailure),

    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidCredentials | ServerError::InvalidToken => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}
