//! Error types for the chat API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed reply substituted whenever the completion call fails.
///
/// This exact text goes to the caller and to the interaction log; the real
/// upstream error never leaves the server.
pub const FALLBACK_REPLY: &str =
    "I'm currently experiencing high traffic (API Quota Exceeded). Please try again in a minute.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body carried no usable message.
    #[error("No message provided")]
    EmptyMessage,

    /// The completion call failed. The detail is kept for local diagnostics
    /// and the interaction log only.
    #[error("completion unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmptyMessage => (StatusCode::BAD_REQUEST, "No message provided"),
            ApiError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, FALLBACK_REPLY),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
