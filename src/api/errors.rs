//! API error types mapped to HTTP status codes.
//!
//! Client errors render `{"error", "message"}`. The 500 body is always the
//! bare `{"error": "Server error"}` so no internal detail reaches the caller.

use crate::search::types::SearchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// - `EmptyQuery` → 400
/// - `InvalidRequest` → 400
///
/// Server faults never travel through this type; they are caught as panics
/// by the router's middleware and rendered with [`server_error`].
#[derive(Debug)]
pub enum ApiError {
    /// The query was empty or whitespace-only (400).
    EmptyQuery,
    /// The body was not a JSON object with a string `query` (400).
    InvalidRequest(String),
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => ApiError::EmptyQuery,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "Empty query",
                    "message": SearchError::EmptyQuery.to_string(),
                })),
            )
                .into_response(),
            ApiError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": "Invalid request", "message": message })),
            )
                .into_response(),
        }
    }
}

/// The generic 500 body. Carries no detail about the failure.
pub fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "Server error" })),
    )
        .into_response()
}
