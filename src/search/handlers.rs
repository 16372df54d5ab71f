use super::engine::search;
use super::types::{SearchRequest, SearchResponse};
use crate::api::errors::ApiError;
use crate::api::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

/// `POST /api/search`
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that every malformed request gets the same JSON error envelope instead of
/// a plain-text rejection.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = parse_request(&body)?;
    let query = request.query.unwrap_or_default();

    let outcome = search(&query, state.corpus.documents()).map_err(|e| {
        tracing::debug!("Rejected search: {}", e);
        ApiError::from(e)
    })?;

    tracing::debug!(
        "Search for {} chars matched {} documents",
        query.chars().count(),
        outcome.results().len()
    );

    Ok(Json(SearchResponse::from(outcome)))
}

/// An empty body is read as a request without a query.
pub fn parse_request(body: &[u8]) -> Result<SearchRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchRequest::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(invalid_request)?;

    // Derived structs also accept JSON arrays; only an object is a request.
    if !value.is_object() {
        tracing::warn!("Malformed search request: body is not a JSON object");
        return Err(ApiError::InvalidRequest(INVALID_REQUEST_MESSAGE.to_string()));
    }

    serde_json::from_value(value).map_err(invalid_request)
}

const INVALID_REQUEST_MESSAGE: &str =
    "Request body must be a JSON object with a string `query` field.";

fn invalid_request(e: serde_json::Error) -> ApiError {
    tracing::warn!("Malformed search request: {}", e);
    ApiError::InvalidRequest(INVALID_REQUEST_MESSAGE.to_string())
}
