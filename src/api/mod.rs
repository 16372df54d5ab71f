//! HTTP API layer built on Axum.
//!
//! Wires the search handler and health probe into a router and wraps it in
//! the shared middleware stack: request tracing, permissive CORS and a panic
//! barrier that turns any unexpected failure into a generic 500.

/// API error types mapped to HTTP status codes.
pub mod errors;

use crate::corpus::Corpus;
use crate::search::handlers::handle_search;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Public endpoint for search requests.
pub const ENDPOINT_SEARCH: &str = "/api/search";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

/// State shared by every handler.
///
/// Holds only the immutable corpus snapshot, so handlers never contend on a
/// lock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub corpus: Corpus,
}

impl AppState {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub documents: usize,
}

/// Builds the node's router with all routes and middleware attached.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route(ENDPOINT_HEALTH, get(health))
        .route(ENDPOINT_SEARCH, post(handle_search))
        .with_state(state);

    with_middleware(router)
}

/// Applies the middleware stack shared by every route.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        documents: state.corpus.len(),
    })
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Request handler panicked: {}", detail);
    errors::server_error()
}
