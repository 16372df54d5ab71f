use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, routing::get, routing::post};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mini-search-ui", about = "Browser front-end for a mini-search node")]
struct Args {
    /// Address the UI server listens on
    #[arg(short, long, env = "UI_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Base URL of the search node
    #[arg(short, long, env = "NODE_URL", default_value = "http://127.0.0.1:3000")]
    node_url: String,
}

#[derive(Clone)]
struct AppState {
    node_url: String,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let state = AppState {
        node_url: normalize_node_url(&args.node_url),
        client: reqwest::Client::new(),
    };
    tracing::info!("Forwarding searches to {}", state.node_url);

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/search", post(api_search))
        .with_state(state);

    tracing::info!("UI listening on {}", args.bind);
    axum::serve(tokio::net::TcpListener::bind(args.bind).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// Relays the search body to the node and hands its status and JSON body
/// back to the browser untouched, so the page sees exactly the node's
/// response shapes.
async fn api_search(State(state): State<AppState>, body: Bytes) -> Response {
    let url = format!("{}/api/search", state.node_url);

    let resp = match state
        .client
        .post(url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Search node unreachable: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Search node unreachable" })),
            )
                .into_response();
        }
    };

    let status =
        StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({ "error": "Server error" }));

    (status, Json(body)).into_response()
}

fn normalize_node_url(candidate: &str) -> String {
    let trimmed = candidate.trim();

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
