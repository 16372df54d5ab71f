use anyhow::Context;
use clap::Parser;
use mini_search::api::{AppState, create_router};
use mini_search::config::Config;
use mini_search::corpus::Corpus;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let corpus = match &config.corpus {
        Some(path) => {
            let corpus = Corpus::from_path(path)
                .with_context(|| format!("loading corpus from {}", path.display()))?;
            tracing::info!("Loaded {} documents from {}", corpus.len(), path.display());
            corpus
        }
        None => {
            let corpus = Corpus::builtin().context("loading built-in corpus")?;
            tracing::info!("Loaded {} built-in documents", corpus.len());
            corpus
        }
    };

    if corpus.is_empty() {
        tracing::warn!("Corpus is empty; every search will return no matches");
    }

    let app = create_router(AppState::new(corpus));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
