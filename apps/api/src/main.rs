mod analysis;
mod config;
mod cover_letter;
mod errors;
mod routes;
mod state;
mod tailoring;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::taxonomy::KeywordTaxonomy;
use crate::config::Config;
use crate::cover_letter::client::{AnthropicClient, CompletionClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("ats_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Build the shared read-only keyword taxonomy
    let taxonomy = Arc::new(KeywordTaxonomy::new());
    info!("Keyword taxonomy initialized");

    // Chat-completion client for cover letters, if a key is configured
    let completions: Option<Arc<dyn CompletionClient>> = match &config.anthropic_api_key {
        Some(key) => {
            info!(
                "Completion client initialized (model: {})",
                cover_letter::client::MODEL
            );
            Some(Arc::new(AnthropicClient::new(key.clone())))
        }
        None => {
            info!("No ANTHROPIC_API_KEY set; cover-letter generation disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        taxonomy,
        completions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
