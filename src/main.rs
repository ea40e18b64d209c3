//! Reasoning Chain - step-by-step reasoning over an OpenAI-compatible model
//!
//! Drives a multi-turn conversation that makes the model reason in labeled
//! steps before committing to a final answer, and serves it over HTTP.

mod api;
mod chain;
mod config;
mod llm;
mod render;
mod session;

use api::{create_router, AppState};
use config::AppConfig;
use llm::OpenAIClientFactory;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reasoning_chain=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        api_base = %config.default_api_base,
        model = %config.default_model,
        timeout_secs = config.request_timeout.as_secs(),
        "Configuration loaded"
    );

    let client_factory = Arc::new(OpenAIClientFactory::new(config.request_timeout));
    let shutdown = CancellationToken::new();
    let port = config.port;
    let state = AppState::new(config, client_factory, shutdown.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true).deflate(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Reasoning chain server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C, cancelling in-flight sessions at their next step
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
    shutdown.cancel();
}
