//! Happy Feed API Server
//!
//! Serves random posts from a syndication feed, optionally rewritten with a
//! positive sentiment by a chat-completion provider.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{completion_client_from_settings, HttpFeedClient};
use app::{DiagnosticsService, MessageCache, MessageService, SentimentTransformer};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<MessageService<HttpFeedClient>>,
    pub diagnostics_service: Arc<DiagnosticsService<HttpFeedClient>>,
}

impl AppState {
    /// Wire adapters and services from configuration
    pub fn from_config(config: &Config, http: reqwest::Client) -> Self {
        let feed_client = Arc::new(HttpFeedClient::new(http.clone()));
        let completion_client = completion_client_from_settings(&config.azure_openai, http);

        let transformer = Arc::new(SentimentTransformer::new(
            completion_client,
            config.system_prompt.clone(),
        ));

        let cache = Arc::new(MessageCache::new(
            feed_client.clone(),
            config.feed_url.clone(),
            config.min_word_count,
        ));

        let message_service = Arc::new(MessageService::new(cache, transformer.clone()));
        let diagnostics_service = Arc::new(DiagnosticsService::new(
            feed_client,
            config.feed_url.clone(),
            transformer,
        ));

        Self {
            message_service,
            diagnostics_service,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Message and diagnostics routes, mounted at the root and under `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/TrumpMessage", get(handlers::get_transformed_message))
        .route("/TrumpMessage/original", get(handlers::get_original_message))
        .route("/TrumpMessage/compare", get(handlers::get_message_comparison))
        .route("/Diagnostics", get(handlers::run_diagnostics))
}

/// Build the full router with middleware
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        .merge(api_routes())
        .nest("/api", api_routes())
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,happy_feed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Happy Feed API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        feed_url = %config.feed_url,
        min_word_count = config.min_word_count,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config, reqwest::Client::new());
    let app = app_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
