//! Handora Storefront - botanical skincare shop.
//!
//! This binary serves the public storefront and the admin console on
//! port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with server-side rendering
//! - Askama templates
//! - JSON file store for products, articles, and orders
//! - Session-held cart and sign-in (in-memory, per process)
//! - Gemini `generateContent` for skin quiz recommendations (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handora_storefront::config::HandoraConfig;
use handora_storefront::services::recommend::RecommendClient;
use handora_storefront::state::AppState;
use handora_storefront::store::{DataStore, JsonFileStore, KvStore};
use handora_storefront::{middleware, routes};

#[tokio::main]
async fn main() {
    // Load .env if present; real environment wins.
    let _ = dotenvy::dotenv();

    // Load configuration from environment
    let config = HandoraConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "handora_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the data directory and load collections
    let backend = JsonFileStore::open(&config.data_dir).expect("Failed to open data directory");
    let store =
        DataStore::open(Arc::new(backend) as Arc<dyn KvStore>).expect("Failed to load collections");
    tracing::info!(dir = %config.data_dir.display(), "collections loaded");

    // Recommendation client is optional; without it the quiz uses the
    // built-in fallback
    let recommender = config.recommend.as_ref().map(RecommendClient::new);
    if recommender.is_none() {
        tracing::info!("no GEMINI_API_KEY set, quiz recommendations use the fallback");
    }

    let addr = config.socket_addr();
    let state = AppState::new(config, store, recommender);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
