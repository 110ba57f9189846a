//! # relay_api
//!
//! HTTP API library for Relay.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use relay_core::webhook::{WebhookClient, WebhookError};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{ask, health};

/// Route paths.
pub mod routes {
    pub const POST_ASK: &str = "/ask";
    pub const GET_API_HEALTH: &str = "/api/health";
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Client for the automation backend.
    pub webhook: Arc<WebhookClient>,
}

impl AppState {
    /// Build state for `config`, validating the webhook URL.
    pub fn new(config: ApiConfig) -> Result<Self, WebhookError> {
        let webhook = WebhookClient::new(&config.webhook)?;
        Ok(Self {
            config,
            webhook: Arc::new(webhook),
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route(routes::POST_ASK, post(ask::ask_handler))
        .route(routes::GET_API_HEALTH, get(health::health_handler));

    // Everything else is the browser UI, with unknown paths served index.html.
    match state.config.static_dir.as_deref() {
        Some(dir) if dir.is_dir() => {
            app = app.fallback_service(static_files(dir));
        }
        Some(dir) => {
            warn!(dir = %dir.display(), "static directory not found, UI will not be served");
        }
        None => {}
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
