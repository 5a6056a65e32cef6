// Web server — Axum-based moderation endpoint.
//
// Two routes, both JSON:
//   POST /moderate — classify a chat message
//   GET  /health   — static liveness report
//
// Handlers share nothing mutable. AppState only carries the scorer.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::moderation::traits::ModerationScorer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn ModerationScorer>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn ModerationScorer>) -> Self {
        Self { scorer }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, scorer: Arc<dyn ModerationScorer>) -> Result<()> {
    let addr = config.listen_addr();
    let state = AppState::new(scorer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Moderation service listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the full router. Public so tests can drive it without a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/moderate", post(handlers::moderate::moderate))
        .route("/health", get(handlers::health::health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
