//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls `/health` at startup and `/test/capture` on
//! submit. `/app` serves the page shell and `/pkg` the wasm bundle built
//! from `janus-client`. CORS is open so a page served from elsewhere (a
//! file or a dev server) can still reach the API.


pub mod capture;

use axum::Router;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use janus_client::net::types::HealthStatus;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub const SERVICE_NAME: &str = "janus-ai-butler";

#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

pub fn app(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/test/capture", post(capture::test_capture))
        .route("/app", get(app_shell))
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// `GET /`
async fn root() -> Json<RootMessage> {
    Json(RootMessage { message: "Janus AI Butler API is running" })
}

/// `GET /health`
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy".to_owned(), service: SERVICE_NAME.to_owned() })
}

/// `GET /app`: page shell the client mounts onto.
async fn app_shell() -> Html<String> {
    Html(janus_client::render::shell::page())
}
