pub mod config;
pub mod error;
pub mod logging;
pub mod presence;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build a fully configured Router + shared state.
pub fn build_app(config: ServerConfig) -> (Router, Arc<AppState>) {
    let static_files = ServeDir::new(&config.static_dir);
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/leaderboard",
            get(routes::get_leaderboard)
                .post(routes::submit_score)
                .delete(routes::reset_leaderboard),
        )
        .route(
            "/api/presence",
            get(routes::presence_count).post(routes::heartbeat),
        )
        .route("/api/{*rest}", any(routes::api_not_found))
        .route("/", get(routes::index))
        .route("/index.html", get(routes::index))
        .route("/favicon.ico", get(routes::favicon))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}

/// Make sure the store file's directory exists. Failure only means the first
/// write will fail, so it is logged and not fatal.
pub async fn ensure_store_dir(config: &ServerConfig) {
    let Some(parent) = config.store_path.parent() else {
        return;
    };
    if parent.as_os_str().is_empty() {
        return;
    }
    if let Err(e) = tokio::fs::create_dir_all(parent).await {
        warn!(dir = %parent.display(), error = %e, "cannot create store directory");
    }
}
