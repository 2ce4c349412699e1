use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use leaderboard_core::protocol::{BoardUpdate, Heartbeat, HeartbeatAck, OnlineCount, ScoreSubmission};
use leaderboard_core::Board;

use crate::error::ApiError;
use crate::state::AppState;

// ── Health ──────────────────────────────────────────────────────────────

pub async fn health() -> &'static str {
    "ok"
}

// ── Leaderboard ─────────────────────────────────────────────────────────

/// Raw query pairs. Taken as a list so a repeated key never rejects the
/// request; the first occurrence wins.
pub type QueryPairs = Vec<(String, String)>;

pub fn first_param(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Json<Board> {
    let category = first_param(&query, "category");
    Json(state.store.get_board(category.as_deref()).await)
}

/// The body is parsed by hand so a bad body is a plain 400 with our error
/// shape instead of axum's `Json` rejection.
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
    body: Bytes,
) -> Result<Json<BoardUpdate>, ApiError> {
    let submission = ScoreSubmission::from_json(&body)?;

    // Body category wins; the query string is a fallback.
    let category = if submission.category.trim().is_empty() {
        first_param(&query, "category")
    } else {
        Some(submission.category)
    };

    let board = state
        .store
        .submit_score(category.as_deref(), &submission.name, submission.score)
        .await?;

    Ok(Json(BoardUpdate::new(board)))
}

pub async fn reset_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
) -> Json<BoardUpdate> {
    let category = first_param(&query, "category");
    let board = state.store.reset_category(category.as_deref()).await;
    Json(BoardUpdate::new(board))
}

// ── Presence ────────────────────────────────────────────────────────────

pub async fn presence_count(State(state): State<Arc<AppState>>) -> Json<OnlineCount> {
    Json(OnlineCount {
        online: state.presence.active_count(),
    })
}

pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QueryPairs>,
    body: Bytes,
) -> Result<Json<HeartbeatAck>, ApiError> {
    let mut client_id = Heartbeat::from_json(&body).id;
    if client_id.is_empty() {
        client_id = first_param(&query, "id").unwrap_or_default();
    }

    let online = state.presence.heartbeat(&client_id)?;
    Ok(Json(HeartbeatAck { ok: true, online }))
}

pub async fn api_not_found() -> ApiError {
    ApiError::NotFound
}

// ── Front-end ───────────────────────────────────────────────────────────

/// `index.html`, never cached so a redeploy shows up on the next load.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.static_dir.join("index.html");
    match tokio::fs::read(&path).await {
        Ok(content) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (
                    header::CACHE_CONTROL,
                    "no-store, no-cache, must-revalidate, max-age=0",
                ),
                (header::PRAGMA, "no-cache"),
                (header::EXPIRES, "0"),
            ],
            content,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn favicon(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.static_dir.join("assets").join("logo.svg");
    match tokio::fs::read(&path).await {
        Ok(content) => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            content,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_occurrence_wins() {
        let query = pairs(&[("t", "1"), ("category", "a"), ("category", "b")]);
        assert_eq!(first_param(&query, "category").as_deref(), Some("a"));
        assert_eq!(first_param(&query, "id"), None);
    }
}
