//! Chat Routes - FAQ answers for the portfolio widget

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse, TopicsResponse};
use crate::AppState;

/// Answer a chat message
///
/// POST /api/chat { "message": "..." }
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Answer text", body = ChatResponse),
        (status = 400, description = "Missing or non-string message", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let message = state.responder.respond_json(&payload)?;

    tracing::debug!(answer_len = message.len(), "Chat answered");
    Ok(Json(ChatResponse { message }))
}

/// List topics in matching order
#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "Topics, highest precedence first", body = TopicsResponse)
    ),
    tag = "Chat"
)]
pub async fn list_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: state
            .responder
            .topics()
            .into_iter()
            .map(|t| t.to_string())
            .collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/topics", get(list_topics))
}
