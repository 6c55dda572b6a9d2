use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatMessage, ChatRequest, ChatResponse, HistoryQuery, HistoryResponse, Role},
    services::metrics_manager::MetricsData,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let conversation_id = match payload.conversation_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    };

    let reply = state.matcher.resolve(trimmed);
    state.metrics.record(reply.source).await;

    info!(
        conversation_id = %conversation_id,
        source = reply.source.label(),
        "answered chat message"
    );

    Ok(Json(ChatResponse {
        conversation_id,
        message: ChatMessage {
            role: Role::Assistant,
            content: reply.content,
        },
    }))
}

// Conversations are never stored; the shape is kept for the widget.
pub async fn history_handler(Query(query): Query<HistoryQuery>) -> Json<HistoryResponse> {
    debug!(conversation_id = ?query.conversation_id, "history requested");
    Json(HistoryResponse::default())
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
