use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::{ReplyMode, generate_reply},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = payload?;

    // Logged as received, before field validation.
    if state.mode == ReplyMode::Echo {
        tracing::info!(%body, "chat request");
    }

    let request = ChatRequest::try_from(body)?;
    let reply = generate_reply(state.mode, &request.message);
    tracing::debug!(mode = %state.mode, chars = request.message.chars().count(), "reply generated");

    Ok(Json(ChatResponse { reply }))
}
