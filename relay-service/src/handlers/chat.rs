use crate::error::{ChatError, INVALID_BODY, MISSING_MESSAGE};
use crate::models::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

/// Relay one message to the generation backend and return its text.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected chat request body");
        ChatError::InvalidInput(INVALID_BODY)
    })?;

    if let Err(e) = request.validate() {
        tracing::warn!(reason = %e, "Chat request without a message");
        return Err(ChatError::InvalidInput(MISSING_MESSAGE));
    }
    let Some(message) = request.message else {
        return Err(ChatError::InvalidInput(MISSING_MESSAGE));
    };

    tracing::info!(message_len = message.len(), "Chat message received");
    tracing::debug!(message = %message, "Chat message content");

    let text = state.text_provider.generate(&message).await?;

    tracing::info!(response_len = text.len(), "Generated response");
    tracing::debug!(response = %text, "Generated response content");

    Ok(Json(ChatResponse { response: text }))
}
