use axum::http::StatusCode;
use axum::Json;

use crate::domain::a002_chat;
use crate::shared::llm::types::LlmError;
use contracts::domain::a002_chat::api::{CompletionReply, CompletionRequest};

/// POST /api/a002-chat/completions
///
/// Relays the accumulated history to the completion provider. Every failure
/// maps to a non-2xx status; the cause is logged here and never forwarded,
/// so the frontend can substitute its fixed fallback reply.
pub async fn complete(
    Json(request): Json<CompletionRequest>,
) -> Result<Json<CompletionReply>, StatusCode> {
    match a002_chat::service::complete(request).await {
        Ok(reply) => Ok(Json(reply)),
        Err(LlmError::InvalidRequest(e)) => {
            tracing::warn!("rejected completion request: {}", e);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(LlmError::DeadlineExpired(secs)) => {
            tracing::error!("completion call exceeded {}s deadline", secs);
            Err(StatusCode::GATEWAY_TIMEOUT)
        }
        Err(e) => {
            tracing::error!("completion call failed: {}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
