use crate::shared::config;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::types::{ChatMessage, LlmError, LlmProvider};
use contracts::domain::a002_chat::api::{ChatTurn, CompletionReply, CompletionRequest};
use contracts::domain::a002_chat::message::ChatRole;
use std::time::Duration;

/// Prefixed to the text of a turn that carried an image. The binary data
/// stays in the browser; the model only learns that an image was attached.
pub const IMAGE_NOTE: &str = "[User has uploaded an image]. ";

/// Map the wire history onto the completion payload.
///
/// Roles pass through verbatim; turns flagged `has_image` get the fixed
/// annotation prefixed to their content. Order is preserved.
pub fn build_llm_messages(turns: &[ChatTurn]) -> Vec<ChatMessage> {
    turns
        .iter()
        .map(|turn| {
            let content = if turn.has_image {
                format!("{}{}", IMAGE_NOTE, turn.content)
            } else {
                turn.content.clone()
            };
            match turn.role {
                ChatRole::User => ChatMessage::user(content),
                ChatRole::Assistant => ChatMessage::assistant(content),
            }
        })
        .collect()
}

/// Run one completion call for the given history.
///
/// Exactly one remote call per invocation, bounded by the configured
/// deadline; it resolves or fails once, with no retries.
pub async fn complete(request: CompletionRequest) -> Result<CompletionReply, LlmError> {
    if request.messages.is_empty() {
        return Err(LlmError::InvalidRequest("empty message history".into()));
    }

    let llm = &config::get().llm;
    let provider = OpenAiProvider::new_with_endpoint(
        llm.api_endpoint.clone(),
        config::api_key().to_string(),
        llm.model.clone(),
        llm.temperature,
        llm.max_tokens,
    );

    let payload = build_llm_messages(&request.messages);

    let deadline = Duration::from_secs(llm.request_timeout_secs);
    let response = tokio::time::timeout(deadline, provider.chat_completion(payload))
        .await
        .map_err(|_| LlmError::DeadlineExpired(llm.request_timeout_secs))??;

    tracing::info!(
        model = %response.model,
        tokens = ?response.tokens_used,
        "completion resolved"
    );

    Ok(CompletionReply {
        content: response.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::types::ChatRole as LlmRole;

    fn turn(role: ChatRole, content: &str, has_image: bool) -> ChatTurn {
        ChatTurn {
            role,
            content: content.into(),
            has_image,
        }
    }

    #[test]
    fn roles_map_verbatim_and_order_is_preserved() {
        let turns = vec![
            turn(ChatRole::Assistant, "greeting", false),
            turn(ChatRole::User, "question", false),
            turn(ChatRole::Assistant, "answer", false),
        ];
        let payload = build_llm_messages(&turns);
        assert_eq!(payload.len(), 3);
        assert!(matches!(payload[0].role, LlmRole::Assistant));
        assert!(matches!(payload[1].role, LlmRole::User));
        assert!(matches!(payload[2].role, LlmRole::Assistant));
        assert_eq!(payload[1].content, "question");
    }

    #[test]
    fn image_turns_get_the_annotation_prefix() {
        let turns = vec![turn(ChatRole::User, "what is this rash?", true)];
        let payload = build_llm_messages(&turns);
        assert_eq!(
            payload[0].content,
            "[User has uploaded an image]. what is this rash?"
        );
    }

    #[test]
    fn image_only_turn_is_just_the_annotation() {
        let turns = vec![turn(ChatRole::User, "", true)];
        let payload = build_llm_messages(&turns);
        assert_eq!(payload[0].content, "[User has uploaded an image]. ");
    }

    #[test]
    fn plain_turns_are_untouched() {
        let turns = vec![turn(ChatRole::User, "no image here", false)];
        let payload = build_llm_messages(&turns);
        assert_eq!(payload[0].content, "no image here");
    }
}
