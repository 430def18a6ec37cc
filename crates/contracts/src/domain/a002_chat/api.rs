use super::message::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// One history entry as sent to the completion relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    /// The relay prefixes an annotation for flagged turns; the image bytes
    /// themselves stay in the browser.
    #[serde(default)]
    pub has_image: bool,
}

impl From<&ChatMessage> for ChatTurn {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.text.clone(),
            has_image: msg.has_image,
        }
    }
}

/// POST /api/a002-chat/completions request body: the full ordered history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatTurn>,
}

impl CompletionRequest {
    pub fn from_history(history: &[ChatMessage]) -> Self {
        Self {
            messages: history.iter().map(ChatTurn::from).collect(),
        }
    }
}

/// Relay reply: the first completion's text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionReply {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let req = CompletionRequest {
            messages: vec![
                ChatTurn {
                    role: ChatRole::Assistant,
                    content: "hello".into(),
                    has_image: false,
                },
                ChatTurn {
                    role: ChatRole::User,
                    content: "hi".into(),
                    has_image: true,
                },
            ],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["messages"][0]["role"], "assistant");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["has_image"], true);
    }

    #[test]
    fn has_image_defaults_to_false_on_deserialize() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
        assert!(!turn.has_image);
    }

    #[test]
    fn request_snapshots_history_in_order() {
        let history = vec![
            ChatMessage::assistant(1, "greeting"),
            ChatMessage::user(2, "question", true),
        ];
        let req = CompletionRequest::from_history(&history);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].content, "greeting");
        assert!(req.messages[1].has_image);
    }
}
