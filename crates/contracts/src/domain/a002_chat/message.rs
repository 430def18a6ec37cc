use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message of a chat session.
///
/// `id` is assigned by the session and strictly increases in append order;
/// the sequence order is chronological and is the only ordering used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    /// A locally attached image accompanied this message. The binary data
    /// never travels with the text; the preview handle lives in the UI.
    pub has_image: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: u64, role: ChatRole, text: impl Into<String>, has_image: bool) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            has_image,
            created_at: Utc::now(),
        }
    }

    pub fn user(id: u64, text: impl Into<String>, has_image: bool) -> Self {
        Self::new(id, ChatRole::User, text, has_image)
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, ChatRole::Assistant, text, false)
    }
}
