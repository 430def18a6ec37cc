use super::message::{ChatMessage, ChatRole};
use uuid::Uuid;

/// Opening assistant message of every session.
pub const ASSISTANT_GREETING: &str =
    "Hello! I'm your Ayushmitra Assistant. How can I help you today?";

/// Shown in place of a reply when the completion call fails. The underlying
/// cause goes to the log, never to the user.
pub const FALLBACK_REPLY: &str = "Sorry, I am having trouble connecting to the API.";

/// In-memory, process-lifetime chat session for one open widget instance.
///
/// At most one completion call is in flight: `awaiting_reply` latches on a
/// successful `begin_user_send` and is released only by exactly one of
/// `complete_success` / `complete_failure`.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
    next_id: u64,
}

impl ChatSession {
    /// New session, seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            awaiting_reply: false,
            next_id: 1,
        };
        let id = session.take_id();
        session.messages.push(ChatMessage::assistant(id, ASSISTANT_GREETING));
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a user send.
    ///
    /// No-op while a reply is outstanding, or when the trimmed text is empty
    /// and no image is attached. Otherwise appends the user message, latches
    /// `awaiting_reply` and returns the new message id; the caller must then
    /// drive exactly one completion path.
    pub fn begin_user_send(&mut self, text: &str, has_image: bool) -> Option<u64> {
        if self.awaiting_reply {
            return None;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() && !has_image {
            return None;
        }
        let id = self.take_id();
        self.messages.push(ChatMessage::user(id, trimmed, has_image));
        self.awaiting_reply = true;
        Some(id)
    }

    /// Append the parsed reply and release the latch.
    pub fn complete_success(&mut self, reply: impl Into<String>) {
        let id = self.take_id();
        self.messages.push(ChatMessage::assistant(id, reply));
        self.awaiting_reply = false;
    }

    /// Append the fixed fallback reply and release the latch.
    pub fn complete_failure(&mut self) {
        let id = self.take_id();
        self.messages.push(ChatMessage::assistant(id, FALLBACK_REPLY));
        self.awaiting_reply = false;
    }

    /// Drop all messages and start over with a fresh greeting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_greets() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        let greeting = &session.messages()[0];
        assert_eq!(greeting.role, ChatRole::Assistant);
        assert_eq!(greeting.text, ASSISTANT_GREETING);
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn blank_send_is_a_no_op() {
        let mut session = ChatSession::new();
        assert!(session.begin_user_send("", false).is_none());
        assert!(session.begin_user_send("   \n", false).is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn image_only_send_is_accepted() {
        let mut session = ChatSession::new();
        assert!(session.begin_user_send("", true).is_some());
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::User);
        assert!(last.has_image);
        assert!(last.text.is_empty());
    }

    #[test]
    fn sends_are_serialized_by_the_latch() {
        let mut session = ChatSession::new();
        assert!(session.begin_user_send("first", false).is_some());
        assert!(session.awaiting_reply());
        // Rejected, not queued, while the reply is outstanding.
        assert!(session.begin_user_send("second", false).is_none());
        assert_eq!(session.messages().len(), 2);

        session.complete_success("reply");
        assert!(!session.awaiting_reply());
        assert!(session.begin_user_send("second", false).is_some());
    }

    #[test]
    fn success_appends_exactly_one_assistant_message() {
        let mut session = ChatSession::new();
        session.begin_user_send("hello", false);
        let before = session.messages().len();
        session.complete_success("hi there");
        assert_eq!(session.messages().len(), before + 1);
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, "hi there");
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn failure_appends_the_fixed_fallback() {
        let mut session = ChatSession::new();
        session.begin_user_send("hello", false);
        let before = session.messages().len();
        session.complete_failure();
        assert_eq!(session.messages().len(), before + 1);
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, FALLBACK_REPLY);
        assert!(!session.awaiting_reply());
    }

    #[test]
    fn ids_strictly_increase_in_append_order() {
        let mut session = ChatSession::new();
        session.begin_user_send("one", false);
        session.complete_success("two");
        session.begin_user_send("three", false);
        session.complete_failure();
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn user_text_is_trimmed_on_append() {
        let mut session = ChatSession::new();
        session.begin_user_send("  hello  ", false);
        assert_eq!(session.messages().last().unwrap().text, "hello");
    }
}
