//! Assistant chat: session state, messages, attachment rules, wire DTOs.

pub mod api;
pub mod attachment;
pub mod message;
pub mod session;

pub use api::{ChatTurn, CompletionReply, CompletionRequest};
pub use attachment::{validate_attachment, AttachmentError, MAX_IMAGE_BYTES};
pub use message::{ChatMessage, ChatRole};
pub use session::{ChatSession, ASSISTANT_GREETING, FALLBACK_REPLY};
