//! Chat Widget - View Model

use super::attachment::PendingImageAttachment;
use contracts::domain::a002_chat::ChatSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    pub expanded: RwSignal<bool>,
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
    pub attachment: RwSignal<Option<PendingImageAttachment>>,
    pub upload_error: RwSignal<Option<String>>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            expanded: RwSignal::new(false),
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
            attachment: RwSignal::new(None),
            upload_error: RwSignal::new(None),
        }
    }

    pub fn awaiting_reply(&self) -> bool {
        self.session.with(|s| s.awaiting_reply())
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment.with(|a| a.is_some())
    }

    /// Drop the pending attachment; its preview URL is revoked on drop.
    pub fn clear_attachment(&self) {
        self.attachment.set(None);
        self.upload_error.set(None);
    }
}
