//! Pending image attachment and its preview-URL lifecycle.

use contracts::domain::a002_chat::attachment::{validate_attachment, AttachmentError};

/// An image the user selected for the next message.
///
/// Owns a browser object URL for the preview. The URL is revoked exactly
/// once: `release` moves it out of the `Option`, and `Drop` covers every
/// remaining exit path (replacement, explicit removal, send completion).
#[derive(Debug)]
pub struct PendingImageAttachment {
    preview_url: Option<String>,
}

impl PendingImageAttachment {
    /// Validate the selection and take ownership of a fresh preview URL.
    ///
    /// A rejected file leaves any current attachment untouched; the caller
    /// shows the error text inline.
    pub fn from_file(file: &web_sys::File) -> Result<Self, AttachmentError> {
        validate_attachment(&file.type_(), file.size())?;
        let url = web_sys::Url::create_object_url_with_blob(file)
            .map_err(|_| AttachmentError::NotAnImage)?;
        Ok(Self {
            preview_url: Some(url),
        })
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Revoke the preview URL. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(url) = self.preview_url.take() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }
}

impl Drop for PendingImageAttachment {
    fn drop(&mut self) {
        self.release();
    }
}
