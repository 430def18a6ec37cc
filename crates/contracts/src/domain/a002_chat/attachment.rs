use std::fmt;

/// Hard cap for a selected image, 5 MiB.
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Why a selected file was rejected. The message is user-facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    NotAnImage,
    TooLarge,
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::NotAnImage => write!(f, "Please select a valid image file."),
            AttachmentError::TooLarge => write!(f, "Image is too large. Max size is 5 MB."),
        }
    }
}

/// Validate a file selection before it becomes the pending attachment.
///
/// Size comes from the browser `File` API as an f64 byte count, hence the
/// float parameter. A rejection must leave the current attachment untouched.
pub fn validate_attachment(mime_type: &str, size_bytes: f64) -> Result<(), AttachmentError> {
    if !mime_type.starts_with("image/") {
        return Err(AttachmentError::NotAnImage);
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(AttachmentError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_megabyte_png_is_accepted() {
        assert_eq!(validate_attachment("image/png", 2.0 * 1024.0 * 1024.0), Ok(()));
    }

    #[test]
    fn six_megabyte_file_is_rejected() {
        assert_eq!(
            validate_attachment("image/jpeg", 6.0 * 1024.0 * 1024.0),
            Err(AttachmentError::TooLarge)
        );
    }

    #[test]
    fn exact_limit_is_accepted() {
        assert_eq!(validate_attachment("image/webp", MAX_IMAGE_BYTES), Ok(()));
        assert_eq!(
            validate_attachment("image/webp", MAX_IMAGE_BYTES + 1.0),
            Err(AttachmentError::TooLarge)
        );
    }

    #[test]
    fn non_image_mime_is_rejected() {
        assert_eq!(
            validate_attachment("application/pdf", 1024.0),
            Err(AttachmentError::NotAnImage)
        );
        assert_eq!(validate_attachment("", 1024.0), Err(AttachmentError::NotAnImage));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            AttachmentError::NotAnImage.to_string(),
            "Please select a valid image file."
        );
        assert_eq!(
            AttachmentError::TooLarge.to_string(),
            "Image is too large. Max size is 5 MB."
        );
    }
}
