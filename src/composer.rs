use crate::attachment::{AttachmentError, is_image_mime};
use crate::types::Attachment;

/// Not-yet-sent text and attachment staged in the composer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingInput {
    pub text: String,
    staged_attachment: Option<Attachment>,
}

impl PendingInput {
    pub fn attachment(&self) -> Option<&Attachment> {
        self.staged_attachment.as_ref()
    }

    /// Stage `attachment`, replacing whatever was staged before. Non-image
    /// types are refused and leave the current attachment in place.
    pub fn stage_attachment(&mut self, attachment: Attachment) -> Result<(), AttachmentError> {
        if !is_image_mime(&attachment.mime_type) {
            return Err(AttachmentError::NotAnImage(attachment.mime_type));
        }
        self.staged_attachment = Some(attachment);
        Ok(())
    }

    pub fn remove_attachment(&mut self) {
        self.staged_attachment = None;
    }

    /// True when there is something worth sending.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty() || self.staged_attachment.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.staged_attachment.is_none()
    }

    pub fn take(&mut self) -> PendingInput {
        std::mem::take(self)
    }

    pub fn into_parts(self) -> (String, Option<Attachment>) {
        (self.text, self.staged_attachment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::encode;

    #[test]
    fn staging_replaces_previous_attachment() {
        let mut input = PendingInput::default();
        input.stage_attachment(encode(b"first", "image/png")).unwrap();
        input.stage_attachment(encode(b"second", "image/jpeg")).unwrap();
        assert_eq!(input.attachment().unwrap().mime_type, "image/jpeg");

        input.remove_attachment();
        assert!(input.attachment().is_none());
    }

    #[test]
    fn non_image_is_rejected_without_touching_stage() {
        let mut input = PendingInput::default();
        input.stage_attachment(encode(b"img", "image/png")).unwrap();

        let err = input
            .stage_attachment(encode(b"%PDF", "application/pdf"))
            .unwrap_err();
        assert!(matches!(err, AttachmentError::NotAnImage(mime) if mime == "application/pdf"));
        assert_eq!(input.attachment().unwrap().mime_type, "image/png");
    }

    #[test]
    fn can_send_requires_text_or_attachment() {
        let mut input = PendingInput::default();
        assert!(!input.can_send());
        input.text = "   ".into();
        assert!(!input.can_send());
        input.stage_attachment(encode(b"img", "image/png")).unwrap();
        assert!(input.can_send());
    }
}
