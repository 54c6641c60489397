//! Attachment codec
//!
//! Converts user-selected files into the transport form used by turns and back
//! into data URIs for display. An [`Attachment`] never stores the `data:` header.

use crate::types::Attachment;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("Failed to read attachment: {0}")]
    Read(#[from] std::io::Error),

    #[error("Only images can be attached (got {0})")]
    NotAnImage(String),
}

pub fn encode(bytes: &[u8], mime_type: &str) -> Attachment {
    Attachment {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(bytes),
    }
}

/// Read every byte from `reader` and encode it. A failed read yields
/// [`AttachmentError::Read`] and produces no attachment.
pub fn read_attachment<R: Read>(mut reader: R, mime_type: &str) -> Result<Attachment, AttachmentError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(encode(&bytes, mime_type))
}

pub fn to_display_uri(attachment: &Attachment) -> String {
    format!("data:{};base64,{}", attachment.mime_type, attachment.data)
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .split_once('/')
        .is_some_and(|(family, subtype)| family.eq_ignore_ascii_case("image") && !subtype.is_empty())
}

/// Best-effort MIME type for the image files a native file picker hands back.
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}
