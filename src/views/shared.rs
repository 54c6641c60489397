use crate::attachment::{AttachmentError, mime_from_extension, read_attachment, to_display_uri};
use crate::types::{Attachment, TurnId};
use dioxus::prelude::*;
use std::path::Path;

/// Read the first file chosen in a file input as an image attachment.
/// `None` when the picker was dismissed.
pub async fn read_picked_image(evt: &FormEvent) -> Option<Result<Attachment, AttachmentError>> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let Some(mime) = mime_from_extension(Path::new(&name)) else {
        return Some(Err(AttachmentError::NotAnImage(name)));
    };
    let result = match engine.read_file(&name).await {
        Some(bytes) => read_attachment(bytes.as_slice(), mime),
        None => Err(AttachmentError::Read(std::io::Error::other(format!(
            "could not read {name}"
        )))),
    };
    Some(result)
}

/// Element id the chat list gives each rendered turn.
pub fn turn_anchor(id: &TurnId) -> String {
    format!("turn-{id}")
}

#[component]
pub fn AttachmentPreview(attachment: Attachment, on_remove: EventHandler<()>) -> Element {
    let uri = to_display_uri(&attachment);
    rsx! {
        div { class: "attachment-preview",
            div { class: "attachment-thumb",
                img { src: "{uri}", alt: "Attachment preview" }
                button {
                    class: "attachment-remove",
                    r#type: "button",
                    title: "Remove attachment",
                    onclick: move |_| on_remove.call(()),
                    "×"
                }
            }
            div { class: "attachment-caption",
                p { class: "attachment-caption-title", "Image attached" }
                p { "Ready to analyze." }
            }
        }
    }
}

#[component]
pub fn Notice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice",
            span { "{message}" }
            button {
                class: "notice-dismiss",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
