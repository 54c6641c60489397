use crate::controller::{ChatSession, Overlay};
use crate::types::Attachment;
use crate::ui::submit_document;
use crate::views::shared::{AttachmentPreview, Notice, read_picked_image};
use dioxus::prelude::*;

#[component]
pub fn DocumentAnalysisModal(session: Signal<ChatSession>) -> Element {
    if session.read().overlay() != Overlay::DocumentAnalysis {
        return rsx! {};
    }
    rsx! { DocumentForm { session } }
}

/// Lab report or prescription upload with an optional question. Kept apart
/// from the chat composer so its draft does not leak into the chat input.
#[component]
fn DocumentForm(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let mut question = use_signal(String::new);
    let mut document = use_signal(|| Option::<Attachment>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let is_loading = session.read().is_loading();

    let on_analyze = move |_| {
        let Some(attachment) = document() else {
            return;
        };
        if let Err(rejected) = submit_document(session, &question(), attachment) {
            notice.set(Some(rejected.to_string()));
        }
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| session.write().close_overlay(),
            div { class: "modal document", onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h2 { "Analyze Medical Document" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| session.write().close_overlay(),
                        "×"
                    }
                }
                div { class: "modal-body",
                    p { class: "muted",
                        "Upload a photo of a lab report, prescription, or discharge summary."
                    }
                    if let Some(message) = notice() {
                        Notice { message, on_dismiss: move |_| notice.set(None) }
                    }
                    if let Some(staged) = document() {
                        AttachmentPreview { attachment: staged, on_remove: move |_| document.set(None) }
                    } else {
                        label { class: "dropzone",
                            span { "Tap to select a document image" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                class: "hidden",
                                onchange: move |evt: FormEvent| async move {
                                    match read_picked_image(&evt).await {
                                        Some(Ok(picked)) => document.set(Some(picked)),
                                        Some(Err(err)) => {
                                            tracing::warn!(error = %err, "document rejected");
                                            notice.set(Some(err.to_string()));
                                        }
                                        None => {}
                                    }
                                },
                            }
                        }
                    }
                    textarea {
                        rows: "3",
                        placeholder: "Anything specific you want to know? (optional)",
                        value: "{question}",
                        oninput: move |ev| question.set(ev.value()),
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        disabled: document.read().is_none() || is_loading,
                        onclick: on_analyze,
                        "Analyze"
                    }
                }
            }
        }
    }
}
