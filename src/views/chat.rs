use crate::attachment::to_display_uri;
use crate::controller::ChatSession;
use crate::format::{format_message_time, render_markdown};
use crate::suggestions::{SUGGESTIONS, Suggestion};
use crate::types::{Role, Turn};
use crate::ui::{send_suggestion, spawn_reply};
use crate::views::shared::{AttachmentPreview, Notice, read_picked_image, turn_anchor};
use dioxus::events::Key;
use dioxus::prelude::*;

const SCROLL_TO_END: &str =
    "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn ChatView(session: Signal<ChatSession>) -> Element {
    let (messages, is_loading, error, show_suggestions) = {
        let guard = session.read();
        (
            guard.messages().to_vec(),
            guard.is_loading(),
            guard.error().map(str::to_string),
            guard.state().show_suggestions(),
        )
    };
    let message_count = messages.len();
    let mut session = session;

    use_effect(use_reactive!(|message_count| {
        let _ = message_count;
        let _ = document::eval(SCROLL_TO_END);
    }));

    rsx! {
        div { class: "main-container",
            div { id: "chat-list", class: "chat-list",
                if show_suggestions {
                    div { class: "suggestion-grid",
                        for suggestion in SUGGESTIONS.iter() {
                            SuggestionCard { key: "{suggestion.title}", session, suggestion: *suggestion }
                        }
                    }
                }
                for turn in messages.into_iter() {
                    MessageBubble { key: "{turn.id}", turn }
                }
                if is_loading {
                    div { class: "message-row model",
                        div { class: "avatar model", "♥" }
                        div { class: "bubble model typing",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }
                if let Some(message) = error {
                    Notice {
                        message,
                        on_dismiss: move |_| session.write().dismiss_error(),
                    }
                }
                div { id: "chat-end" }
            }
            Composer { session }
        }
    }
}

#[component]
fn SuggestionCard(session: Signal<ChatSession>, suggestion: Suggestion) -> Element {
    let on_click = move |_| send_suggestion(session, &suggestion);
    rsx! {
        button { class: "suggestion-card", r#type: "button", onclick: on_click,
            div { class: "suggestion-icon", "{suggestion.icon}" }
            div {
                h3 { class: "suggestion-title", "{suggestion.title}" }
                p { class: "suggestion-prompt", "{suggestion.prompt}" }
            }
        }
    }
}

#[component]
fn MessageBubble(turn: Turn) -> Element {
    let role_class = match turn.role {
        Role::User => "user",
        Role::Model => "model",
    };
    let image_uri = turn.attachment.as_ref().map(to_display_uri);
    let timestamp = format_message_time(turn.timestamp);
    let anchor = turn_anchor(&turn.id);

    rsx! {
        div { id: "{anchor}", class: "message-row {role_class}",
            div { class: "avatar {role_class}", if turn.is_model() { "♥" } else { "You" } }
            div { class: "message-stack",
                div { class: "bubble {role_class}",
                    if let Some(uri) = image_uri {
                        img { class: "bubble-image", src: "{uri}", alt: "User uploaded content" }
                    }
                    if turn.is_model() {
                        ModelText { content: turn.text.clone() }
                    } else {
                        p { "{turn.text}" }
                    }
                }
                if let Some(ts) = timestamp {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}

#[component]
fn ModelText(content: String) -> Element {
    let html = render_markdown(&content);
    let on_copy = move |_| {
        let raw = content.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            {
                let _ = raw;
            }
        });
    };
    rsx! {
        div { class: "md", dangerous_inner_html: "{html}" }
        div { class: "bubble-controls",
            button { class: "action-btn", r#type: "button", title: "Copy answer", onclick: on_copy, "Copy" }
        }
    }
}

#[component]
fn Composer(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let mut notice = use_signal(|| Option::<String>::None);

    let (text, attachment, can_send, is_loading, listening) = {
        let guard = session.read();
        (
            guard.input().text.clone(),
            guard.input().attachment().cloned(),
            guard.input().can_send(),
            guard.is_loading(),
            guard.dictation().is_listening(),
        )
    };

    let mut send = move || {
        let accepted = session.write().send_pending();
        if let Ok(pending) = accepted {
            spawn_reply(session, pending);
        }
    };

    let placeholder = if listening {
        "Listening..."
    } else {
        "Type a message or upload a photo..."
    };

    rsx! {
        form { class: "composer",
            if let Some(message) = notice() {
                Notice { message, on_dismiss: move |_| notice.set(None) }
            }
            if let Some(staged) = attachment {
                AttachmentPreview {
                    attachment: staged,
                    on_remove: move |_| session.write().remove_attachment(),
                }
            }
            div { class: if listening { "composer-inner listening" } else { "composer-inner" },
                label { class: "btn btn-ghost attach-btn", title: "Attach image",
                    "📎"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "hidden",
                        disabled: is_loading || listening,
                        onchange: move |evt: FormEvent| async move {
                            match read_picked_image(&evt).await {
                                Some(Ok(picked)) => {
                                    if let Err(err) = session.write().stage_attachment(picked) {
                                        notice.set(Some(err.to_string()));
                                    }
                                }
                                Some(Err(err)) => {
                                    tracing::warn!(error = %err, "attachment rejected");
                                    notice.set(Some(err.to_string()));
                                }
                                None => {}
                            }
                        },
                    }
                }
                textarea {
                    rows: "1",
                    placeholder: "{placeholder}",
                    value: "{text}",
                    disabled: is_loading,
                    oninput: move |ev| session.write().set_input_text(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send();
                        }
                    },
                }
                button {
                    class: if listening { "btn mic-btn listening" } else { "btn mic-btn" },
                    r#type: "button",
                    title: if listening { "Stop recording" } else { "Voice input" },
                    disabled: is_loading,
                    onclick: move |_| {
                        let toggled = session.write().toggle_dictation();
                        if let Err(err) = toggled {
                            notice.set(Some(err.to_string()));
                        }
                    },
                    if listening { "■" } else { "🎤" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !can_send || is_loading,
                    onclick: move |_| send(),
                    if is_loading { "…" } else { "Send" }
                }
            }
            p { class: "composer-footnote",
                "MediMate AI can make mistakes. Please verify important information with a doctor."
            }
        }
    }
}
