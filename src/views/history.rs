use crate::attachment::to_display_uri;
use crate::controller::{ChatSession, Overlay};
use crate::format::format_history_date;
use crate::history::document_history;
use crate::types::TurnId;
use crate::views::shared::turn_anchor;
use dioxus::prelude::*;

struct HistoryRow {
    id: TurnId,
    title: String,
    preview: String,
    date: Option<String>,
    thumbnail: Option<String>,
}

#[component]
pub fn HistorySidebar(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let (open, rows) = {
        let guard = session.read();
        let rows: Vec<HistoryRow> = document_history(guard.messages())
            .into_iter()
            .map(|event| HistoryRow {
                id: event.request.id.clone(),
                title: event.title().to_string(),
                preview: event.preview(),
                date: format_history_date(event.request.timestamp),
                thumbnail: event.request.attachment.as_ref().map(to_display_uri),
            })
            .collect();
        (guard.overlay() == Overlay::History, rows)
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "sidebar-backdrop", onclick: move |_| session.write().close_overlay() }
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { "Medical History" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| session.write().close_overlay(),
                    "×"
                }
            }
            div { class: "sidebar-body",
                if rows.is_empty() {
                    div { class: "sidebar-empty",
                        p { "No documents analyzed yet." }
                        p { class: "muted", "Upload lab reports or prescriptions to build your history." }
                    }
                }
                for row in rows.into_iter() {
                    HistoryEntry {
                        key: "{row.id}",
                        session,
                        id: row.id,
                        title: row.title,
                        preview: row.preview,
                        date: row.date,
                        thumbnail: row.thumbnail,
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryEntry(
    session: Signal<ChatSession>,
    id: TurnId,
    title: String,
    preview: String,
    date: Option<String>,
    thumbnail: Option<String>,
) -> Element {
    let mut session = session;
    let on_click = move |_| {
        if session.write().jump_to(&id).is_some() {
            let anchor = turn_anchor(&id);
            let _ = document::eval(&format!(
                "document.getElementById('{anchor}')?.scrollIntoView({{ behavior: 'smooth', block: 'center' }});"
            ));
        }
    };
    rsx! {
        button { class: "history-entry", r#type: "button", onclick: on_click,
            if let Some(src) = thumbnail {
                img { class: "history-thumb", src: "{src}", alt: "Document thumbnail" }
            }
            div { class: "history-text",
                div { class: "history-title-row",
                    span { class: "history-title", "{title}" }
                    if let Some(date) = date {
                        span { class: "history-date", "{date}" }
                    }
                }
                p { class: "history-preview", "{preview}" }
            }
        }
    }
}
