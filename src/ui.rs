use crate::ai::backend_from_env;
use crate::constants::APP_NAME;
use crate::controller::{ChatSession, Overlay, PendingReply, SubmitRejected};
use crate::dictation::DictationSession;
use crate::session::AppView;
use crate::suggestions::Suggestion;
use crate::theme::{ThemeMode, theme_definition};
use crate::types::Attachment;
use crate::views::{ChatView, DisclaimerModal, DocumentAnalysisModal, HistorySidebar};
use dioxus::prelude::*;

const MEDIMATE_CSS: Asset = asset!("/assets/medimate.css");

#[component]
pub fn App() -> Element {
    // No speech capture in the webview shell yet; the mic button reports it.
    let session = use_signal(|| ChatSession::new(backend_from_env(), DictationSession::unsupported()));
    let theme = use_signal(|| ThemeMode::Clinical);
    let view = session.read().state().view;

    rsx! {
        ThemeStyles { theme }
        if view == AppView::Disclaimer {
            DisclaimerModal { session }
        }
        DocumentAnalysisModal { session }
        HistorySidebar { session }
        AppHeader { session, theme }
        ChatView { session }
    }
}

/// Run the backend call for `pending` off the session borrow and fold the
/// outcome back in.
///
/// The task is owned by the root scope, not the caller: suggestion cards and
/// the document dialog unmount as soon as they send.
pub fn spawn_reply(mut session: Signal<ChatSession>, pending: PendingReply) {
    let task = spawn_forever(async move {
        let completed = pending.resolve().await;
        session.write().complete(completed);
    });
    if task.is_none() {
        tracing::error!("no runtime to drive the reply task");
    }
}

/// Apply a starter card. `Send` cards submit right away.
pub fn send_suggestion(mut session: Signal<ChatSession>, suggestion: &Suggestion) {
    let selected = session.write().select_suggestion(suggestion);
    if let Ok(Some(pending)) = selected {
        spawn_reply(session, pending);
    }
}

/// Submit a document from the analysis dialog and close it.
pub fn submit_document(
    mut session: Signal<ChatSession>,
    question: &str,
    document: Attachment,
) -> Result<(), SubmitRejected> {
    let pending = session.write().begin_submit(question, Some(document))?;
    session.write().close_overlay();
    spawn_reply(session, pending);
    Ok(())
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MEDIMATE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(session: Signal<ChatSession>, theme: Signal<ThemeMode>) -> Element {
    let mut session = session;
    let mut theme = theme;
    let toggle_label = theme_definition(theme()).label;
    rsx! {
        div { class: "header",
            div { class: "header-brand",
                div { class: "brand-badge", "♥" }
                div {
                    h1 { class: "brand-title", "{APP_NAME}" }
                    p { class: "brand-subtitle", "Healthcare Companion" }
                }
            }
            div { class: "header-actions",
                button {
                    class: "btn btn-accent",
                    r#type: "button",
                    title: "Upload Medical Document",
                    onclick: move |_| session.write().open_overlay(Overlay::DocumentAnalysis),
                    "Analyze Doc"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    title: "History",
                    onclick: move |_| session.write().open_overlay(Overlay::History),
                    "History"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| theme.set(theme().toggled()),
                    "{toggle_label}"
                }
            }
        }
    }
}
