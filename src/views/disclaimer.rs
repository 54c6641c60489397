use crate::constants::DISCLAIMER_POINTS;
use crate::controller::ChatSession;
use dioxus::prelude::*;

#[component]
pub fn DisclaimerModal(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal disclaimer",
                div { class: "modal-header",
                    div { class: "modal-icon warning", "!" }
                    h2 { "Important Health Disclaimer" }
                }
                div { class: "modal-body",
                    p { "Before you continue, please understand:" }
                    ul { class: "disclaimer-list",
                        for point in DISCLAIMER_POINTS.iter() {
                            li { key: "{point}", "{point}" }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        onclick: move |_| session.write().accept_disclaimer(),
                        "I Understand & Agree"
                    }
                }
            }
        }
    }
}
