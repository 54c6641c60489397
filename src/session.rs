//! Session state and its transition function.
//!
//! [`reduce`] is the only place that mutates [`SessionState`]; it reports what
//! changed as [`SessionEvent`]s so a presentation layer can react (scrolling,
//! re-rendering) without being part of the state machine.

use crate::store::MessageStore;
use crate::types::{Role, Turn, TurnId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Disclaimer,
    Chat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub messages: MessageStore,
    pub is_loading: bool,
    pub error: Option<String>,
    pub view: AppView,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            messages: MessageStore::with_bootstrap(),
            is_loading: false,
            error: None,
            view: AppView::Disclaimer,
        }
    }
}

impl SessionState {
    /// Starter prompts are offered until the first exchange.
    pub fn show_suggestions(&self) -> bool {
        self.messages.len() == 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Submit { turn: Turn },
    Reply { turn: Turn },
    Fail { message: String },
    DismissError,
    AcceptDisclaimer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    MessagesChanged,
    StatusChanged,
    ViewChanged,
    /// Presentation request to bring a turn into view.
    ScrollTo(TurnId),
}

pub fn reduce(state: &mut SessionState, action: Action) -> Vec<SessionEvent> {
    match action {
        Action::Submit { turn } => {
            debug_assert_eq!(turn.role, Role::User);
            state.messages.append(turn);
            state.is_loading = true;
            state.error = None;
            vec![SessionEvent::MessagesChanged, SessionEvent::StatusChanged]
        }
        Action::Reply { turn } => {
            debug_assert_eq!(turn.role, Role::Model);
            state.messages.append(turn);
            state.is_loading = false;
            vec![SessionEvent::MessagesChanged, SessionEvent::StatusChanged]
        }
        Action::Fail { message } => {
            state.is_loading = false;
            state.error = Some(message);
            vec![SessionEvent::StatusChanged]
        }
        Action::DismissError => {
            if state.error.take().is_some() {
                vec![SessionEvent::StatusChanged]
            } else {
                Vec::new()
            }
        }
        Action::AcceptDisclaimer => {
            if state.view == AppView::Chat {
                return Vec::new();
            }
            state.view = AppView::Chat;
            vec![SessionEvent::ViewChanged]
        }
    }
}
