//! MediMate - a multimodal health-information chat client.
//!
//! The core (attachment codec, dictation, message store, request builder and
//! session controller) has no UI dependency. The Dioxus shell lives in [`ui`]
//! and [`views`] behind the `web`, `desktop` and `mobile` features.

pub mod ai;
pub mod attachment;
pub mod composer;
pub mod config;
pub mod constants;
pub mod controller;
pub mod dictation;
pub mod format;
pub mod history;
pub mod session;
pub mod store;
pub mod suggestions;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use controller::{ChatSession, CompletedReply, Overlay, PendingReply, SubmitRejected};
pub use session::{Action, AppView, SessionEvent, SessionState, reduce};
pub use types::{Attachment, Role, Turn, TurnId};
