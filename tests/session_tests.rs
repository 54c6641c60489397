//! Integration tests for the chat session controller
//!
//! Drives `ChatSession` against scripted backends and a fake speech capture handle.

use async_trait::async_trait;
use medimate::ai::{GenerationBackend, GenerationError, GenerationResult, Part, ProviderRequest};
use medimate::attachment::{AttachmentError, encode};
use medimate::constants::CONNECTION_ERROR_MESSAGE;
use medimate::dictation::{CaptureError, CaptureEvent, DictationSession, SpeechCapture};
use medimate::suggestions::{SUGGESTIONS, SuggestionAction};
use medimate::{ChatSession, Overlay, Role, SessionEvent, SubmitRejected};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Replies in order; `None` entries fail.
struct ScriptedBackend {
    replies: Mutex<VecDeque<Option<String>>>,
    seen: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<Option<&str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(str::to_string)).collect()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ProviderRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: &ProviderRequest, _system: &str) -> GenerationResult<String> {
        self.seen.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(text) => Ok(text),
            None => Err(GenerationError::Provider {
                status: 503,
                body: "overloaded".into(),
            }),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

struct FakeCapture;

impl SpeechCapture for FakeCapture {
    fn start(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

fn session(backend: Arc<ScriptedBackend>) -> ChatSession {
    ChatSession::new(backend, DictationSession::unsupported())
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn successful_exchange_appends_user_and_model_turns() {
        let backend = ScriptedBackend::new(vec![Some("Lisinopril is...")]);
        let mut chat = session(backend.clone());
        assert_eq!(chat.messages().len(), 1);

        let pending = chat.begin_submit("What is Lisinopril?", None).unwrap();
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.is_loading());

        let completed = pending.resolve().await;
        chat.complete(completed);

        assert_eq!(chat.messages().len(), 3);
        assert!(!chat.is_loading());
        assert!(chat.error().is_none());
        let last = chat.messages().last().unwrap();
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.text, "Lisinopril is...");
    }

    #[tokio::test]
    async fn failed_exchange_sets_fixed_error() {
        let backend = ScriptedBackend::new(vec![None]);
        let mut chat = session(backend);

        chat.submit("What is Lisinopril?", None).await.unwrap();

        assert_eq!(chat.messages().len(), 2);
        assert!(!chat.is_loading());
        assert_eq!(chat.error(), Some(CONNECTION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn message_count_tracks_successes_and_failures() {
        let backend = ScriptedBackend::new(vec![Some("a"), None, Some("b"), None, None]);
        let mut chat = session(backend);

        for prompt in ["one", "two", "three", "four", "five"] {
            chat.submit(prompt, None).await.unwrap();
        }
        assert_eq!(chat.messages().len(), 1 + 2 * 2 + 3);
    }

    #[tokio::test]
    async fn second_submit_while_loading_is_ignored() {
        let backend = ScriptedBackend::new(vec![Some("first answer")]);
        let mut chat = session(backend.clone());

        let pending = chat.begin_submit("first", None).unwrap();
        let before = chat.messages().len();

        assert!(matches!(
            chat.begin_submit("second", None),
            Err(SubmitRejected::Busy)
        ));
        assert_eq!(chat.messages().len(), before);
        assert!(chat.is_loading());

        chat.complete(pending.resolve().await);
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_submit_is_ignored() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend.clone());

        assert_eq!(chat.submit("   ", None).await, Err(SubmitRejected::Empty));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_loading());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn request_excludes_new_turn_from_history() {
        let backend = ScriptedBackend::new(vec![Some("first"), Some("second")]);
        let mut chat = session(backend.clone());

        chat.submit("hello", None).await.unwrap();
        let photo = encode(b"\x89PNG", "image/png");
        chat.submit("", Some(photo.clone())).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests[0].len(), 2);
        assert_eq!(requests[1].len(), 4);

        let last = requests[1].contents.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert!(matches!(&last.parts[0], Part::InlineData { inline_data } if inline_data.data == photo.data));
        assert_eq!(last.parts[1], Part::Text { text: String::new() });

        let stored = &chat.messages()[3];
        assert_eq!(stored.attachment.as_ref(), Some(&photo));
    }

    #[tokio::test]
    async fn new_send_clears_previous_error() {
        let backend = ScriptedBackend::new(vec![None, Some("ok")]);
        let mut chat = session(backend);

        chat.submit("one", None).await.unwrap();
        assert!(chat.error().is_some());

        let pending = chat.begin_submit("two", None).unwrap();
        assert!(chat.error().is_none());
        chat.complete(pending.resolve().await);
        assert!(chat.error().is_none());
    }

    #[tokio::test]
    async fn listeners_see_message_changes() {
        let backend = ScriptedBackend::new(vec![Some("hi")]);
        let mut chat = session(backend);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        chat.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        chat.submit("hello", None).await.unwrap();

        let changes = events
            .borrow()
            .iter()
            .filter(|e| **e == SessionEvent::MessagesChanged)
            .count();
        assert_eq!(changes, 2);
    }
}

mod composer_tests {
    use super::*;

    #[tokio::test]
    async fn send_pending_clears_composer_on_accept() {
        let backend = ScriptedBackend::new(vec![Some("answer")]);
        let mut chat = session(backend);
        chat.set_input_text("Is this rash serious?");
        chat.stage_attachment(encode(b"img", "image/jpeg")).unwrap();

        let pending = chat.send_pending().unwrap();
        assert!(chat.input().is_empty());
        chat.complete(pending.resolve().await);

        let user_turn = &chat.messages()[1];
        assert_eq!(user_turn.text, "Is this rash serious?");
        assert_eq!(user_turn.attachment.as_ref().unwrap().mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn failed_send_restores_composer() {
        let backend = ScriptedBackend::new(vec![None]);
        let mut chat = session(backend);
        chat.set_input_text("retry me");

        let pending = chat.send_pending().unwrap();
        chat.complete(pending.resolve().await);

        assert_eq!(chat.input().text, "retry me");
    }

    #[test]
    fn rejected_send_keeps_composer() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend);
        chat.set_input_text("first");
        let _pending = chat.send_pending().unwrap();

        chat.set_input_text("typed while waiting");
        assert_eq!(chat.send_pending().err(), Some(SubmitRejected::Busy));
        assert_eq!(chat.input().text, "typed while waiting");
    }

    #[test]
    fn unreadable_file_keeps_previous_attachment() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("gone"))
            }
        }

        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend);
        chat.stage_file(&b"first image"[..], "image/png").unwrap();

        let err = chat.stage_file(Broken, "image/png").unwrap_err();
        assert!(matches!(err, AttachmentError::Read(_)));
        assert_eq!(
            chat.input().attachment(),
            Some(&encode(b"first image", "image/png"))
        );

        chat.remove_attachment();
        assert!(chat.input().attachment().is_none());
    }

    #[test]
    fn sending_stops_dictation() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = ChatSession::new(backend, DictationSession::new(Some(Box::new(FakeCapture))));
        chat.set_input_text("Hello");
        chat.toggle_dictation().unwrap();
        chat.on_capture_event(CaptureEvent::Transcript("world".into()));
        assert_eq!(chat.input().text, "Hello world");
        assert!(chat.dictation().is_listening());

        let _pending = chat.send_pending().unwrap();
        assert!(!chat.dictation().is_listening());
        assert_eq!(chat.messages()[1].text, "Hello world");
    }

    #[test]
    fn dictation_without_capture_reports_error() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend);
        chat.set_input_text("typed");
        assert!(chat.toggle_dictation().is_err());
        assert!(!chat.dictation().is_listening());
        assert_eq!(chat.input().text, "typed");
        assert!(chat.error().is_none());
    }
}

mod navigation_tests {
    use super::*;

    #[tokio::test]
    async fn populate_suggestion_only_stages_prompt() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend.clone());
        let populate = SUGGESTIONS
            .iter()
            .find(|s| s.action == SuggestionAction::Populate)
            .unwrap();

        assert!(chat.select_suggestion(populate).unwrap().is_none());
        assert_eq!(chat.input().text, populate.prompt);
        assert_eq!(chat.messages().len(), 1);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn send_suggestion_submits_immediately() {
        let backend = ScriptedBackend::new(vec![Some("It lowers blood pressure.")]);
        let mut chat = session(backend);
        let send = SUGGESTIONS
            .iter()
            .find(|s| s.action == SuggestionAction::Send)
            .unwrap();

        let pending = chat.select_suggestion(send).unwrap().unwrap();
        assert_eq!(chat.messages()[1].text, send.prompt);
        assert!(chat.messages()[1].attachment.is_none());
        chat.complete(pending.resolve().await);
        assert_eq!(chat.messages().len(), 3);
        assert!(!chat.state().show_suggestions());
    }

    #[tokio::test]
    async fn jump_to_closes_overlay_and_locates_turn() {
        let backend = ScriptedBackend::new(vec![Some("analysis")]);
        let mut chat = session(backend);
        chat.submit("scan", Some(encode(b"img", "image/png"))).await.unwrap();
        let target = chat.messages()[1].id.clone();

        let scrolled = Rc::new(RefCell::new(None));
        let sink = scrolled.clone();
        chat.subscribe(move |event| {
            if let SessionEvent::ScrollTo(id) = event {
                *sink.borrow_mut() = Some(id.clone());
            }
        });

        chat.open_overlay(Overlay::History);
        assert_eq!(chat.jump_to(&target), Some(1));
        assert_eq!(chat.overlay(), Overlay::None);
        assert_eq!(scrolled.borrow().as_ref(), Some(&target));
    }

    #[test]
    fn jump_to_unknown_turn_is_noop() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend);
        chat.open_overlay(Overlay::History);
        assert_eq!(chat.jump_to(&medimate::TurnId::new("gone")), None);
        assert_eq!(chat.overlay(), Overlay::None);
    }

    #[test]
    fn disclaimer_must_be_accepted_first() {
        let backend = ScriptedBackend::new(vec![]);
        let mut chat = session(backend);
        assert_eq!(chat.state().view, medimate::AppView::Disclaimer);
        chat.accept_disclaimer();
        assert_eq!(chat.state().view, medimate::AppView::Chat);
    }
}
