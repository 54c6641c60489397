//! Chat session controller
//!
//! Mediates user actions against [`SessionState`] and the generation backend.
//! A send is split in three so the network call can run without holding the
//! session:
//!
//! 1. [`ChatSession::begin_submit`] guards, appends the user turn and builds the request;
//! 2. [`PendingReply::resolve`] awaits the backend;
//! 3. [`ChatSession::complete`] appends the answer or sets the error banner.

use crate::ai::{GenerationBackend, GenerationResult, ProviderRequest, build_request};
use crate::attachment::{AttachmentError, read_attachment};
use crate::composer::PendingInput;
use crate::constants::{CONNECTION_ERROR_MESSAGE, SYSTEM_INSTRUCTION};
use crate::dictation::{CaptureEvent, DictationError, DictationSession};
use crate::session::{Action, SessionEvent, SessionState, reduce};
use crate::suggestions::{Suggestion, SuggestionAction};
use crate::types::{Attachment, Turn, TurnId};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("Nothing to send")]
    Empty,

    #[error("A reply is still loading")]
    Busy,
}

/// Modal surfaces layered over the thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    History,
    DocumentAnalysis,
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

pub struct ChatSession {
    state: SessionState,
    input: PendingInput,
    dictation: DictationSession,
    overlay: Overlay,
    backend: Arc<dyn GenerationBackend>,
    system_instruction: String,
    in_flight: Option<TurnId>,
    listeners: Vec<Listener>,
}

/// A submitted turn waiting for the backend.
pub struct PendingReply {
    turn_id: TurnId,
    request: ProviderRequest,
    backend: Arc<dyn GenerationBackend>,
    system_instruction: String,
    restore: Option<PendingInput>,
}

/// Backend outcome for a [`PendingReply`], ready to feed back into the session.
pub struct CompletedReply {
    turn_id: TurnId,
    result: GenerationResult<String>,
    restore: Option<PendingInput>,
}

impl PendingReply {
    pub fn request(&self) -> &ProviderRequest {
        &self.request
    }

    pub fn turn_id(&self) -> &TurnId {
        &self.turn_id
    }

    pub async fn resolve(self) -> CompletedReply {
        let result = self
            .backend
            .generate(&self.request, &self.system_instruction)
            .await;
        CompletedReply {
            turn_id: self.turn_id,
            result,
            restore: self.restore,
        }
    }
}

impl ChatSession {
    pub fn new(backend: Arc<dyn GenerationBackend>, dictation: DictationSession) -> Self {
        Self {
            state: SessionState::default(),
            input: PendingInput::default(),
            dictation,
            overlay: Overlay::None,
            backend,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            in_flight: None,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn messages(&self) -> &[Turn] {
        self.state.messages.all()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn input(&self) -> &PendingInput {
        &self.input
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn dictation(&self) -> &DictationSession {
        &self.dictation
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn dispatch(&mut self, action: Action) {
        let events = reduce(&mut self.state, action);
        self.notify(&events);
    }

    fn notify(&mut self, events: &[SessionEvent]) {
        for event in events {
            for listener in self.listeners.iter_mut() {
                listener(event);
            }
        }
    }

    // ============================================
    // Sending
    // ============================================

    fn check_submit(&self, text: &str, attachment: Option<&Attachment>) -> Result<(), SubmitRejected> {
        if text.trim().is_empty() && attachment.is_none() {
            return Err(SubmitRejected::Empty);
        }
        if self.state.is_loading {
            return Err(SubmitRejected::Busy);
        }
        Ok(())
    }

    /// Append the user turn and prepare the backend call. Rejected input
    /// leaves the session untouched.
    pub fn begin_submit(
        &mut self,
        text: &str,
        attachment: Option<Attachment>,
    ) -> Result<PendingReply, SubmitRejected> {
        self.begin(text, attachment, None)
    }

    fn begin(
        &mut self,
        text: &str,
        attachment: Option<Attachment>,
        restore: Option<PendingInput>,
    ) -> Result<PendingReply, SubmitRejected> {
        if let Err(rejected) = self.check_submit(text, attachment.as_ref()) {
            warn!(reason = %rejected, "submit ignored");
            return Err(rejected);
        }

        let request = build_request(self.state.messages.all(), text, attachment.as_ref());
        let turn = Turn::user(text, attachment);
        let turn_id = turn.id.clone();
        info!(turn = %turn_id, with_attachment = turn.attachment.is_some(), "submitting turn");

        self.dispatch(Action::Submit { turn });
        self.in_flight = Some(turn_id.clone());

        Ok(PendingReply {
            turn_id,
            request,
            backend: Arc::clone(&self.backend),
            system_instruction: self.system_instruction.clone(),
            restore,
        })
    }

    /// Fold a backend outcome into the session.
    pub fn complete(&mut self, reply: CompletedReply) {
        if self.in_flight.as_ref() != Some(&reply.turn_id) {
            warn!(turn = %reply.turn_id, "discarding reply for a turn that is not in flight");
            return;
        }
        self.in_flight = None;

        match reply.result {
            Ok(text) => {
                info!(turn = %reply.turn_id, "reply received");
                self.dispatch(Action::Reply {
                    turn: Turn::model(text),
                });
            }
            Err(err) => {
                error!(turn = %reply.turn_id, backend = self.backend.name(), error = %err, "generation failed");
                if let Some(previous) = reply.restore
                    && self.input.is_empty()
                {
                    self.input = previous;
                }
                self.dispatch(Action::Fail {
                    message: CONNECTION_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Submit and wait for the reply in one step.
    pub async fn submit(&mut self, text: &str, attachment: Option<Attachment>) -> Result<(), SubmitRejected> {
        let pending = self.begin_submit(text, attachment)?;
        let completed = pending.resolve().await;
        self.complete(completed);
        Ok(())
    }

    /// Send what is staged in the composer. Stops dictation and clears the
    /// composer when the send is accepted.
    pub fn send_pending(&mut self) -> Result<PendingReply, SubmitRejected> {
        self.check_submit(&self.input.text, self.input.attachment())?;
        self.dictation.stop();
        let staged = self.input.take();
        let (text, attachment) = staged.clone().into_parts();
        self.begin(&text, attachment, Some(staged))
    }

    pub fn select_suggestion(&mut self, suggestion: &Suggestion) -> Result<Option<PendingReply>, SubmitRejected> {
        match suggestion.action {
            SuggestionAction::Populate => {
                self.input.text = suggestion.prompt.to_string();
                Ok(None)
            }
            SuggestionAction::Send => self.begin_submit(suggestion.prompt, None).map(Some),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(Action::DismissError);
    }

    pub fn accept_disclaimer(&mut self) {
        self.dispatch(Action::AcceptDisclaimer);
    }

    // ============================================
    // Composer
    // ============================================

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input.text = text.into();
    }

    pub fn stage_attachment(&mut self, attachment: Attachment) -> Result<(), AttachmentError> {
        self.input.stage_attachment(attachment)
    }

    /// Read and stage a file. Any failure leaves the current attachment staged.
    pub fn stage_file<R: Read>(&mut self, reader: R, mime_type: &str) -> Result<(), AttachmentError> {
        let attachment = read_attachment(reader, mime_type)?;
        self.input.stage_attachment(attachment)
    }

    pub fn remove_attachment(&mut self) {
        self.input.remove_attachment();
    }

    pub fn toggle_dictation(&mut self) -> Result<(), DictationError> {
        let result = self.dictation.toggle(&self.input.text);
        if let Err(err) = &result {
            warn!(error = %err, "dictation unavailable");
        }
        result
    }

    pub fn on_capture_event(&mut self, event: CaptureEvent) {
        self.dictation.handle(event, &mut self.input.text);
    }

    // ============================================
    // Overlays and navigation
    // ============================================

    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = overlay;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Close any overlay and ask the presentation layer to scroll to `id`.
    /// Unknown ids are a no-op.
    pub fn jump_to(&mut self, id: &TurnId) -> Option<usize> {
        self.close_overlay();
        let position = self.state.messages.position(id)?;
        self.notify(&[SessionEvent::ScrollTo(id.clone())]);
        Some(position)
    }
}
