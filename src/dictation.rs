//! Dictation session
//!
//! Tracks live speech-to-text capture and folds cumulative transcripts into the
//! composer text. The host detects the capture capability once and hands the
//! resulting handle (or `None`) to [`DictationSession::new`].

use tracing::{info, warn};

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CaptureError(pub String);

/// Platform speech recognition, reduced to what the session drives.
pub trait SpeechCapture: Send {
    fn start(&mut self) -> Result<(), CaptureError>;
    fn stop(&mut self);
}

/// Events the capture handle posts back while active.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    /// Full transcript accumulated since `start`, not a delta.
    Transcript(String),
    Error(String),
    End,
}

#[derive(Debug, thiserror::Error)]
pub enum DictationError {
    #[error("Voice input is not supported on this device.")]
    Unsupported,

    #[error("Voice input failed to start: {0}")]
    Capture(#[from] CaptureError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictationState {
    Idle,
    Listening { baseline: String },
}

pub struct DictationSession {
    capture: Option<Box<dyn SpeechCapture>>,
    state: DictationState,
}

impl DictationSession {
    pub fn new(capture: Option<Box<dyn SpeechCapture>>) -> Self {
        Self {
            capture,
            state: DictationState::Idle,
        }
    }

    pub fn unsupported() -> Self {
        Self::new(None)
    }

    pub fn is_supported(&self) -> bool {
        self.capture.is_some()
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, DictationState::Listening { .. })
    }

    pub fn state(&self) -> &DictationState {
        &self.state
    }

    /// Begin listening, appending to `current_text`.
    pub fn start(&mut self, current_text: &str) -> Result<(), DictationError> {
        if self.is_listening() {
            return Ok(());
        }
        let capture = self.capture.as_mut().ok_or(DictationError::Unsupported)?;
        capture.start()?;
        info!("dictation started");
        self.state = DictationState::Listening {
            baseline: current_text.to_string(),
        };
        Ok(())
    }

    pub fn stop(&mut self) {
        if !self.is_listening() {
            return;
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.stop();
        }
        self.state = DictationState::Idle;
        info!("dictation stopped");
    }

    /// Microphone button: stop when listening, start otherwise.
    pub fn toggle(&mut self, current_text: &str) -> Result<(), DictationError> {
        if self.is_listening() {
            self.stop();
            Ok(())
        } else {
            self.start(current_text)
        }
    }

    /// Apply a capture event to `text`. Ignored unless listening.
    pub fn handle(&mut self, event: CaptureEvent, text: &mut String) {
        let DictationState::Listening { baseline } = &self.state else {
            return;
        };
        match event {
            CaptureEvent::Transcript(transcript) => {
                *text = join_transcript(baseline, &transcript);
            }
            CaptureEvent::Error(reason) => {
                warn!(%reason, "speech capture error");
                self.state = DictationState::Idle;
            }
            CaptureEvent::End => {
                self.state = DictationState::Idle;
            }
        }
    }
}

fn join_transcript(baseline: &str, transcript: &str) -> String {
    let needs_space = !baseline.is_empty() && !baseline.ends_with(char::is_whitespace);
    let mut joined = String::with_capacity(baseline.len() + transcript.len() + 1);
    joined.push_str(baseline);
    if needs_space {
        joined.push(' ');
    }
    joined.push_str(transcript);
    joined
}
