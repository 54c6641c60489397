use super::request::ProviderRequest;
use async_trait::async_trait;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider error {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("No AI provider configured: {0}")]
    NotConfigured(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::MalformedResponse(err.to_string())
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

// ============================================
// Backend Trait
// ============================================

/// The remote generation capability. Every failure, whatever its kind, is
/// treated the same by the session.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        request: &ProviderRequest,
        system_instruction: &str,
    ) -> GenerationResult<String>;

    fn name(&self) -> &str;
}

/// Stand-in used when no credential is available at startup, so the session
/// still runs and surfaces the failure through the usual banner.
pub struct UnconfiguredBackend {
    reason: String,
}

impl UnconfiguredBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl GenerationBackend for UnconfiguredBackend {
    async fn generate(&self, _request: &ProviderRequest, _system: &str) -> GenerationResult<String> {
        Err(GenerationError::NotConfigured(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}
