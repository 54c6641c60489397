/// AI module for MediMate
///
/// Turns the conversation into a multimodal provider request and sends it to
/// the generation backend.
///
/// # Architecture
///
/// - `request` - Pure history-to-request transformation
/// - `client` - Backend trait and error types
/// - `providers` - Concrete backends (Gemini REST)
///
/// # Usage
///
/// ```rust,no_run
/// use medimate::ai::{GenerationBackend, build_request, backend_from_env};
/// use medimate::constants::SYSTEM_INSTRUCTION;
///
/// # async fn example() -> Result<(), medimate::ai::GenerationError> {
/// let backend = backend_from_env();
/// let request = build_request(&[], "What is Lisinopril?", None);
/// let answer = backend.generate(&request, SYSTEM_INSTRUCTION).await?;
/// # Ok(())
/// # }
/// ```
mod client;
pub mod providers;
pub mod request;

// Re-export main types
pub use client::{GenerationBackend, GenerationError, GenerationResult, UnconfiguredBackend};
pub use providers::{GeminiBackend, backend_from_env};
pub use request::{InlineData, Part, ProviderRequest, RequestTurn, build as build_request};
