pub mod gemini;

use super::client::{GenerationBackend, UnconfiguredBackend};
use crate::config::Config;
use std::sync::Arc;
use tracing::{info, warn};

pub use gemini::GeminiBackend;

/// Build the generation backend from environment configuration.
///
/// A missing credential is not fatal: the session still starts and each send
/// fails into the error banner.
pub fn backend_from_env() -> Arc<dyn GenerationBackend> {
    match Config::from_env() {
        Ok(config) => {
            info!(model = %config.model, "using Gemini backend");
            Arc::new(GeminiBackend::new(&config))
        }
        Err(err) => {
            warn!(error = %err, "generation backend unavailable");
            Arc::new(UnconfiguredBackend::new(err.to_string()))
        }
    }
}
