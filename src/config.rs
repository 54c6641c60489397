use crate::constants::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL};
use std::env;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing API key. Set GEMINI_API_KEY (or API_KEY).")]
    MissingApiKey,
}

/// Deployment settings for the Gemini backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get("GEMINI_API_KEY")
            .or_else(|| get("API_KEY"))
            .ok_or(ConfigError::MissingApiKey)?;
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let endpoint = get("GEMINI_ENDPOINT")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string());

        Ok(Self {
            api_key,
            model,
            endpoint,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: called from main before the UI runtime spawns any threads
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}
